//! The dashboard HTML page: header, date picker, map, chart.

use chrono::NaiveDate;
use fdc_inpe::dataset::HotspotDataset;
use fdc_utils::dates::format_date;
use log::debug;

use crate::chart::RegionBarChart;
use crate::js_bridge;
use crate::map::HotspotMap;

pub const TITLE: &str = "Focos de Calor no Brasil";
pub const DESCRIPTION: &str = "Este dashboard apresenta os focos de calor do dia de ontem. Você também pode selecionar datas anteriores, até 40 dias antes de hoje";
pub const DATE_LABEL: &str = "Selecione uma data";

/// DOM ids the render scripts draw into.
pub const MAP_CONTAINER_ID: &str = "hotspot-map";
pub const CHART_CONTAINER_ID: &str = "region-chart";

/// Both views built from one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub map: HotspotMap,
    pub chart: RegionBarChart,
}

impl Dashboard {
    pub fn from_dataset(dataset: &HotspotDataset) -> Self {
        Dashboard {
            map: HotspotMap::from_dataset(dataset),
            chart: RegionBarChart::from_dataset(dataset),
        }
    }

    pub fn hotspot_count(&self) -> usize {
        self.map.marker_count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Dashboard(Dashboard),
    /// The pipeline failed; shown in place of the views
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub selected_date: NaiveDate,
    /// Submitting the date picker reloads the page (served mode only)
    pub interactive: bool,
    /// Non-fatal hint shown above the views
    pub notice: Option<String>,
    pub content: PageContent,
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body { margin: 0; padding: 16px 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #212121; }
h1 { margin: 0 0 8px 0; font-size: 28px; }
.fdc-description { margin: 0 0 16px 0; color: #616161; }
.fdc-date { margin: 8px 0 16px 0; }
.fdc-date label { font-weight: bold; margin-right: 8px; }
.fdc-notice { padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082; }
.fdc-error { padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; }
.fdc-total { margin: 8px 0; font-size: 14px; color: #424242; }
#hotspot-map { width: 100%; height: 520px; margin-bottom: 24px; }
#region-chart { width: 100%; min-height: 420px; position: relative; }
";

impl DashboardPage {
    pub fn render(&self) -> serde_json::Result<String> {
        let date_value = format_date(&self.selected_date);
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(TITLE)));
        html.push_str(&format!("<style>\n{}</style>\n", STYLE));
        html.push_str(&js_bridge::library_tags());
        html.push_str("</head>\n<body>\n");

        html.push_str(&format!("<h1>{}</h1>\n", escape_html(TITLE)));
        html.push_str(&format!(
            "<p class=\"fdc-description\">{}</p>\n",
            escape_html(DESCRIPTION)
        ));

        let input_attrs = if self.interactive {
            " onchange=\"this.form.submit()\""
        } else {
            " disabled"
        };
        html.push_str(&format!(
            "<form class=\"fdc-date\" method=\"get\" action=\"/\">\n<label for=\"date\">{}</label>\n<input type=\"date\" id=\"date\" name=\"date\" value=\"{}\"{}>\n</form>\n",
            escape_html(DATE_LABEL),
            date_value,
            input_attrs
        ));

        if let Some(notice) = &self.notice {
            html.push_str(&format!(
                "<div class=\"fdc-notice\">{}</div>\n",
                escape_html(notice)
            ));
        }

        match &self.content {
            PageContent::Error(message) => {
                html.push_str(&format!(
                    "<div class=\"fdc-error\"><strong>Erro: </strong>{}</div>\n",
                    escape_html(message)
                ));
            }
            PageContent::Dashboard(dashboard) => {
                html.push_str(&format!(
                    "<p class=\"fdc-total\">Total de focos de calor em {}: {}</p>\n",
                    date_value,
                    dashboard.hotspot_count()
                ));
                html.push_str(&format!("<div id=\"{}\"></div>\n", MAP_CONTAINER_ID));
                html.push_str(&format!("<div id=\"{}\"></div>\n", CHART_CONTAINER_ID));
                html.push_str(&js_bridge::chart_scripts());
                html.push_str(&js_bridge::render_hotspot_map(MAP_CONTAINER_ID, &dashboard.map)?);
                html.push_str(&js_bridge::render_region_bar_chart(
                    CHART_CONTAINER_ID,
                    &dashboard.chart,
                )?);
            }
        }

        html.push_str("</body>\n</html>\n");
        debug!("Rendered page for {} ({} bytes)", date_value, html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE_FEED: &str = include_str!("../../fixtures/focos_abertos_24h_20240305.csv");

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn page(content: PageContent) -> DashboardPage {
        DashboardPage {
            selected_date: march_5(),
            interactive: true,
            notice: None,
            content,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"A & B\"</b> 'c'"),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt; &#39;c&#39;"
        );
        assert_eq!(escape_html("SÃO PAULO"), "SÃO PAULO");
    }

    #[test]
    fn test_dashboard_page_contains_views() {
        let dataset = HotspotDataset::from_feed(SAMPLE_FEED, march_5()).unwrap();
        let dashboard = Dashboard::from_dataset(&dataset);
        assert_eq!(dashboard.hotspot_count(), 6);
        let html = page(PageContent::Dashboard(dashboard)).render().unwrap();
        assert!(html.contains("<h1>Focos de Calor no Brasil</h1>"));
        assert!(html.contains("value=\"2024-03-05\" onchange=\"this.form.submit()\""));
        assert!(html.contains("Total de focos de calor em 2024-03-05: 6"));
        assert!(html.contains("renderHotspotMap(\"hotspot-map\""));
        assert!(html.contains("renderRegionBarChart(\"region-chart\""));
        assert!(html.contains("SORRISO - MATO GROSSO"));
        assert!(!html.contains("class=\"fdc-error\""));
    }

    #[test]
    fn test_empty_dashboard_renders() {
        let header_only = "data_hora_gmt,lat,lon,pais,estado,municipio\n";
        let dataset = HotspotDataset::from_feed(header_only, march_5()).unwrap();
        let dashboard = Dashboard::from_dataset(&dataset);
        assert_eq!(dashboard.map.marker_count(), 0);
        assert!(dashboard.chart.bars.is_empty());
        let html = page(PageContent::Dashboard(dashboard)).render().unwrap();
        assert!(html.contains("\"markers\":[]"));
        assert!(html.contains("\"bars\":[]"));
    }

    #[test]
    fn test_error_page_replaces_views() {
        let mut error_page = page(PageContent::Error("Unexpected HTTP status 404 <x>".to_string()));
        error_page.notice = Some("selected date is 90 days ago".to_string());
        let html = error_page.render().unwrap();
        assert!(html.contains("class=\"fdc-error\""));
        assert!(html.contains("Unexpected HTTP status 404 &lt;x&gt;"));
        assert!(html.contains("selected date is 90 days ago"));
        assert!(!html.contains("renderHotspotMap("));
    }

    #[test]
    fn test_static_page_disables_picker() {
        let mut static_page = page(PageContent::Error(String::new()));
        static_page.interactive = false;
        let html = static_page.render().unwrap();
        assert!(html.contains("value=\"2024-03-05\" disabled"));
    }
}
