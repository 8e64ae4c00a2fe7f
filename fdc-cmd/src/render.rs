//! One-shot rendering of the dashboard into an HTML file.

use anyhow::Context;
use chrono::NaiveDate;
use fdc_inpe::feed::FeedSource;
use fdc_inpe::selection::UserDateSelection;
use fdc_view::page::{DashboardPage, PageContent};
use log::info;
use std::path::Path;

use crate::pipeline::{advisory_notice, run_pipeline};

/// Run the pipeline for `selection` and write the page to `output`.
///
/// Unlike the served dashboard, a failed run is returned as an error and
/// nothing is written.
pub async fn run_render(
    source: &FeedSource,
    selection: &UserDateSelection,
    today: NaiveDate,
    output: &Path,
) -> anyhow::Result<()> {
    let notice = advisory_notice(selection, today);
    let (_, dashboard) = run_pipeline(source, selection)
        .await
        .with_context(|| format!("Failed to build dashboard for {}", selection.date))?;
    let markers = dashboard.map.marker_count();

    let page = DashboardPage {
        selected_date: selection.date,
        interactive: false,
        notice,
        content: PageContent::Dashboard(dashboard),
    };
    let html = page.render()?;
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Render complete. {} hotspots written to {}",
        markers,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixtures() -> FeedSource {
        FeedSource::Directory(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures"))
    }

    #[tokio::test]
    async fn test_render_writes_page() {
        let output = std::env::temp_dir().join(format!("fdc-render-{}.html", std::process::id()));
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        run_render(&fixtures(), &UserDateSelection::new(date), today, &output)
            .await
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        let _ = std::fs::remove_file(&output);
        assert!(html.contains("Total de focos de calor em 2024-03-05: 6"));
        assert!(html.contains("value=\"2024-03-05\" disabled"));
    }

    #[tokio::test]
    async fn test_render_fails_without_feed() {
        let output = std::env::temp_dir().join(format!("fdc-render-missing-{}.html", std::process::id()));
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let result = run_render(&fixtures(), &UserDateSelection::new(date), date, &output).await;
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
