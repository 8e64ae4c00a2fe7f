//! Script glue between the Rust view models and the browser.
//!
//! Leaflet and D3 are loaded from their CDNs. The render functions live in
//! `assets/js/*.js`, are embedded at compile time, and are called with the
//! JSON-serialized `HotspotMap` / `RegionBarChart`.

use serde::Serialize;

use crate::chart::RegionBarChart;
use crate::map::HotspotMap;

static HOTSPOT_MAP_JS: &str = include_str!("../assets/js/hotspot-map.js");
static REGION_BAR_CHART_JS: &str = include_str!("../assets/js/region-bar-chart.js");

pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const D3_JS_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Serialize a value for inlining inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\u` escapes
/// decode to the same text, so `</script>` can never appear in the output.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// `<head>` tags for the third-party libraries.
pub fn library_tags() -> String {
    format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n<script src=\"{}\"></script>\n<script src=\"{}\"></script>\n",
        LEAFLET_CSS_URL, LEAFLET_JS_URL, D3_JS_URL
    )
}

/// The embedded render functions, as one inline script.
pub fn chart_scripts() -> String {
    format!(
        "<script>\n{}\n{}\n</script>\n",
        HOTSPOT_MAP_JS, REGION_BAR_CHART_JS
    )
}

fn render_call(function: &str, container_id: &str, data_json: &str) -> serde_json::Result<String> {
    Ok(format!(
        "<script>\ntry {{ {}({}, {}); }} catch(e) {{ console.error('[FDC] {} error:', e); }}\n</script>\n",
        function,
        script_json(container_id)?,
        data_json,
        function
    ))
}

/// Script that draws the hotspot map into `container_id`.
pub fn render_hotspot_map(container_id: &str, map: &HotspotMap) -> serde_json::Result<String> {
    render_call("renderHotspotMap", container_id, &script_json(map)?)
}

/// Script that draws the region bar chart into `container_id`.
pub fn render_region_bar_chart(
    container_id: &str,
    chart: &RegionBarChart,
) -> serde_json::Result<String> {
    render_call("renderRegionBarChart", container_id, &script_json(chart)?)
}
