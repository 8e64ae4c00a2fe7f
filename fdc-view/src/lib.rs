//! Views for the FDC dashboard.
//!
//! This crate provides:
//! - `map`: the hotspot map model (fixed center/zoom, one marker per row)
//! - `chart`: the per-state bar chart model
//! - `js_bridge`: embedded Leaflet/D3 scripts and the calls that feed them JSON
//! - `page`: the HTML dashboard assembled from the above

pub mod chart;
pub mod js_bridge;
pub mod map;
pub mod page;
