//! Hotspot map model handed to Leaflet as JSON.

use fdc_inpe::dataset::HotspotDataset;
use fdc_inpe::hotspot::HotspotRecord;
use serde::Serialize;

/// Initial map center (lat, lon), near Brasília.
pub const MAP_CENTER: (f64, f64) = (-15.788497, -47.879873);

/// Initial Leaflet zoom level.
pub const MAP_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Pin colors understood by `hotspot-map.js`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub position: LatLon,
    /// Hover label, "{municipality} - {region}"
    pub tooltip: String,
    pub color: MarkerColor,
}

impl From<&HotspotRecord> for Marker {
    fn from(record: &HotspotRecord) -> Self {
        Marker {
            position: LatLon {
                lat: record.latitude,
                lon: record.longitude,
            },
            tooltip: format!("{} - {}", record.municipality, record.region),
            color: MarkerColor::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HotspotMap {
    pub center: LatLon,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl HotspotMap {
    /// One marker per record, in dataset order. Center and zoom never depend
    /// on the data.
    pub fn from_dataset(dataset: &HotspotDataset) -> Self {
        HotspotMap {
            center: LatLon {
                lat: MAP_CENTER.0,
                lon: MAP_CENTER.1,
            },
            zoom: MAP_ZOOM,
            markers: dataset.iter().map(Marker::from).collect(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}
