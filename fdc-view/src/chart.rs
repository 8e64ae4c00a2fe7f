//! Bar chart of hotspot counts per state, handed to D3 as JSON.

use fdc_data::regions::{region_counts, RegionCount};
use fdc_inpe::dataset::HotspotDataset;
use serde::Serialize;

pub const X_AXIS_TITLE: &str = "Estados";
pub const Y_AXIS_TITLE: &str = "Número de focos de calor";

/// Qualitative palette, one color per bar, cycling when there are more states.
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub region: String,
    pub count: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionBarChart {
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub bars: Vec<Bar>,
}

impl RegionBarChart {
    /// Bars in the order given (expected: count descending).
    pub fn from_counts(counts: &[RegionCount]) -> Self {
        let bars = counts
            .iter()
            .enumerate()
            .map(|(i, c)| Bar {
                region: c.region.clone(),
                count: c.count,
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();
        RegionBarChart {
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
            bars,
        }
    }

    pub fn from_dataset(dataset: &HotspotDataset) -> Self {
        RegionBarChart::from_counts(&region_counts(dataset))
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }
}
