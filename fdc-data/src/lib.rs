//! Aggregation of hotspot datasets.
//!
//! This crate turns a filtered `HotspotDataset` into the per-state counts
//! shown by the bar chart.

/// Hotspot counts per region (state).
pub mod regions {
    use fdc_inpe::dataset::HotspotDataset;
    use log::debug;
    use serde::Serialize;
    use std::collections::BTreeMap;

    /// Number of hotspots detected in one region.
    #[derive(Debug, Clone, Serialize, PartialEq, Eq)]
    pub struct RegionCount {
        pub region: String,
        pub count: usize,
    }

    /// Count occurrences of each region name.
    ///
    /// Result is sorted by count descending. Ties are ordered by region name
    /// ascending, so the output does not depend on input order.
    pub fn count_regions<'a, I>(regions: I) -> Vec<RegionCount>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for region in regions {
            *counts.entry(region).or_default() += 1;
        }
        // BTreeMap yields names in ascending order; the stable sort keeps it for ties.
        let mut result = counts
            .into_iter()
            .map(|(region, count)| RegionCount {
                region: region.to_string(),
                count,
            })
            .collect::<Vec<RegionCount>>();
        result.sort_by(|a, b| b.count.cmp(&a.count));
        result
    }

    /// Per-region counts of a dataset.
    pub fn region_counts(dataset: &HotspotDataset) -> Vec<RegionCount> {
        let result = count_regions(dataset.iter().map(|r| r.region.as_str()));
        debug!(
            "{} hotspots across {} regions on {}",
            dataset.len(),
            result.len(),
            dataset.selected_date()
        );
        result
    }

}
