use chrono::NaiveDate;
use log::info;

use crate::error::Result;
use crate::hotspot::HotspotRecord;

/// Country value kept by the filter.
pub const COUNTRY: &str = "Brasil";

/// Hotspots of one calendar date and one country, in feed order.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotDataset {
    selected_date: NaiveDate,
    records: Vec<HotspotRecord>,
}

impl HotspotDataset {
    /// Keep only records detected on `selected_date` (GMT calendar date)
    /// and located in `COUNTRY`. Order is preserved.
    pub fn filter(records: Vec<HotspotRecord>, selected_date: NaiveDate) -> Self {
        let total = records.len();
        let records = records
            .into_iter()
            .filter(|r| r.timestamp.date() == selected_date)
            .filter(|r| r.country == COUNTRY)
            .collect::<Vec<HotspotRecord>>();
        info!(
            "Kept {} of {} hotspots for {} in {}",
            records.len(),
            total,
            selected_date,
            COUNTRY
        );
        HotspotDataset {
            selected_date,
            records,
        }
    }

    /// Parse a feed body and filter it in one step.
    pub fn from_feed(request_body: &str, selected_date: NaiveDate) -> Result<Self> {
        let records = HotspotRecord::request_to_records(request_body)?;
        Ok(HotspotDataset::filter(records, selected_date))
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn country(&self) -> &'static str {
        COUNTRY
    }

    pub fn records(&self) -> &[HotspotRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HotspotRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HotspotDataset {
    type Item = &'a HotspotRecord;
    type IntoIter = std::slice::Iter<'a, HotspotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
