//! Per-state hotspot counts written as CSV.

use anyhow::Context;
use chrono::NaiveDate;
use fdc_data::regions::region_counts;
use fdc_inpe::feed::FeedSource;
use fdc_inpe::selection::UserDateSelection;
use log::info;
use std::io::Write;

use crate::pipeline::advisory_notice;

/// Load the dataset for `selection` and write `estado,focos` rows, count descending.
pub async fn run_regions<W: Write>(
    source: &FeedSource,
    selection: &UserDateSelection,
    today: NaiveDate,
    out: W,
) -> anyhow::Result<()> {
    advisory_notice(selection, today);
    let dataset = source
        .load_dataset(selection)
        .await
        .with_context(|| format!("Failed to load hotspots for {}", selection.date))?;
    let counts = region_counts(&dataset);

    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["estado", "focos"])?;
    for c in &counts {
        wtr.write_record([c.region.as_str(), c.count.to_string().as_str()])?;
    }
    wtr.flush()?;

    info!(
        "{} hotspots in {} states on {}",
        dataset.len(),
        counts.len(),
        selection.date
    );
    Ok(())
}
