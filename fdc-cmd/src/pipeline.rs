//! One full dashboard run: resolve date → load feed → filter → build views.

use chrono::NaiveDate;
use fdc_inpe::{
    dataset::HotspotDataset, error::FeedError, feed::FeedSource, selection::UserDateSelection,
};
use fdc_view::page::{Dashboard, DashboardPage, PageContent};
use log::{info, warn};

/// Load the dataset for `selection` and build both views from it.
pub async fn run_pipeline(
    source: &FeedSource,
    selection: &UserDateSelection,
) -> Result<(HotspotDataset, Dashboard), FeedError> {
    let dataset = source.load_dataset(selection).await?;
    let dashboard = Dashboard::from_dataset(&dataset);
    info!(
        "Built dashboard for {}: {} markers, {} regions",
        dataset.selected_date(),
        dashboard.map.marker_count(),
        dashboard.chart.bars.len()
    );
    Ok((dataset, dashboard))
}

/// Warn about selections outside the advertised window. Never blocks the run.
pub fn advisory_notice(selection: &UserDateSelection, today: NaiveDate) -> Option<String> {
    selection.advisory_warning(today).map(|warning| {
        warn!("{}: {}", selection.date, warning);
        warning.to_string()
    })
}

/// Run the pipeline and wrap the outcome in a page. A failed run becomes an
/// error page; the flag reports whether the run succeeded.
pub async fn dashboard_page(
    source: &FeedSource,
    selection: &UserDateSelection,
    today: NaiveDate,
    interactive: bool,
) -> (DashboardPage, bool) {
    let notice = advisory_notice(selection, today);
    let (content, ok) = match run_pipeline(source, selection).await {
        Ok((_, dashboard)) => (PageContent::Dashboard(dashboard), true),
        Err(e) => {
            warn!("Dashboard for {} failed: {}", selection.date, e);
            (PageContent::Error(e.to_string()), false)
        }
    };
    let page = DashboardPage {
        selected_date: selection.date,
        interactive,
        notice,
        content,
    };
    (page, ok)
}
