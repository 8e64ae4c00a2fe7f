//! Interactive dashboard over HTTP.
//!
//! `GET /?date=YYYY-MM-DD` runs the whole pipeline for that date and answers
//! with the page. Without a date the default selection (yesterday, fixed at
//! process start) is used. Nothing is shared between requests besides the
//! read-only state below.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use fdc_inpe::feed::FeedSource;
use fdc_inpe::selection::UserDateSelection;
use fdc_view::page::{DashboardPage, PageContent};
use log::{error, info, warn};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::pipeline::dashboard_page;

pub struct ServeState {
    pub source: FeedSource,
    /// Wall-clock date at process start
    pub today: NaiveDate,
}

impl ServeState {
    pub fn default_selection(&self) -> UserDateSelection {
        UserDateSelection::yesterday(self.today)
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub date: Option<String>,
}

pub fn router(state: Arc<ServeState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .with_state(state)
}

pub async fn run_serve(bind: SocketAddr, source: FeedSource, today: NaiveDate) -> anyhow::Result<()> {
    let state = Arc::new(ServeState { source, today });
    info!(
        "Serving dashboard on http://{} (default date {})",
        bind,
        state.default_selection().date
    );
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Build the page and status for a request's `date` parameter.
pub async fn page_for_request(state: &ServeState, date: Option<&str>) -> (StatusCode, DashboardPage) {
    let date = date.map(str::trim).filter(|d| !d.is_empty());
    let selection = match date {
        None => state.default_selection(),
        Some(raw) => match fdc_utils::dates::parse_user_date(raw) {
            Ok(date) => UserDateSelection::new(date),
            Err(e) => {
                warn!("Rejected date parameter '{}': {}", raw, e);
                let page = DashboardPage {
                    selected_date: state.default_selection().date,
                    interactive: true,
                    notice: None,
                    content: PageContent::Error(format!("Data inválida '{}': {}", raw, e)),
                };
                return (StatusCode::BAD_REQUEST, page);
            }
        },
    };

    let (page, ok) = dashboard_page(&state.source, &selection, state.today, true).await;
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, page)
}

async fn dashboard(
    State(state): State<Arc<ServeState>>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let (status, page) = page_for_request(&state, query.date.as_deref()).await;
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
