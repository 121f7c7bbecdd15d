//! HTTP handlers. Each page request re-runs the full render against the cached table.

use super::error::AppError;
use super::state::AppState;
use crate::dashboard::app::Dashboard;
use crate::error::DashboardError;
use axum::{
    extract::{Query, State},
    response::Html,
};
use log::debug;
use serde::Deserialize;

/// Query string of the dashboard page; `station` is the dropdown's value.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    pub station: Option<String>,
}

/// GET /
///
/// Renders the page for the requested station, or the first station when none is given.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<StationQuery>,
) -> Result<Html<String>, AppError> {
    debug!("Dashboard request for station {:?}", query.station);

    // Loading and rendering are CPU bound.
    let html = tokio::task::spawn_blocking(move || -> Result<String, DashboardError> {
        let mut dashboard = Dashboard::new(state.cache.get()?, state.title);
        let page = match query.station.as_deref() {
            Some(station) => dashboard.on_station_change(station)?,
            None => dashboard.render(),
        };
        Ok(page.to_html())
    })
    .await??;

    Ok(Html(html))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
