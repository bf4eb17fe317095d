//! Dashboard Handler
//!
//! Reads the sheet and serves the parsed monthly report.

use axum::{
    extract::{Query, State},
    response::Json,
};
use salesboard_models::DashboardReport;
use salesboard_utils::{log_error, log_warn, validate_month_key};
use serde::Deserialize;
use std::time::Instant;

use crate::{error::ApiError, metrics::RequestOutcome, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Target month as "YYYY/MM"; the latest month when omitted.
    pub month: Option<String>,
}

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardReport>, ApiError> {
    let month = query
        .month
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    if let Some(requested) = month {
        if validate_month_key(requested).is_err() {
            log_warn!("Malformed month '{}' requested, the latest month will be used", requested);
        }
    }

    let started = Instant::now();
    let fetched = state.source.fetch().await;
    state.metrics.observe_fetch(started.elapsed().as_secs_f64());

    let grid = fetched.map_err(|e| {
        log_error!(e, "Failed to fetch dashboard sheet");
        state.metrics.record_request(RequestOutcome::FetchError);
        ApiError(e)
    })?;

    let report = state.parser.parse(&grid, month).map_err(|e| {
        log_error!(e, "Failed to parse dashboard sheet");
        state.metrics.record_request(RequestOutcome::ParseError);
        ApiError(e)
    })?;

    state.metrics.record_request(RequestOutcome::Ok);
    tracing::info!(
        selected_month = %report.selected_month,
        months = report.available_months.len(),
        "Served dashboard report"
    );

    Ok(Json(report))
}
