use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "salesboard-dashboard-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fetches and parses the sheet once, reporting each step.
pub async fn detailed_health_check(State(state): State<AppState>) -> Json<Value> {
    let mut health_status = json!({
        "status": "ok",
        "service": "salesboard-dashboard-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let (sheet_status, layout_status) = match state.source.fetch().await {
        Ok(grid) => {
            let sheet = json!({
                "status": "healthy",
                "source": state.source.describe(),
                "rows": grid.len()
            });
            let layout = match state.parser.parse(&grid, None) {
                Ok(report) => json!({
                    "status": "healthy",
                    "available_months": report.available_months,
                    "latest_month": report.selected_month
                }),
                Err(e) => json!({"status": "unhealthy", "message": e.to_string()}),
            };
            (sheet, layout)
        }
        Err(e) => (
            json!({
                "status": "unhealthy",
                "source": state.source.describe(),
                "message": e.to_string()
            }),
            json!({"status": "skipped"}),
        ),
    };
    health_status["checks"]["sheet"] = sheet_status;
    health_status["checks"]["layout"] = layout_status;

    let all_healthy = health_status["checks"]
        .as_object()
        .map_or(false, |checks| checks.values().all(|check| check["status"] == "healthy"));

    if !all_healthy {
        health_status["status"] = json!("degraded");
    }

    Json(health_status)
}
