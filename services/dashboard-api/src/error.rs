use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use salesboard_utils::{DashboardError, ErrorResponse};

/// Maps a [`DashboardError`] onto an HTTP response with a JSON `detail` body.
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl From<DashboardError> for ApiError {
    fn from(error: DashboardError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
