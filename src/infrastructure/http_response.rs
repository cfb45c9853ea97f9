// HTTP response mapping for boundary errors
use crate::application::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::EmptyWidgetName | DashboardError::EmptyWidgetText => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DashboardError::UnknownLibraryTab(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!("Rejecting request: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
