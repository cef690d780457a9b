use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use groundsearch_types::{ErrorBody, SearchError};

/// Error response with a `{"message"}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    /// `fallback` replaces an empty upstream failure message.
    pub fn from_search(err: &SearchError, fallback: &str) -> Self {
        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.is_client_error() {
            tracing::warn!("[API] {}", err);
        } else {
            tracing::error!("[API] {}", err);
        }

        Self { status, message: err.client_message(fallback) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}
