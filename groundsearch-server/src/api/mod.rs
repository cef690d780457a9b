//! API Routes
//!
//! `GET /api/search` starts a session, `POST /api/follow-up` continues one.

mod error;
mod search;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use groundsearch_types::ErrorBody;

use crate::state::AppState;

pub use error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/follow-up", post(search::follow_up))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody { message: "Not found".to_string() }))
}
