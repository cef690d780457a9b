//! Search and follow-up handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
};
use groundsearch_types::{
    FollowUpRequest, FollowUpResponse, SearchParams, SearchResponse, FOLLOW_UP_FAILURE_MESSAGE,
    MISSING_FOLLOW_UP_FIELDS_MESSAGE, MISSING_QUERY_MESSAGE, SEARCH_FAILURE_MESSAGE,
};

use super::ApiError;
use crate::state::AppState;

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Ok(Query(params)) = params else {
        return Err(ApiError::bad_request(MISSING_QUERY_MESSAGE));
    };

    state
        .service()
        .search(params.q.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::from_search(&e, SEARCH_FAILURE_MESSAGE))
}

pub async fn follow_up(
    State(state): State<AppState>,
    payload: Result<Json<FollowUpRequest>, JsonRejection>,
) -> Result<Json<FollowUpResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => {
            return Err(ApiError::bad_request(MISSING_FOLLOW_UP_FIELDS_MESSAGE));
        }
        Err(rejection) => {
            tracing::warn!("[API] Rejected follow-up body: {}", rejection.body_text());
            return Err(ApiError::bad_request(rejection.body_text()));
        }
    };

    state
        .service()
        .follow_up(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_search(&e, FOLLOW_UP_FAILURE_MESSAGE))
}
