use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::cors::cors_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config().server.static_dir.clone();

    let router = Router::<AppState>::new()
        .nest("/api", api::router())
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state);

    // SPA fallback: unmatched non-API paths serve index.html
    let router = match static_dir {
        Some(dir) => {
            let index_path = format!("{}/index.html", dir);
            let spa_service = ServeDir::new(&dir)
                .append_index_html_on_directories(true)
                .fallback(ServeFile::new(&index_path));
            router.fallback_service(spa_service)
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).layer(cors_layer())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}
