use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/report", get(handlers::get_report))
        .route("/api/campaigns", get(handlers::get_campaigns))
        .route("/api/chart/:metric", get(handlers::get_chart))
        .with_state(state)
}
