pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, put};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/metas",
            get(handlers::list_metas).post(handlers::create_meta),
        )
        .route(
            "/api/metas/{id}/progresso",
            put(handlers::update_progresso),
        )
}
