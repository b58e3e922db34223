pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gastos", post(handlers::create_gasto))
        .route("/api/gastos/semana/{semana}", get(handlers::list_by_semana))
        .route(
            "/api/gastos/categoria/{categoria}",
            get(handlers::list_by_categoria),
        )
}
