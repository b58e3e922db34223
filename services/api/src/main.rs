mod checklist;
mod error;
mod gastos;
mod metas;

use std::net::SocketAddr;
use std::path::Path;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use financeiro_config::{init_tracing, AppConfig};
use financeiro_db::checklist::sqlite_repository::SqliteChecklistRepository;
use financeiro_db::gastos::sqlite_repository::SqliteGastoRepository;
use financeiro_db::metas::sqlite_repository::SqliteMetaRepository;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

#[derive(Clone)]
pub struct AppState {
    pub checklist_repo: SqliteChecklistRepository,
    pub gasto_repo: SqliteGastoRepository,
    pub meta_repo: SqliteMetaRepository,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Checklist Financeiro API funcionando!"
    }))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:5173".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:5173".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(checklist::router())
        .merge(gastos::router())
        .merge(metas::router())
        .layer(cors)
        .with_state(state)
}

/// Serve the built web client, with an index.html fallback so SPA routes
/// resolve on hard refresh.
fn with_static_assets(router: Router, dir: &Path) -> Router {
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).not_found_service(index))
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "financeiro-api", "starting");

    let pool = financeiro_db::create_pool(&config.database_url)
        .await
        .expect("failed to create database pool");
    financeiro_db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        checklist_repo: SqliteChecklistRepository::new(pool.clone()),
        gasto_repo: SqliteGastoRepository::new(pool.clone()),
        meta_repo: SqliteMetaRepository::new(pool),
    };

    let mut app = build_router(state);
    if let Some(dir) = &config.static_dir {
        app = with_static_assets(app, dir);
    }

    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
