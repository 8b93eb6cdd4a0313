use axum::{extract::FromRef, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;

use super::routes::{category_router, questions_router, quiz_router, ApiError};

#[derive(FromRef, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub page_size: i64,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quiz_router(state))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

async fn fallback() -> ApiError {
    ApiError::NotFound("The requested URL was not found on the server".to_owned())
}

pub async fn run_server(settings: Settings, pool: SqlitePool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        pool,
        page_size: settings.page_size,
    };

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Serving on {addr}");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
