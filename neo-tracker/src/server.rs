use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use neo_common::AsteroidGroups;

use crate::config::TrackerConfig;
use crate::module::neo::DateRange;
use crate::service::AsteroidService;

/// Optional feed window for `/api/asteroids`
#[derive(Debug, Default, Deserialize)]
pub struct FeedWindow {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /api/asteroids - always 200; upstream trouble only shrinks the result
async fn get_asteroids(
    State(service): State<AsteroidService>,
    window: Result<Query<FeedWindow>, QueryRejection>,
) -> Json<AsteroidGroups> {
    let window = match window {
        Ok(Query(window)) => window,
        Err(e) => {
            debug!("Ignoring unreadable query string: {}", e);
            FeedWindow::default()
        }
    };

    let range = DateRange::from_today(window.start_date, window.end_date);
    Json(service.asteroid_groups(&range).await)
}

/// Build the application routes. `index_page` must already exist on disk.
pub fn build_router(service: AsteroidService, index_page: PathBuf) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_page))
        .route("/api/asteroids", get(get_asteroids))
        .route("/health", get(health_check))
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: &TrackerConfig, router: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = config
        .server_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address {}: {}", config.server_address(), e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Asteroid tracker listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
