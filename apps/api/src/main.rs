mod assessment;
mod career_plan;
mod catalog;
mod config;
mod cv;
mod dashboard;
mod errors;
mod interview;
mod leaderboard;
mod models;
mod planner;
mod recommendations;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::cv::{CvAnalyzer, HttpCvAnalyzer, LocalCvAnalyzer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryStore, ProfileStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(Catalog::builtin());
    info!(
        "Catalog loaded: {} courses, {} job profiles",
        catalog.courses.len(),
        catalog.jobs.len()
    );

    // CV analyzer: external service when configured, built-in patterns otherwise
    let analyzer: Arc<dyn CvAnalyzer> = match &config.cv_analyzer_url {
        Some(url) => {
            let client = HttpCvAnalyzer::new(url, config.cv_analyzer_timeout_secs)?;
            info!("CV analyzer: {}", client.endpoint());
            Arc::new(client)
        }
        None => {
            info!("CV analyzer: built-in (CV_ANALYZER_URL not set)");
            Arc::new(LocalCvAnalyzer::new(catalog.courses.clone())?)
        }
    };

    // Profile store: Redis when configured, process memory otherwise
    let store: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url).await?),
        None => {
            info!("Profile store: in-memory (REDIS_URL not set, data is lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        analyzer,
        store,
        catalog,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
