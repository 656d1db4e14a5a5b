//! WikiCloud API Server
//!
//! Fetches the pages of a Wikipedia category, counts the words that are not
//! stopwords, and serves the most frequent ones to a browser word cloud.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod cloud;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MediaWikiClient;
use app::{AnalysisService, StopwordFilter, WordFrequencyAggregator};
use config::Config;
use domain::ports::WikiClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService<dyn WikiClient>>,
    pub config: Config,
}

impl AppState {
    pub fn new(wiki: Arc<dyn WikiClient>, config: Config) -> Self {
        let stopwords =
            StopwordFilter::english().with_stopwords(config.extra_stopwords.as_slice());
        let aggregator = WordFrequencyAggregator::new(stopwords);
        let analysis_service = Arc::new(AnalysisService::new(
            wiki,
            aggregator,
            config.page_delay,
        ));

        Self {
            analysis_service,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes that trigger upstream MediaWiki traffic
fn analyze_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(handlers::analyze))
}

/// Analyze routes behind a per-IP rate limiter.
///
/// Keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
fn rate_limited_analyze_routes(config: &Config) -> anyhow::Result<Router<AppState>> {
    // SmartIpKeyExtractor requires X-Forwarded-For headers from a reverse proxy
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_replenish_secs)
            .burst_size(config.rate_limit_burst)
            .error_handler(error::rate_limit_response)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(analyze_routes().layer(GovernorLayer {
        config: governor_config,
    }))
}

/// Build the full router around a (possibly rate limited) set of analyze routes
fn build_router(state: AppState, analyze_routes: Router<AppState>) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(health))
        .route("/palettes", get(handlers::list_palettes))
        .merge(analyze_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wikicloud_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WikiCloud API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using MediaWiki API at {}", config.wiki_api_url);

    // Create adapters
    let wiki: Arc<dyn WikiClient> = Arc::new(
        MediaWikiClient::new(
            config.wiki_api_url.clone(),
            &config.wiki_user_agent,
            config.wiki_timeout,
            config.continue_delay,
        )
        .context("Failed to build MediaWiki client")?,
    );

    let state = AppState::new(wiki, config.clone());

    // Each /analyze call fans out into one request per category member
    let rate_limited = rate_limited_analyze_routes(&config)?;

    let app = build_router(state, rate_limited);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
