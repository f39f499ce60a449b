mod catalog;
mod config;
mod errors;
mod guidance;
mod llm_client;
mod models;
mod roadmap;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HerPath Mentor API v{}", env!("CARGO_PKG_VERSION"));

    // Catalogs are read once; a missing file just means an empty list
    let catalogs = Catalogs::load(&config.programs_path, &config.colleges_path)?;

    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        config.groq_model.clone(),
        config.groq_api_url.clone(),
    )?;
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        warn!("GROQ_API_KEY not set; chat replies will carry a configuration notice");
    }

    let state = AppState {
        llm: Arc::new(llm),
        catalogs: Arc::new(catalogs),
        sessions: SessionStore::with_idle_timeout(chrono::Duration::minutes(
            config.session_idle_minutes,
        )),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
