//! Backend entry-point: loads settings, wires storage and serves the events API.

mod server;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::inbound::http::health::HealthState;
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server, drain};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match actix_web::rt::signal::ctrl_c().await {
            Ok(()) => drain(health_state, handle).await,
            Err(e) => warn!(error = %e, "shutdown signal listener failed"),
        }
    });
    server.await
}
