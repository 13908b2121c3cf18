//! SSR host for the user directory front end.
//!
//! Renders the Leptos app on the server and serves the hydration bundle. The
//! user API itself runs elsewhere; see `USERDIR_API_URL` in the client crate.

mod config;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let app = routes::app(&host, conf.leptos_options);

    let addr = host.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "userdir listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
