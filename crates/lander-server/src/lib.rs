//! HTTP server for Lander.
//!
//! Serves the landing page for every configured locale:
//! - `GET /` redirects to the default locale
//! - `GET /{locale}/` renders the page from Contentful
//! - `GET /healthz` for liveness probes
//!
//! Rendering does blocking HTTP calls to the Delivery API, so it runs on
//! tokio's blocking pool and fans out over rayon inside.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lander_content::{ContentClient, ContentResolver};
//! use lander_sections::PageRenderer;
//! use lander_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = lander_config::Config::load(None, None)?;
//!     let client = ContentClient::new(&config.require_delivery()?);
//!     let resolver = ContentResolver::new(Arc::new(client));
//!     let renderer = PageRenderer::new(resolver, &config.site, &config.render);
//!     run_server(server_config_from_config(&config), renderer).await
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use lander_sections::PageRenderer;

pub use error::ServerError;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Locale `/` redirects to.
    pub default_locale: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            default_locale: "en".to_owned(),
        }
    }
}

/// Create server configuration from Lander config.
#[must_use]
pub fn server_config_from_config(config: &lander_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        default_locale: config.site.default_locale.clone(),
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn run_server(
    config: ServerConfig,
    renderer: PageRenderer,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        renderer,
        default_locale: config.default_locale.clone(),
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
