//! `lander serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use lander_config::{CliSettings, Config};
use lander_content::{ContentClient, ContentResolver};
use lander_sections::PageRenderer;
use lander_server::{run_server, server_config_from_config};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover lander.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Contentful space ID (overrides config).
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    space_id: Option<String>,

    /// Contentful environment (overrides config).
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT")]
    environment: Option<String>,

    /// Content Delivery API token (overrides config).
    #[arg(long, env = "CONTENTFUL_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            space_id: self.space_id,
            environment: self.environment,
            access_token: self.access_token,
            management_token: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let delivery = config.require_delivery()?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Contentful space: {} ({})",
            delivery.space_id, delivery.environment
        ));
        let locales: Vec<&str> = config.site.locales.keys().map(String::as_str).collect();
        output.info(&format!(
            "Locales: {} (default: {})",
            locales.join(", "),
            config.site.default_locale
        ));

        info!(
            space = %delivery.space_id,
            environment = %delivery.environment,
            home_slug = %config.site.home_slug,
            section_errors = ?config.render.section_errors,
            "Landing page renderer configured"
        );

        let resolver = ContentResolver::new(Arc::new(ContentClient::new(&delivery)));
        let renderer = PageRenderer::new(resolver, &config.site, &config.render);

        run_server(server_config_from_config(&config), renderer)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
