//! `lander content` commands.
//!
//! Every command talks to the Content Management API and prints a grouped
//! summary. Any failed item makes the command exit non-zero.

mod bulk;
mod schema;
mod seed;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use lander_config::{CliSettings, Config};
use lander_provision::{ManagementClient, Report};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use bulk::{DraftArgs, PublishArgs};
pub(crate) use schema::SchemaCommand;
pub(crate) use seed::SeedArgs;

/// Contentful provisioning commands.
#[derive(Subcommand)]
pub(crate) enum ContentCommand {
    /// Manage content type definitions.
    #[command(subcommand)]
    Schema(SchemaCommand),
    /// Create the example landing page.
    Seed(SeedArgs),
    /// Publish draft entries.
    Publish(PublishArgs),
    /// Turn published entries back into drafts.
    Draft(DraftArgs),
}

impl ContentCommand {
    /// Execute the content command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Schema(cmd) => cmd.execute(),
            Self::Seed(args) => args.execute(),
            Self::Publish(args) => args.execute(),
            Self::Draft(args) => args.execute(),
        }
    }
}

/// Connection options shared by all content commands.
#[derive(Args)]
pub(crate) struct ManagementArgs {
    /// Path to configuration file (default: auto-discover lander.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Contentful space ID (overrides config).
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    space_id: Option<String>,

    /// Contentful environment (overrides config).
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT")]
    environment: Option<String>,

    /// Content Management API token (overrides config).
    #[arg(long, env = "CONTENTFUL_MANAGEMENT_TOKEN", hide_env_values = true)]
    management_token: Option<String>,
}

impl ManagementArgs {
    /// Load config and build a Management API client.
    fn client(&self, output: &Output) -> Result<ManagementClient, CliError> {
        let cli_settings = CliSettings {
            space_id: self.space_id.clone(),
            environment: self.environment.clone(),
            management_token: self.management_token.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let management = config.require_management()?;
        debug!(
            host = %management.host,
            space = %management.space_id,
            environment = %management.environment,
            "Using Content Management API"
        );
        output.info(&format!(
            "Contentful space: {} ({})",
            management.space_id, management.environment
        ));
        Ok(ManagementClient::new(&management))
    }
}

/// Print a report, then fail if any item failed.
fn finish(output: &Output, title: &str, report: &Report) -> Result<(), CliError> {
    output.report(title, report);
    let failed = report.failures();
    if failed > 0 {
        return Err(CliError::Failures {
            failed,
            total: report.items.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_provision::{ItemReport, Outcome};

    fn item(group: &str, outcome: Outcome) -> ItemReport {
        ItemReport {
            group: group.to_owned(),
            id: "id".to_owned(),
            label: "label".to_owned(),
            outcome,
        }
    }

    #[test]
    fn test_finish_fails_on_failures() {
        let output = Output::new();
        let report = Report {
            items: vec![
                item("button", Outcome::Published),
                item("button", Outcome::Failed("HTTP 500".to_owned())),
            ],
        };
        let err = finish(&output, "Publish", &report).unwrap_err();
        assert!(matches!(err, CliError::Failures { failed: 1, total: 2 }));

        let ok = Report {
            items: vec![item("button", Outcome::Published)],
        };
        assert!(finish(&output, "Publish", &ok).is_ok());
    }
}
