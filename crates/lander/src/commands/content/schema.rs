//! `lander content schema` commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use lander_provision::RetryPolicy;
use lander_provision::schema::{apply_schema, definitions, export_content_types, localize_schema};

use super::{ManagementArgs, finish};
use crate::error::CliError;
use crate::output::Output;

/// Content type commands.
#[derive(Subcommand)]
pub(crate) enum SchemaCommand {
    /// Create or update all landing page content types and publish them.
    Apply(ManagementArgs),
    /// Mark localizable fields as localized and republish.
    Localize(ManagementArgs),
    /// Write the environment's content types to a JSON file.
    Export(ExportArgs),
}

/// Arguments for the schema export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output file.
    file: PathBuf,

    #[command(flatten)]
    management: ManagementArgs,
}

impl SchemaCommand {
    /// Execute the schema command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        match self {
            Self::Apply(args) => {
                let client = args.client(&output)?;
                let definitions = definitions();
                output.info(&format!("Applying {} content types...", definitions.len()));
                let report = apply_schema(&client, &definitions, RetryPolicy::default())?;
                finish(&output, "Schema", &report)
            }
            Self::Localize(args) => {
                let client = args.client(&output)?;
                output.info("Marking localizable fields...");
                let report = localize_schema(&client, RetryPolicy::default())?;
                finish(&output, "Localization", &report)
            }
            Self::Export(args) => {
                let client = args.management.client(&output)?;
                let content_types = export_content_types(&client, &args.file)?;
                output.success(&format!(
                    "Exported {} content types to {}",
                    content_types.len(),
                    args.file.display()
                ));
                Ok(())
            }
        }
    }
}
