//! `lander content seed` command implementation.

use clap::Args;
use lander_provision::{RetryPolicy, SeedOptions, SeedOutcome, seed};

use super::{ManagementArgs, finish};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the seed command.
#[derive(Args)]
pub(crate) struct SeedArgs {
    /// Slug of the landing page to create.
    #[arg(long, default_value = "home")]
    slug: String,

    /// Create the page even if one with the slug already exists.
    #[arg(long)]
    force: bool,

    /// Publish every created entry.
    #[arg(long)]
    publish: bool,

    #[command(flatten)]
    management: ManagementArgs,
}

impl SeedArgs {
    /// Execute the seed command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.management.client(&output)?;

        let options = SeedOptions {
            slug: self.slug,
            force: self.force,
            publish: self.publish,
        };
        output.info(&format!("Seeding landing page '{}'...", options.slug));

        match seed(&client, &options, RetryPolicy::default())? {
            SeedOutcome::Skipped { existing_id } => {
                output.warning(&format!(
                    "Landing page '{}' already exists ({existing_id}), skipping",
                    options.slug
                ));
                output.info("Use --force to create another one.");
                Ok(())
            }
            SeedOutcome::Created {
                landing_page_id,
                report,
            } => {
                finish(&output, "Seed", &report)?;
                output.success(&format!("Created landing page {landing_page_id}"));
                Ok(())
            }
        }
    }
}
