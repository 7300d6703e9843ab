//! `lander content publish` and `lander content draft` commands.

use clap::Args;
use lander_provision::{RetryPolicy, Selection, publish_entries, unpublish_entries};

use super::{ManagementArgs, finish};
use crate::error::CliError;
use crate::output::Output;

/// Entry selection flags.
#[derive(Args)]
pub(crate) struct SelectionArgs {
    /// Only entries of this content type.
    #[arg(long = "type", value_name = "CONTENT_TYPE", conflicts_with = "ids")]
    content_type: Option<String>,

    /// Only these entry IDs (comma-separated).
    #[arg(long, value_delimiter = ',')]
    ids: Vec<String>,
}

impl SelectionArgs {
    fn selection(self) -> Selection {
        if !self.ids.is_empty() {
            Selection::Ids(self.ids)
        } else if let Some(content_type) = self.content_type {
            Selection::ContentType(content_type)
        } else {
            Selection::All
        }
    }
}

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    #[command(flatten)]
    management: ManagementArgs,
}

impl PublishArgs {
    /// Execute the publish command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.management.client(&output)?;
        let report = publish_entries(
            &client,
            &self.selection.selection(),
            RetryPolicy::default(),
        )?;
        finish(&output, "Publish", &report)
    }
}

/// Arguments for the draft command.
#[derive(Args)]
pub(crate) struct DraftArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    #[command(flatten)]
    management: ManagementArgs,
}

impl DraftArgs {
    /// Execute the draft command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.management.client(&output)?;
        let report = unpublish_entries(
            &client,
            &self.selection.selection(),
            RetryPolicy::default(),
        )?;
        finish(&output, "Draft", &report)
    }
}
