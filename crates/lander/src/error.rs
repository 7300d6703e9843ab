//! CLI error types.

use lander_config::ConfigError;
use lander_provision::ProvisionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Provision(#[from] ProvisionError),

    #[error("{0}")]
    Server(String),

    #[error("{failed} of {total} items failed")]
    Failures { failed: usize, total: usize },
}
