//! CLI command implementations.

pub(crate) mod content;
pub(crate) mod serve;

pub(crate) use content::ContentCommand;
pub(crate) use serve::ServeArgs;
