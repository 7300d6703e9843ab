//! Error types for provisioning.

use lander_content::ContentError;

/// Error from provisioning operations.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Management API call failed.
    #[error("Contentful API error: {0}")]
    Content(#[from] ContentError),

    /// Version conflicts did not go away after retrying.
    #[error("Version conflict on {id} after {attempts} attempts")]
    Conflict {
        /// Content type or entry ID.
        id: String,
        /// Number of attempts made.
        attempts: u32,
    },

    /// Published entries block a content type update and could not be unpublished.
    #[error("{failed} published {content_type} entries could not be unpublished")]
    PublishedEntries {
        /// Content type ID.
        content_type: String,
        /// Number of entries that stayed published.
        failed: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProvisionError {
    /// HTTP status of the underlying API failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Content(err) => err.status(),
            _ => None,
        }
    }
}
