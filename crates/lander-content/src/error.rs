//! Error types for content access.

/// Error from Content Delivery API operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} {} - {message}", code.as_deref().unwrap_or("Unknown"))]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Contentful error identifier from `sys.id` (e.g. `NotFound`).
        code: Option<String>,
        /// Error message, or the raw body when it is not a Contentful error.
        message: String,
    },

    /// No entry matched the requested id.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Entry is missing a field its renderer requires.
    #[error("Malformed entry {id}: {message}")]
    MalformedEntry {
        /// Entry ID.
        id: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ContentError {
    /// Build an error from a non-success response body.
    ///
    /// Contentful error bodies look like
    /// `{"sys": {"type": "Error", "id": "NotFound"}, "message": "..."}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorSys {
            id: String,
        }
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            sys: ErrorSys,
            #[serde(default)]
            message: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::HttpResponse {
                status,
                code: Some(parsed.sys.id),
                message: parsed.message.unwrap_or_default(),
            },
            Err(_) => Self::HttpResponse {
                status,
                code: None,
                message: body.to_owned(),
            },
        }
    }

    /// HTTP status of a failed response, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error means the entry does not exist (or is not published).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::HttpResponse { status, .. } => *status == 404,
            _ => false,
        }
    }
}
