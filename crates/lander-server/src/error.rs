//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lander_sections::RenderError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Route prefix is not a configured locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Page rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UnknownLocale(locale) | Self::Render(RenderError::UnknownLocale(locale)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Unknown locale", "locale": locale}),
            ),
            Self::Render(RenderError::Section {
                section_id,
                section_type,
                source,
            }) => {
                tracing::error!(section_id, section_type, error = %source, "Content backend failure");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Content backend failure",
                        "section": section_id,
                        "cause": source.to_string(),
                    }),
                )
            }
            Self::Task(e) => {
                tracing::error!(error = %e, "Render task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
