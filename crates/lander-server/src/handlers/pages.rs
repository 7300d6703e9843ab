//! Landing page endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / by redirecting to the default locale.
pub(crate) async fn get_root(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&format!("/{}/", state.default_locale))
}

/// Handle GET /{locale} and GET /{locale}/.
pub(crate) async fn get_page(
    Path(locale): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    if !state.renderer.has_locale(&locale) {
        return Err(ServerError::UnknownLocale(locale));
    }

    let renderer = state.renderer.clone();
    let html = tokio::task::spawn_blocking(move || renderer.render(&locale)).await??;
    Ok(Html(html))
}
