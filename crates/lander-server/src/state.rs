//! Application state.

use lander_sections::PageRenderer;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Landing page renderer.
    pub(crate) renderer: PageRenderer,
    /// Locale `/` redirects to.
    pub(crate) default_locale: String,
}
