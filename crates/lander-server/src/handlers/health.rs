//! Liveness endpoint.

/// Handle GET /healthz.
pub(crate) async fn get_health() -> &'static str {
    "ok"
}
