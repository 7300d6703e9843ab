//! Version-conflict retries.

use std::thread;
use std::time::Duration;

use tracing::warn;

use lander_content::ContentError;

use crate::error::ProvisionError;

/// How to retry writes rejected with `409 Conflict`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds, fails with something other than a
    /// conflict, or attempts run out.
    ///
    /// `op` receives the 1-based attempt number so it can refetch the
    /// current version on retries.
    pub fn run<T>(
        &self,
        id: &str,
        mut op: impl FnMut(u32) -> Result<T, ContentError>,
    ) -> Result<T, ProvisionError> {
        let attempts = self.attempts.max(1);
        for attempt in 1..=attempts {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(err) if err.status() == Some(409) => {
                    if attempt < attempts {
                        warn!(id, attempt, "Version conflict, retrying");
                        thread::sleep(self.delay);
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(ProvisionError::Conflict {
            id: id.to_owned(),
            attempts,
        })
    }
}
