//! Turn on localization for translatable fields.

use tracing::info;

use crate::api::ManagementApi;
use crate::error::ProvisionError;
use crate::report::{Outcome, Report};
use crate::retry::RetryPolicy;

use super::apply::update_and_publish;
use super::mark_localized;

/// Mark the localizable fields of every content type in the environment
/// and republish the types that changed.
pub fn localize_schema(
    api: &dyn ManagementApi,
    retry: RetryPolicy,
) -> Result<Report, ProvisionError> {
    let mut report = Report::default();

    for mut content_type in api.content_types()? {
        let id = content_type.id().to_owned();
        let name = content_type.name.clone();

        let outcome = if mark_localized(&mut content_type) {
            match update_and_publish(api, &content_type, retry) {
                Ok(()) => {
                    info!(content_type = %id, "Enabled localization");
                    Outcome::Updated
                }
                Err(err) => Outcome::Failed(err.to_string()),
            }
        } else {
            Outcome::Unchanged
        };
        report.push(&id, &id, &name, outcome);
    }

    Ok(report)
}
