//! Create, update and publish content types.

use std::collections::HashSet;

use tracing::{info, warn};

use lander_content::ContentError;

use crate::api::ManagementApi;
use crate::error::ProvisionError;
use crate::report::{Outcome, Report};
use crate::retry::RetryPolicy;
use crate::types::{ContentType, EntryFilter, PublishState};

/// Message Contentful returns when a field change conflicts with published entries.
const PUBLISHED_FIELDS_INVALID: &str = "Previously published fields are invalid";

/// Bring the environment's content types in line with `definitions`.
///
/// Missing types are created, existing ones updated; each is published
/// afterwards. A failure on one type is recorded and the run moves on to
/// the next. Only failing to list the existing types aborts the run.
pub fn apply_schema(
    api: &dyn ManagementApi,
    definitions: &[ContentType],
    retry: RetryPolicy,
) -> Result<Report, ProvisionError> {
    let existing: HashSet<String> = api
        .content_types()?
        .into_iter()
        .map(|t| t.sys.id)
        .collect();

    let mut report = Report::default();
    for definition in definitions {
        let id = definition.id();
        let result = if existing.contains(id) {
            update_and_publish(api, definition, retry).map(|()| Outcome::Updated)
        } else {
            create_and_publish(api, definition, retry).map(|()| Outcome::Created)
        };

        let outcome = result.unwrap_or_else(|err| {
            warn!(content_type = id, error = %err, "Failed to apply content type");
            Outcome::Failed(err.to_string())
        });
        report.push(id, id, &definition.name, outcome);
    }
    Ok(report)
}

fn create_and_publish(
    api: &dyn ManagementApi,
    definition: &ContentType,
    retry: RetryPolicy,
) -> Result<(), ProvisionError> {
    let saved = api.put_content_type(definition, None)?;
    info!(content_type = definition.id(), "Created content type");
    publish(api, definition.id(), saved.version(), retry)
}

/// Update an existing content type from `definition` and publish it.
///
/// When published entries make the change invalid, the entries of that
/// type are unpublished and the update is tried once more.
pub(super) fn update_and_publish(
    api: &dyn ManagementApi,
    definition: &ContentType,
    retry: RetryPolicy,
) -> Result<(), ProvisionError> {
    let id = definition.id();
    let current = api.content_type(id)?;

    let saved = match api.put_content_type(definition, Some(current.version())) {
        Ok(saved) => saved,
        Err(err) if blocked_by_published_entries(&err) => {
            warn!(
                content_type = id,
                "Published entries block the update, unpublishing them"
            );
            let failed = unpublish_all(api, id, retry)?;
            if failed > 0 {
                return Err(ProvisionError::PublishedEntries {
                    content_type: id.to_owned(),
                    failed,
                });
            }
            let current = api.content_type(id)?;
            api.put_content_type(definition, Some(current.version()))?
        }
        Err(err) => return Err(err.into()),
    };
    info!(content_type = id, "Updated content type");

    publish(api, id, saved.version(), retry)
}

fn blocked_by_published_entries(err: &ContentError) -> bool {
    matches!(
        err,
        ContentError::HttpResponse { status: 400, message, .. }
            if message.contains(PUBLISHED_FIELDS_INVALID)
    )
}

/// Publish `version` of a content type, refetching the version after conflicts.
fn publish(
    api: &dyn ManagementApi,
    id: &str,
    version: u64,
    retry: RetryPolicy,
) -> Result<(), ProvisionError> {
    let mut version = version;
    retry.run(id, |attempt| {
        if attempt > 1 {
            version = api.content_type(id)?.version();
        }
        api.publish_content_type(id, version)
    })?;
    info!(content_type = id, "Published content type");
    Ok(())
}

/// Unpublish every published entry of `content_type`.
///
/// Returns the number of entries that stayed published.
fn unpublish_all(
    api: &dyn ManagementApi,
    content_type: &str,
    retry: RetryPolicy,
) -> Result<usize, ProvisionError> {
    let entries = api.entries(
        &EntryFilter::default()
            .content_type(content_type)
            .state(PublishState::Published),
    )?;
    info!(content_type, count = entries.len(), "Unpublishing entries");

    let mut failed = 0;
    for entry in &entries {
        let id = entry.id();
        let result = retry.run(id, |attempt| {
            let version = if attempt == 1 {
                entry.version()
            } else {
                api.entry(id)?.version()
            };
            api.unpublish_entry(id, version)
        });
        if let Err(err) = result {
            warn!(content_type, id, error = %err, "Failed to unpublish entry");
            failed += 1;
        }
    }
    Ok(failed)
}
