//! Bulk publish and unpublish.

use tracing::{info, warn};

use crate::api::ManagementApi;
use crate::error::ProvisionError;
use crate::report::{Outcome, Report};
use crate::retry::RetryPolicy;
use crate::types::{EntryFilter, ManagedEntry, PublishState};

/// Which entries a bulk operation touches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every eligible entry in the environment.
    #[default]
    All,
    /// Eligible entries of one content type.
    ContentType(String),
    /// These entries, whatever their state.
    Ids(Vec<String>),
}

impl Selection {
    fn load(
        &self,
        api: &dyn ManagementApi,
        state: PublishState,
    ) -> Result<Vec<ManagedEntry>, ProvisionError> {
        match self {
            Self::All => Ok(api.entries(&EntryFilter::default().state(state))?),
            Self::ContentType(content_type) => Ok(api.entries(
                &EntryFilter::default()
                    .content_type(content_type.as_str())
                    .state(state),
            )?),
            Self::Ids(ids) => ids
                .iter()
                .map(|id| api.entry(id).map_err(ProvisionError::from))
                .collect(),
        }
    }
}

/// Publish selected entries.
///
/// Without explicit IDs only drafts are selected. Failures are recorded per
/// entry and do not stop the run.
pub fn publish_entries(
    api: &dyn ManagementApi,
    selection: &Selection,
    retry: RetryPolicy,
) -> Result<Report, ProvisionError> {
    let entries = selection.load(api, PublishState::Draft)?;
    info!(count = entries.len(), "Publishing entries");

    let mut report = Report::default();
    for entry in sorted_by_type(entries) {
        let outcome = match with_fresh_version(api, &entry, retry, |id, version| {
            api.publish_entry(id, version)
        }) {
            Ok(()) => Outcome::Published,
            Err(err) => {
                warn!(id = entry.id(), error = %err, "Failed to publish entry");
                Outcome::Failed(err.to_string())
            }
        };
        report.push(entry.content_type_id(), entry.id(), entry.label(), outcome);
    }
    Ok(report)
}

/// Turn selected published entries back into drafts.
///
/// Entries selected by ID that are not published are skipped.
pub fn unpublish_entries(
    api: &dyn ManagementApi,
    selection: &Selection,
    retry: RetryPolicy,
) -> Result<Report, ProvisionError> {
    let entries = selection.load(api, PublishState::Published)?;
    info!(count = entries.len(), "Unpublishing entries");

    let mut report = Report::default();
    for entry in sorted_by_type(entries) {
        let outcome = if entry.is_published() {
            match with_fresh_version(api, &entry, retry, |id, version| {
                api.unpublish_entry(id, version)
            }) {
                Ok(()) => Outcome::Unpublished,
                Err(err) => {
                    warn!(id = entry.id(), error = %err, "Failed to unpublish entry");
                    Outcome::Failed(err.to_string())
                }
            }
        } else {
            Outcome::Skipped("not published".to_owned())
        };
        report.push(entry.content_type_id(), entry.id(), entry.label(), outcome);
    }
    Ok(report)
}

/// Group entries by content type, keeping listing order inside a group.
fn sorted_by_type(mut entries: Vec<ManagedEntry>) -> Vec<ManagedEntry> {
    entries.sort_by(|a, b| a.content_type_id().cmp(b.content_type_id()));
    entries
}

/// Run a versioned write, refetching the entry version after conflicts.
fn with_fresh_version(
    api: &dyn ManagementApi,
    entry: &ManagedEntry,
    retry: RetryPolicy,
    write: impl Fn(&str, u64) -> Result<ManagedEntry, lander_content::ContentError>,
) -> Result<(), ProvisionError> {
    let id = entry.id();
    let mut version = entry.version();
    retry.run(id, |attempt| {
        if attempt > 1 {
            version = api.entry(id)?.version();
        }
        write(id, version)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::fake::{FakeManagement, localized};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const NO_DELAY: RetryPolicy = RetryPolicy {
        attempts: 3,
        delay: Duration::ZERO,
    };

    fn fixture() -> (FakeManagement, Vec<String>) {
        let api = FakeManagement::new();
        let ids = vec![
            api.add_entry("section", json!({}), false),
            api.add_entry("button", json!({ "text": localized("Go") }), false),
            api.add_entry("button", json!({ "text": localized("Stop") }), true),
            api.add_entry("landingPage", json!({ "title": localized("Home") }), false),
        ];
        (api, ids)
    }

    #[test]
    fn test_publish_all_drafts_grouped_by_type() {
        let (api, ids) = fixture();

        let report = publish_entries(&api, &Selection::All, NO_DELAY).unwrap();

        let order: Vec<(&str, &str)> = report
            .items
            .iter()
            .map(|i| (i.group.as_str(), i.label.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("button", "Go"), ("landingPage", "Home"), ("section", "Untitled")]
        );
        assert_eq!(report.count(&Outcome::Published), 3);
        assert!(!api.calls().contains(&format!("publish_entry {}", ids[2])));
    }

    #[test]
    fn test_publish_by_type() {
        let (api, ids) = fixture();

        let report = publish_entries(
            &api,
            &Selection::ContentType("button".to_owned()),
            NO_DELAY,
        )
        .unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].id, ids[1]);
    }

    #[test]
    fn test_publish_failures_are_counted() {
        let (api, ids) = fixture();
        let api = api.fail(&ids[0]);

        let report = publish_entries(&api, &Selection::All, NO_DELAY).unwrap();

        assert_eq!(report.failures(), 1);
        assert_eq!(report.count(&Outcome::Published), 2);
    }

    #[test]
    fn test_publish_retries_conflicts_with_fresh_version() {
        let (api, ids) = fixture();
        let api = api.conflict_on_publish(&ids[1], 1);

        let report = publish_entries(&api, &Selection::Ids(vec![ids[1].clone()]), NO_DELAY).unwrap();

        assert_eq!(report.items[0].outcome, Outcome::Published);
        assert_eq!(
            api.calls(),
            vec![format!("publish_entry {}", ids[1]), format!("publish_entry {}", ids[1])]
        );
    }

    #[test]
    fn test_unpublish_all_published() {
        let (api, ids) = fixture();

        let report = unpublish_entries(&api, &Selection::All, NO_DELAY).unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].id, ids[2]);
        assert_eq!(report.items[0].outcome, Outcome::Unpublished);
        assert!(api.stored_entries().iter().all(|e| !e.is_published()));
    }

    #[test]
    fn test_unpublish_by_id_skips_drafts() {
        let (api, ids) = fixture();

        let report = unpublish_entries(
            &api,
            &Selection::Ids(vec![ids[0].clone(), ids[2].clone()]),
            NO_DELAY,
        )
        .unwrap();

        assert_eq!(report.items[0].outcome, Outcome::Unpublished);
        assert_eq!(
            report.items[1].outcome,
            Outcome::Skipped("not published".to_owned())
        );
    }

    #[test]
    fn test_unknown_id_is_fatal() {
        let (api, _) = fixture();

        let err = unpublish_entries(&api, &Selection::Ids(vec!["missing".to_owned()]), NO_DELAY)
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }
}
