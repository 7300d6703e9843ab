//! Entry operations.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use lander_content::ContentError;

use super::ManagementClient;
use crate::types::{EntryFilter, ManagedEntry};

#[derive(Serialize)]
struct EntryBody<'a> {
    fields: &'a Map<String, Value>,
}

impl ManagementClient {
    pub(crate) fn list_entries(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<ManagedEntry>, ContentError> {
        debug!(
            content_type = filter.content_type.as_deref(),
            state = ?filter.state,
            "Listing entries"
        );
        self.list("entries", &filter.to_params(), filter.limit)
    }

    pub(crate) fn get_entry(&self, id: &str) -> Result<ManagedEntry, ContentError> {
        self.get(&format!("entries/{id}"), &[])
    }

    pub(crate) fn post_entry(
        &self,
        content_type: &str,
        fields: &Map<String, Value>,
    ) -> Result<ManagedEntry, ContentError> {
        let entry: ManagedEntry = self.post(
            "entries",
            &[("X-Contentful-Content-Type", content_type)],
            &EntryBody { fields },
        )?;
        info!(content_type, id = entry.id(), "Created entry");
        Ok(entry)
    }

    pub(crate) fn put_published(
        &self,
        id: &str,
        version: u64,
    ) -> Result<ManagedEntry, ContentError> {
        self.put::<(), _>(&format!("entries/{id}/published"), Some(version), None)
    }

    pub(crate) fn delete_published(
        &self,
        id: &str,
        version: u64,
    ) -> Result<ManagedEntry, ContentError> {
        self.delete(&format!("entries/{id}/published"), version)
    }
}
