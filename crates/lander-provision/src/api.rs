//! Management API abstraction.

use serde_json::{Map, Value};

use lander_content::ContentError;

use crate::types::{ContentType, EntryFilter, ManagedEntry};

/// Operations on one Contentful environment through the management API.
///
/// Mutating calls take the version the caller last saw; the server answers
/// `409 Conflict` when it has moved on.
pub trait ManagementApi: Send + Sync {
    /// List all content types.
    fn content_types(&self) -> Result<Vec<ContentType>, ContentError>;

    /// Fetch one content type.
    fn content_type(&self, id: &str) -> Result<ContentType, ContentError>;

    /// Create (`version` is `None`) or update a content type with the ID of `definition`.
    fn put_content_type(
        &self,
        definition: &ContentType,
        version: Option<u64>,
    ) -> Result<ContentType, ContentError>;

    /// Publish a content type version.
    fn publish_content_type(&self, id: &str, version: u64) -> Result<ContentType, ContentError>;

    /// List entries matching `filter`.
    fn entries(&self, filter: &EntryFilter) -> Result<Vec<ManagedEntry>, ContentError>;

    /// Fetch one entry (drafts included).
    fn entry(&self, id: &str) -> Result<ManagedEntry, ContentError>;

    /// Create an entry with server-generated ID.
    fn create_entry(
        &self,
        content_type: &str,
        fields: &Map<String, Value>,
    ) -> Result<ManagedEntry, ContentError>;

    /// Publish an entry version.
    fn publish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError>;

    /// Unpublish an entry, turning it back into a draft.
    fn unpublish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError>;
}
