//! In-memory management API for tests.
//!
//! Versions behave like the real service: every write bumps the version,
//! stale versions get `409 VersionMismatch`, publishing records the
//! published version.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use serde_json::{Map, Value, json};

use lander_content::{ContentError, Link, Sys};

use crate::api::ManagementApi;
use crate::types::{ContentType, EntryFilter, ManagedEntry, PublishState, SOURCE_LOCALE};

#[derive(Default)]
struct State {
    content_types: BTreeMap<String, ContentType>,
    entries: Vec<ManagedEntry>,
    next_id: u32,
    calls: Vec<String>,
    conflicts: HashMap<String, u32>,
    guarded_types: HashSet<String>,
    failing: HashSet<String>,
}

/// In-memory [`ManagementApi`].
#[derive(Default)]
pub(crate) struct FakeManagement {
    state: Mutex<State>,
}

fn conflict() -> ContentError {
    ContentError::from_response(
        409,
        r#"{"sys":{"type":"Error","id":"VersionMismatch"},"message":"Version mismatch"}"#,
    )
}

fn not_found(id: &str) -> ContentError {
    ContentError::from_response(
        404,
        &format!(r#"{{"sys":{{"type":"Error","id":"NotFound"}},"message":"{id} not found"}}"#),
    )
}

fn server_error() -> ContentError {
    ContentError::from_response(500, "Internal Server Error")
}

impl FakeManagement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Store a published content type.
    pub(crate) fn with_content_type(self, mut content_type: ContentType) -> Self {
        content_type.sys.version = Some(2);
        content_type.sys.published_version = Some(1);
        self.lock()
            .content_types
            .insert(content_type.id().to_owned(), content_type);
        self
    }

    /// Store an entry; `published` entries get a published version.
    pub(crate) fn add_entry(&self, content_type: &str, fields: Value, published: bool) -> String {
        let mut state = self.lock();
        state.next_id += 1;
        let id = format!("entry-{}", state.next_id);
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        state.entries.push(ManagedEntry {
            sys: Sys {
                id: id.clone(),
                kind: "Entry".to_owned(),
                content_type: Some(Box::new(Link::new("ContentType", content_type))),
                version: Some(if published { 2 } else { 1 }),
                published_version: published.then_some(1),
                ..Sys::default()
            },
            fields,
        });
        id
    }

    /// Answer the next `count` publish calls for `id` with a version conflict.
    pub(crate) fn conflict_on_publish(self, id: &str, count: u32) -> Self {
        self.lock().conflicts.insert(id.to_owned(), count);
        self
    }

    /// Refuse updates of `content_type` while it has published entries.
    pub(crate) fn guard_published_fields(self, content_type: &str) -> Self {
        self.lock().guarded_types.insert(content_type.to_owned());
        self
    }

    /// Fail every mutation of `id` with a server error.
    pub(crate) fn fail(self, id: &str) -> Self {
        self.lock().failing.insert(id.to_owned());
        self
    }

    /// Recorded mutating calls, e.g. `publish_entry entry-1`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub(crate) fn stored_type(&self, id: &str) -> Option<ContentType> {
        self.lock().content_types.get(id).cloned()
    }

    pub(crate) fn stored_entries(&self) -> Vec<ManagedEntry> {
        self.lock().entries.clone()
    }
}

impl State {
    fn check_failure(&self, id: &str) -> Result<(), ContentError> {
        if self.failing.contains(id) {
            return Err(server_error());
        }
        Ok(())
    }

    fn take_conflict(&mut self, id: &str) -> bool {
        match self.conflicts.get_mut(id) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut ManagedEntry, ContentError> {
        self.entries
            .iter_mut()
            .find(|e| e.sys.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn matches(entry: &ManagedEntry, filter: &EntryFilter) -> bool {
    if let Some(content_type) = &filter.content_type
        && entry.content_type_id() != content_type
    {
        return false;
    }
    let state_ok = match filter.state {
        PublishState::Any => true,
        PublishState::Draft => !entry.is_published(),
        PublishState::Published => entry.is_published(),
    };
    state_ok
        && filter.field_filters.iter().all(|(field, value)| {
            entry.value(field, SOURCE_LOCALE).and_then(Value::as_str) == Some(value.as_str())
        })
}

impl ManagementApi for FakeManagement {
    fn content_types(&self) -> Result<Vec<ContentType>, ContentError> {
        Ok(self.lock().content_types.values().cloned().collect())
    }

    fn content_type(&self, id: &str) -> Result<ContentType, ContentError> {
        self.lock()
            .content_types
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn put_content_type(
        &self,
        definition: &ContentType,
        version: Option<u64>,
    ) -> Result<ContentType, ContentError> {
        let mut state = self.lock();
        let id = definition.id().to_owned();
        state.calls.push(format!("put_content_type {id}"));
        state.check_failure(&id)?;

        let current = state.content_types.get(&id).cloned();
        let stored = match current {
            Some(current) => {
                if version != current.sys.version {
                    return Err(conflict());
                }
                let has_published = state
                    .entries
                    .iter()
                    .any(|e| e.content_type_id() == id && e.is_published());
                if state.guarded_types.contains(&id) && has_published {
                    return Err(ContentError::from_response(
                        400,
                        r#"{"sys":{"type":"Error","id":"ValidationFailed"},"message":"Previously published fields are invalid"}"#,
                    ));
                }
                ContentType {
                    sys: Sys {
                        version: Some(current.version() + 1),
                        ..current.sys
                    },
                    ..definition.clone()
                }
            }
            None => ContentType {
                sys: Sys {
                    id: id.clone(),
                    kind: "ContentType".to_owned(),
                    version: Some(1),
                    ..Sys::default()
                },
                ..definition.clone()
            },
        };
        state.content_types.insert(id, stored.clone());
        Ok(stored)
    }

    fn publish_content_type(&self, id: &str, version: u64) -> Result<ContentType, ContentError> {
        let mut state = self.lock();
        state.calls.push(format!("publish_content_type {id}"));
        state.check_failure(id)?;
        if state.take_conflict(id) {
            return Err(conflict());
        }

        let content_type = state.content_types.get_mut(id).ok_or_else(|| not_found(id))?;
        if content_type.sys.version != Some(version) {
            return Err(conflict());
        }
        content_type.sys.published_version = Some(version);
        content_type.sys.version = Some(version + 1);
        Ok(content_type.clone())
    }

    fn entries(&self, filter: &EntryFilter) -> Result<Vec<ManagedEntry>, ContentError> {
        let state = self.lock();
        let limit = filter.limit.map_or(usize::MAX, |l| l as usize);
        Ok(state
            .entries
            .iter()
            .filter(|e| matches(e, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    fn entry(&self, id: &str) -> Result<ManagedEntry, ContentError> {
        let mut state = self.lock();
        state.entry_mut(id).map(|e| e.clone())
    }

    fn create_entry(
        &self,
        content_type: &str,
        fields: &Map<String, Value>,
    ) -> Result<ManagedEntry, ContentError> {
        let mut state = self.lock();
        state.calls.push(format!("create_entry {content_type}"));
        state.check_failure(content_type)?;
        state.next_id += 1;
        let entry = ManagedEntry {
            sys: Sys {
                id: format!("entry-{}", state.next_id),
                kind: "Entry".to_owned(),
                content_type: Some(Box::new(Link::new("ContentType", content_type))),
                version: Some(1),
                ..Sys::default()
            },
            fields: fields.clone(),
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }

    fn publish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError> {
        let mut state = self.lock();
        state.calls.push(format!("publish_entry {id}"));
        state.check_failure(id)?;
        if state.take_conflict(id) {
            return Err(conflict());
        }

        let entry = state.entry_mut(id)?;
        if entry.sys.version != Some(version) {
            return Err(conflict());
        }
        entry.sys.published_version = Some(version);
        entry.sys.published_at = Some("2024-01-01T00:00:00Z".to_owned());
        entry.sys.version = Some(version + 1);
        Ok(entry.clone())
    }

    fn unpublish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError> {
        let mut state = self.lock();
        state.calls.push(format!("unpublish_entry {id}"));
        state.check_failure(id)?;

        let entry = state.entry_mut(id)?;
        if entry.sys.version != Some(version) {
            return Err(conflict());
        }
        if !entry.is_published() {
            return Err(ContentError::from_response(
                400,
                r#"{"sys":{"type":"Error","id":"BadRequest"},"message":"Not published"}"#,
            ));
        }
        entry.sys.published_version = None;
        entry.sys.published_at = None;
        entry.sys.version = Some(version + 1);
        Ok(entry.clone())
    }
}

/// Localized field value helper for test fixtures.
pub(crate) fn localized(en: &str) -> Value {
    json!({ SOURCE_LOCALE: en })
}
