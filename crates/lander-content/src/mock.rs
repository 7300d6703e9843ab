//! Mock content source for testing.
//!
//! Provides [`MockContentSource`] for unit testing without network access.

use std::collections::HashSet;
use std::sync::RwLock;

use serde_json::{Value, json};

use crate::error::ContentError;
use crate::links::LinkIndex;
use crate::model::{Entry, EntryCollection};
use crate::query::EntryQuery;
use crate::source::ContentSource;

/// Maximum number of items returned when the query sets no limit.
const DEFAULT_LIMIT: usize = 100;

/// Mock content source for testing.
///
/// Stores entries and assets as raw JSON in memory and answers queries the
/// way the Delivery API does: filtering, projection, limit and link
/// resolution. Every query is recorded for later inspection.
///
/// # Example
///
/// ```ignore
/// use lander_content::{ContentSource, EntryQuery, MockContentSource};
/// use serde_json::json;
///
/// let source = MockContentSource::new()
///     .with_entry("btn", "button", json!({"text": "Go"}))
///     .with_entry("hero", "heroSection", json!({
///         "title": "Hi",
///         "ctaButton": MockContentSource::entry_link("btn"),
///     }));
///
/// let hero = source.entry("hero", "en-US", 10).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    objects: RwLock<Vec<Value>>,
    queries: RwLock<Vec<EntryQuery>>,
    failing_ids: RwLock<HashSet<String>>,
    fail_all: RwLock<bool>,
}

impl MockContentSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link value referencing an entry.
    #[must_use]
    pub fn entry_link(id: &str) -> Value {
        json!({"sys": {"type": "Link", "linkType": "Entry", "id": id}})
    }

    /// Link value referencing an asset.
    #[must_use]
    pub fn asset_link(id: &str) -> Value {
        json!({"sys": {"type": "Link", "linkType": "Asset", "id": id}})
    }

    /// Add an entry of the given content type.
    ///
    /// `fields` must be a JSON object; use [`Self::entry_link`] and
    /// [`Self::asset_link`] for references.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, id: &str, content_type: &str, fields: Value) -> Self {
        self.objects.write().unwrap().push(json!({
            "sys": {
                "id": id,
                "type": "Entry",
                "contentType": {"sys": {"type": "Link", "linkType": "ContentType", "id": content_type}}
            },
            "fields": fields
        }));
        self
    }

    /// Add an asset with a file URL and MIME type.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_asset(self, id: &str, title: &str, url: &str, mime: &str) -> Self {
        self.objects.write().unwrap().push(json!({
            "sys": {"id": id, "type": "Asset"},
            "fields": {
                "title": title,
                "file": {"url": url, "contentType": mime}
            }
        }));
        self
    }

    /// Make every query that targets this entry ID fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_entry(self, id: &str) -> Self {
        self.failing_ids.write().unwrap().insert(id.to_owned());
        self
    }

    /// Make every query fail, as if the backend were unreachable.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn failing(self) -> Self {
        *self.fail_all.write().unwrap() = true;
        self
    }

    /// Queries received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<EntryQuery> {
        self.queries.read().unwrap().clone()
    }

    fn matches(entry: &Value, query: &EntryQuery) -> bool {
        let sys = &entry["sys"];
        if sys["type"] != "Entry" {
            return false;
        }
        if let Some(content_type) = &query.content_type
            && sys["contentType"]["sys"]["id"] != content_type.as_str()
        {
            return false;
        }
        if let Some(id) = &query.sys_id
            && sys["id"] != id.as_str()
        {
            return false;
        }
        query.field_filters.iter().all(|(name, expected)| {
            match &entry["fields"][name.as_str()] {
                Value::String(s) => s == expected,
                Value::Null => false,
                other => other.to_string() == *expected,
            }
        })
    }

    fn project(entry: &Value, query: &EntryQuery) -> Value {
        let mut projected = entry.clone();
        if let Some(locale) = &query.locale {
            projected["sys"]["locale"] = json!(locale);
        }
        if !query.select.is_empty()
            && let Some(fields) = projected.get_mut("fields").and_then(Value::as_object_mut)
        {
            fields.retain(|name, _| {
                query
                    .select
                    .iter()
                    .any(|path| path == "fields" || path.strip_prefix("fields.") == Some(name.as_str()))
            });
        }
        projected
    }
}

impl ContentSource for MockContentSource {
    fn entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError> {
        self.queries.write().unwrap().push(query.clone());

        if *self.fail_all.read().unwrap() {
            return Err(ContentError::HttpResponse {
                status: 503,
                code: None,
                message: "mock backend unavailable".to_owned(),
            });
        }
        if let Some(id) = &query.sys_id
            && self.failing_ids.read().unwrap().contains(id)
        {
            return Err(ContentError::HttpResponse {
                status: 500,
                code: Some("InternalError".to_owned()),
                message: format!("mock failure for {id}"),
            });
        }

        let objects = self.objects.read().unwrap();
        let index = LinkIndex::from_values(objects.iter());
        let matched: Vec<&Value> = objects
            .iter()
            .filter(|object| Self::matches(object, query))
            .collect();
        let limit = query
            .limit
            .map_or(DEFAULT_LIMIT, |limit| limit as usize);

        let items = matched
            .iter()
            .take(limit)
            .map(|entry| {
                let resolved = index.resolve(&Self::project(entry, query), query.include_depth());
                serde_json::from_value::<Entry>(resolved)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EntryCollection {
            items,
            total: matched.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source() -> MockContentSource {
        MockContentSource::new()
            .with_asset("icon", "Leaf", "//images.ctfassets.net/leaf.png", "image/png")
            .with_entry("item", "featureItem", json!({"title": "Fast", "icon": MockContentSource::asset_link("icon")}))
            .with_entry("page", "landingPage", json!({
                "title": "Home",
                "slug": "home",
                "sections": [MockContentSource::entry_link("item")]
            }))
    }

    #[test]
    fn test_filters_by_content_type_and_field() {
        let source = source();
        let query = EntryQuery::new()
            .content_type("landingPage")
            .field_eq("slug", "home");
        let result = source.entries(&query).unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id(), "page");

        let query = EntryQuery::new()
            .content_type("landingPage")
            .field_eq("slug", "about");
        assert_eq!(source.entries(&query).unwrap().total, 0);
    }

    #[test]
    fn test_select_projects_fields() {
        let query = EntryQuery::new()
            .content_type("landingPage")
            .select(["fields.slug"]);
        let result = source().entries(&query).unwrap();
        let fields: Vec<&String> = result.items[0].fields.keys().collect();
        assert_eq!(fields, vec!["slug"]);
    }

    #[test]
    fn test_entry_resolves_assets() {
        let item = source().entry("item", "en-US", 10).unwrap();
        assert_eq!(item.sys.locale.as_deref(), Some("en-US"));
        assert_eq!(item.asset("icon").unwrap().title(), Some("Leaf"));
    }

    #[test]
    fn test_entry_not_found() {
        let err = source().entry("nope", "en-US", 10).unwrap_err();
        assert!(matches!(err, ContentError::NotFound(id) if id == "nope"));
    }

    #[test]
    fn test_records_queries() {
        let source = source();
        source.entry("item", "es", 10).unwrap();
        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].locale.as_deref(), Some("es"));
        assert_eq!(queries[0].sys_id.as_deref(), Some("item"));
    }

    #[test]
    fn test_failing_entry() {
        let source = source().with_failing_entry("item");
        assert!(source.entry("item", "en-US", 10).is_err());
        assert!(source.entry("page", "en-US", 10).is_ok());
    }

    #[test]
    fn test_failing_all() {
        let source = source().failing();
        assert!(source.entries(&EntryQuery::new()).is_err());
    }
}
