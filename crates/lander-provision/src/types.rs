//! Content Management API types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use lander_content::Sys;

/// Locale the management API treats as the source of every field value.
pub const SOURCE_LOCALE: &str = "en-US";

/// Content type definition.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    /// System metadata (`id`, `version`, `publishedVersion`).
    #[serde(default)]
    pub sys: Sys,
    /// Display name.
    pub name: String,
    /// Field used as the entry title in the web app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions in display order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ContentType {
    /// Create a definition with the given ID.
    #[must_use]
    pub fn new(id: &str, name: &str, display_field: &str, fields: Vec<Field>) -> Self {
        Self {
            sys: Sys {
                id: id.to_owned(),
                kind: "ContentType".to_owned(),
                ..Sys::default()
            },
            name: name.to_owned(),
            display_field: Some(display_field.to_owned()),
            description: None,
            fields,
        }
    }

    /// Content type ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Current version, `0` for definitions that were never stored.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.sys.version.unwrap_or_default()
    }

    /// Look up a field by ID.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Field definition inside a content type.
///
/// Attributes this crate does not model (`disabled`, `omitted`, ...) are
/// kept in `extra` so that read-modify-write updates do not drop them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Field type (`Symbol`, `Text`, `Integer`, `Number`, `Boolean`, `Link`, `Array`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Target kind for `Link` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Item definition for `Array` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// Whether a value is required to publish.
    #[serde(default)]
    pub required: bool,
    /// Whether the field holds one value per locale.
    #[serde(default)]
    pub localized: bool,
    /// Validation rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Value>,
    /// Default value keyed by locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Unmodelled attributes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Item definition of an `Array` field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Items {
    /// Item type (`Symbol` or `Link`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Target kind for link items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Validation rules applied to each item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Value>,
}

impl Field {
    fn new(id: &str, name: &str, kind: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            kind: kind.to_owned(),
            ..Self::default()
        }
    }

    /// Short text field.
    #[must_use]
    pub fn symbol(id: &str, name: &str) -> Self {
        Self::new(id, name, "Symbol")
    }

    /// Long text field.
    #[must_use]
    pub fn text(id: &str, name: &str) -> Self {
        Self::new(id, name, "Text")
    }

    /// Integer field.
    #[must_use]
    pub fn integer(id: &str, name: &str) -> Self {
        Self::new(id, name, "Integer")
    }

    /// Decimal field.
    #[must_use]
    pub fn number(id: &str, name: &str) -> Self {
        Self::new(id, name, "Number")
    }

    /// Boolean field.
    #[must_use]
    pub fn boolean(id: &str, name: &str) -> Self {
        Self::new(id, name, "Boolean")
    }

    /// Link to one entry of the given content types.
    #[must_use]
    pub fn entry(id: &str, name: &str, content_types: &[&str]) -> Self {
        Self {
            link_type: Some("Entry".to_owned()),
            validations: vec![json!({ "linkContentType": content_types })],
            ..Self::new(id, name, "Link")
        }
    }

    /// Link to one asset of the given mime type groups.
    #[must_use]
    pub fn asset(id: &str, name: &str, mime_groups: &[&str]) -> Self {
        Self {
            link_type: Some("Asset".to_owned()),
            validations: vec![json!({ "linkMimetypeGroup": mime_groups })],
            ..Self::new(id, name, "Link")
        }
    }

    /// Ordered list of links to entries of the given content types.
    #[must_use]
    pub fn entries(id: &str, name: &str, content_types: &[&str]) -> Self {
        Self {
            items: Some(Items {
                kind: "Link".to_owned(),
                link_type: Some("Entry".to_owned()),
                validations: vec![json!({ "linkContentType": content_types })],
            }),
            ..Self::new(id, name, "Array")
        }
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as localized.
    #[must_use]
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Restrict values to a fixed set.
    #[must_use]
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.validations.push(json!({ "in": values }));
        self
    }

    /// Restrict numeric values to `[min, max]`.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.validations.push(json!({ "range": { "min": min, "max": max } }));
        self
    }

    /// Limit text length.
    #[must_use]
    pub fn max_length(mut self, max: u32) -> Self {
        self.validations.push(json!({ "size": { "max": max } }));
        self
    }

    /// Require values to be unique across entries.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.validations.push(json!({ "unique": true }));
        self
    }

    /// Default value for the source locale.
    #[must_use]
    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(json!({ SOURCE_LOCALE: value }));
        self
    }
}

/// Entry as seen through the management API.
///
/// Unlike delivery entries, every field value is a map keyed by locale code.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ManagedEntry {
    /// System metadata.
    pub sys: Sys,
    /// Field values keyed by field ID, then by locale.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl ManagedEntry {
    /// Entry ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Content type ID.
    #[must_use]
    pub fn content_type_id(&self) -> &str {
        self.sys
            .content_type
            .as_ref()
            .map_or("", |link| link.sys.id.as_str())
    }

    /// Current version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.sys.version.unwrap_or_default()
    }

    /// Whether some version of the entry is published.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.sys.published_version.is_some()
    }

    /// Field value for one locale.
    #[must_use]
    pub fn value(&self, field: &str, locale: &str) -> Option<&Value> {
        self.fields.get(field)?.get(locale)
    }

    /// Human-readable label for progress output.
    #[must_use]
    pub fn label(&self) -> &str {
        ["title", "text", "name", "heading", "authorName"]
            .iter()
            .find_map(|field| self.value(field, SOURCE_LOCALE)?.as_str())
            .unwrap_or("Untitled")
    }
}

/// Publication state filter for entry listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PublishState {
    /// Any entry.
    #[default]
    Any,
    /// Entries that were never published.
    Draft,
    /// Entries with a published version.
    Published,
}

/// Entry listing filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryFilter {
    /// Restrict to one content type.
    pub content_type: Option<String>,
    /// Publication state.
    pub state: PublishState,
    /// `fields.<name>` equality predicates.
    pub field_filters: Vec<(String, String)>,
    /// Stop after this many entries. `None` pages through everything.
    pub limit: Option<u32>,
}

impl EntryFilter {
    /// Filter on content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Filter on publication state.
    #[must_use]
    pub fn state(mut self, state: PublishState) -> Self {
        self.state = state;
        self
    }

    /// Filter on a field value.
    #[must_use]
    pub fn field_eq(mut self, field: &str, value: impl Into<String>) -> Self {
        self.field_filters.push((field.to_owned(), value.into()));
        self
    }

    /// Cap the number of entries.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters, excluding paging.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(content_type) = &self.content_type {
            params.push(("content_type".to_owned(), content_type.clone()));
        }
        match self.state {
            PublishState::Any => {}
            PublishState::Draft => {
                params.push(("sys.publishedAt[exists]".to_owned(), "false".to_owned()));
            }
            PublishState::Published => {
                params.push(("sys.publishedAt[exists]".to_owned(), "true".to_owned()));
            }
        }
        for (field, value) in &self.field_filters {
            params.push((format!("fields.{field}"), value.clone()));
        }
        params
    }
}

/// Paged list response.
#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}
