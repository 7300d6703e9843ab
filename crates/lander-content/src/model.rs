//! Content data model.
//!
//! Entries keep their fields as raw JSON so that any content type can be
//! represented. Typed accessors read individual fields and treat unresolved
//! links as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// System metadata attached to every entry, asset and link.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    /// Object ID.
    #[serde(default)]
    pub id: String,
    /// Object kind (`Entry`, `Asset`, `Link`, `Array`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Target kind for links (`Entry`, `Asset`, `ContentType`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Content type link for entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Box<Link>>,
    /// Locale the fields were delivered in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Last publish timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// Current version (management API only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Version that is currently published (management API only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_version: Option<u64>,
}

/// Reference to another object by ID.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Link {
    /// Link metadata (`type` is always `Link`).
    pub sys: Sys,
}

impl Link {
    /// Create a link of the given kind (`Entry`, `Asset`, `ContentType`).
    #[must_use]
    pub fn new(link_type: &str, id: impl Into<String>) -> Self {
        Self {
            sys: Sys {
                id: id.into(),
                kind: "Link".to_owned(),
                link_type: Some(link_type.to_owned()),
                ..Sys::default()
            },
        }
    }
}

/// Content entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    /// System metadata.
    pub sys: Sys,
    /// Field values keyed by field ID.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Convert a JSON value into an entry if it is a resolved entry object.
    ///
    /// Bare links and assets return `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if sys_kind(value)? != "Entry" {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Entry ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Content type ID (e.g. `heroSection`).
    #[must_use]
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.content_type.as_ref().map(|link| link.sys.id.as_str())
    }

    /// String field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.as_str()
    }

    /// Numeric field.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name)?.as_f64()
    }

    /// Integer field.
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.fields.get(name)?.as_i64()
    }

    /// Boolean field.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.fields.get(name)?.as_bool()
    }

    /// Linked entry, if resolved.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<Entry> {
        Entry::from_value(self.fields.get(name)?)
    }

    /// Linked asset, if resolved.
    #[must_use]
    pub fn asset(&self, name: &str) -> Option<Asset> {
        Asset::from_value(self.fields.get(name)?)
    }

    /// Linked entries in stored order. Unresolved links are skipped.
    #[must_use]
    pub fn entries(&self, name: &str) -> Vec<Entry> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Entry::from_value).collect())
            .unwrap_or_default()
    }

    /// ID of the object referenced by a link field, resolved or not.
    #[must_use]
    pub fn link_id(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.get("sys")?.get("id")?.as_str()
    }
}

/// Media asset (image, video, document).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Asset {
    /// System metadata.
    pub sys: Sys,
    /// Asset fields.
    #[serde(default)]
    pub fields: AssetFields,
}

/// Asset fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AssetFields {
    /// Asset title, used as alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Asset description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Uploaded file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
}

/// Uploaded file of an asset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// File URL, usually protocol-relative (`//images.ctfassets.net/...`).
    pub url: String,
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Original file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size and image dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
}

/// File details.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FileDetails {
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Image dimensions, for images only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSize>,
}

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Asset {
    /// Convert a JSON value into an asset if it is a resolved asset object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if sys_kind(value)? != "Asset" {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Absolute file URL.
    ///
    /// Protocol-relative URLs (`//host/path`) are rewritten to `https://host/path`.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        let file = self.fields.file.as_ref()?;
        Some(absolute_url(&file.url))
    }

    /// MIME type of the file.
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        self.fields.file.as_ref()?.content_type.as_deref()
    }

    /// Whether the file is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.mime().is_some_and(|mime| mime.starts_with("video/"))
    }

    /// Image dimensions, if known.
    #[must_use]
    pub fn dimensions(&self) -> Option<ImageSize> {
        self.fields.file.as_ref()?.details.as_ref()?.image
    }

    /// Asset title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.fields.title.as_deref()
    }
}

/// Rewrite a protocol-relative URL to HTTPS.
#[must_use]
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

/// Page of entries returned by a query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryCollection {
    /// Entries with links resolved to the requested depth.
    pub items: Vec<Entry>,
    /// Total number of matching entries, ignoring `limit`.
    pub total: u64,
}

fn sys_kind(value: &Value) -> Option<&str> {
    value.get("sys")?.get("type")?.as_str()
}
