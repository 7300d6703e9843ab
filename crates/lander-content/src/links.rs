//! Link resolution.
//!
//! Query responses carry linked objects separately in `includes`. The
//! [`LinkIndex`] replaces each link with the included object, hop by hop,
//! until the requested depth is exhausted.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ContentError;
use crate::model::{Entry, EntryCollection};

/// Raw `entries` response as returned by the Delivery API.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCollection {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub includes: Includes,
}

/// Linked objects included alongside the items.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Includes {
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Value>,
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Value>,
}

/// Lookup of entries and assets by ID.
#[derive(Debug, Default)]
pub(crate) struct LinkIndex {
    entries: HashMap<String, Value>,
    assets: HashMap<String, Value>,
}

impl LinkIndex {
    /// Index every entry and asset among `values`. Other objects are ignored.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut index = Self::default();
        for value in values {
            let Some(sys) = value.get("sys") else {
                continue;
            };
            let Some(id) = sys.get("id").and_then(Value::as_str) else {
                continue;
            };
            match sys.get("type").and_then(Value::as_str) {
                Some("Entry") => {
                    index.entries.insert(id.to_owned(), value.clone());
                }
                Some("Asset") => {
                    index.assets.insert(id.to_owned(), value.clone());
                }
                _ => {}
            }
        }
        index
    }

    fn lookup(&self, link: &Value) -> Option<&Value> {
        let sys = link.get("sys")?;
        let id = sys.get("id")?.as_str()?;
        match sys.get("linkType")?.as_str()? {
            "Entry" => self.entries.get(id),
            "Asset" => self.assets.get(id),
            _ => None,
        }
    }

    /// Resolve links inside an entry's fields, following at most `depth` hops.
    pub fn resolve(&self, item: &Value, depth: u32) -> Value {
        let mut resolved = item.clone();
        if let Some(fields) = resolved.get_mut("fields").and_then(Value::as_object_mut) {
            for value in fields.values_mut() {
                *value = self.resolve_value(value, depth);
            }
        }
        resolved
    }

    fn resolve_value(&self, value: &Value, depth: u32) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve_value(item, depth))
                    .collect(),
            ),
            Value::Object(_) if is_link(value) => {
                if depth == 0 {
                    return value.clone();
                }
                match self.lookup(value) {
                    Some(target) => self.resolve(target, depth - 1),
                    None => value.clone(),
                }
            }
            _ => value.clone(),
        }
    }
}

fn is_link(value: &Value) -> bool {
    value
        .get("sys")
        .and_then(|sys| sys.get("type"))
        .and_then(Value::as_str)
        == Some("Link")
}

/// Resolve a raw response into typed entries.
pub(crate) fn into_collection(raw: RawCollection, depth: u32) -> Result<EntryCollection, ContentError> {
    let index = LinkIndex::from_values(
        raw.items
            .iter()
            .chain(&raw.includes.entries)
            .chain(&raw.includes.assets),
    );
    let items = raw
        .items
        .iter()
        .map(|item| serde_json::from_value::<Entry>(index.resolve(item, depth)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EntryCollection {
        items,
        total: raw.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn link(id: &str) -> Value {
        json!({"sys": {"type": "Link", "linkType": "Entry", "id": id}})
    }

    fn raw_page() -> RawCollection {
        serde_json::from_value(json!({
            "total": 1,
            "items": [{
                "sys": {"id": "page", "type": "Entry"},
                "fields": {"sections": [link("s1"), link("s2"), link("missing")]}
            }],
            "includes": {
                "Entry": [
                    {"sys": {"id": "s1", "type": "Entry"}, "fields": {"type": "hero", "content": link("hero")}},
                    {"sys": {"id": "s2", "type": "Entry"}, "fields": {"type": "footer", "content": link("footer")}},
                    {"sys": {"id": "hero", "type": "Entry"}, "fields": {
                        "title": "Hi",
                        "ctaButton": link("button"),
                        "backgroundMedia": {"sys": {"type": "Link", "linkType": "Asset", "id": "img"}}
                    }},
                    {"sys": {"id": "button", "type": "Entry"}, "fields": {"text": "Go"}}
                ],
                "Asset": [
                    {"sys": {"id": "img", "type": "Asset"}, "fields": {"file": {"url": "//x/y.png"}}}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolves_links_in_order() {
        let collection = into_collection(raw_page(), 3).unwrap();
        assert_eq!(collection.total, 1);
        let page = &collection.items[0];
        let ids: Vec<String> = page
            .entries("sections")
            .iter()
            .map(|e| e.id().to_owned())
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_depth_bounds_resolution() {
        let collection = into_collection(raw_page(), 2).unwrap();
        let sections = collection.items[0].entries("sections");
        let hero = sections[0].entry("content").unwrap();
        assert_eq!(hero.text("title"), Some("Hi"));
        // Third hop is beyond depth 2.
        assert!(hero.entry("ctaButton").is_none());
        assert_eq!(hero.link_id("ctaButton"), Some("button"));
    }

    #[test]
    fn test_full_depth_resolves_assets() {
        let collection = into_collection(raw_page(), 10).unwrap();
        let sections = collection.items[0].entries("sections");
        let hero = sections[0].entry("content").unwrap();
        assert_eq!(hero.entry("ctaButton").unwrap().text("text"), Some("Go"));
        assert_eq!(
            hero.asset("backgroundMedia").unwrap().url().as_deref(),
            Some("https://x/y.png")
        );
    }

    #[test]
    fn test_depth_zero_leaves_links() {
        let collection = into_collection(raw_page(), 0).unwrap();
        assert!(collection.items[0].entries("sections").is_empty());
    }

    #[test]
    fn test_self_reference_terminates() {
        let raw: RawCollection = serde_json::from_value(json!({
            "total": 1,
            "items": [{"sys": {"id": "loop", "type": "Entry"}, "fields": {"next": link("loop")}}]
        }))
        .unwrap();
        let collection = into_collection(raw, 10).unwrap();
        let mut current = collection.items[0].clone();
        let mut hops = 0;
        while let Some(next) = current.entry("next") {
            current = next;
            hops += 1;
        }
        assert_eq!(hops, 10);
    }
}
