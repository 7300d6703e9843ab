//! Page-level content lookups.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::error::ContentError;
use crate::model::{Asset, Entry};
use crate::query::EntryQuery;
use crate::source::ContentSource;

/// Content type ID of landing pages.
const LANDING_PAGE_TYPE: &str = "landingPage";

/// Link depth for the section listing: page, then its sections.
const SECTION_LIST_DEPTH: u32 = 2;

/// Link depth for single-entry fetches.
const ENTRY_DEPTH: u32 = 10;

/// Landing page metadata for the document head.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    /// Page title.
    pub title: String,
    /// Page slug.
    pub slug: String,
    /// Meta description.
    pub description: String,
    /// Social sharing image.
    pub image: Option<Asset>,
    /// Editorial status (`draft` or `published`), informational only.
    pub status: Option<String>,
}

/// Resolves landing pages and section content from a [`ContentSource`].
///
/// Listing lookups never fail: errors and empty results are logged and
/// reported as empty. Single-entry fetches propagate their errors.
#[derive(Clone)]
pub struct ContentResolver {
    source: Arc<dyn ContentSource>,
}

impl ContentResolver {
    /// Create a resolver over a content source.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Ordered section entries of the landing page with this slug.
    ///
    /// Returns an empty list, logging a warning, if no page matches or the
    /// query fails. Section links that did not resolve are skipped.
    pub fn landing_page_sections(&self, slug: &str, locale: &str) -> Vec<Entry> {
        let query = EntryQuery::new()
            .content_type(LANDING_PAGE_TYPE)
            .field_eq("slug", slug)
            .select(["fields.sections"])
            .include(SECTION_LIST_DEPTH)
            .limit(1)
            .locale(locale);

        let page = match self.source.entries(&query) {
            Ok(collection) => collection.items.into_iter().next(),
            Err(e) => {
                warn!(slug, locale, error = %e, "Failed to fetch landing page");
                return Vec::new();
            }
        };
        let Some(page) = page else {
            warn!(slug, locale, "No landing page found");
            return Vec::new();
        };

        let links = page
            .fields
            .get("sections")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut sections = Vec::with_capacity(links.len());
        for (position, link) in links.iter().enumerate() {
            match Entry::from_value(link) {
                Some(section) => sections.push(section),
                None => warn!(slug, position, "Skipping unresolved section link"),
            }
        }
        sections
    }

    /// Metadata of the landing page with this slug.
    ///
    /// Returns `None`, logging a warning, if no page matches, the query
    /// fails, or `title`, `slug` or `metaDescription` is missing.
    pub fn landing_page_metadata(&self, slug: &str, locale: &str) -> Option<PageMetadata> {
        let query = EntryQuery::new()
            .content_type(LANDING_PAGE_TYPE)
            .field_eq("slug", slug)
            .select([
                "fields.title",
                "fields.slug",
                "fields.metaDescription",
                "fields.metaImage",
                "fields.status",
            ])
            .limit(1)
            .locale(locale);

        let page = match self.source.entries(&query) {
            Ok(collection) => collection.items.into_iter().next(),
            Err(e) => {
                warn!(slug, locale, error = %e, "Failed to fetch landing page metadata");
                return None;
            }
        };
        let Some(page) = page else {
            warn!(slug, locale, "No landing page found");
            return None;
        };

        let (Some(title), Some(page_slug), Some(description)) = (
            page.text("title"),
            page.text("slug"),
            page.text("metaDescription"),
        ) else {
            warn!(slug, locale, "Landing page missing required metadata fields");
            return None;
        };

        Some(PageMetadata {
            title: title.to_owned(),
            slug: page_slug.to_owned(),
            description: description.to_owned(),
            image: page.asset("metaImage"),
            status: page.text("status").map(str::to_owned),
        })
    }

    /// Fetch one entry with full link expansion.
    ///
    /// # Errors
    ///
    /// Propagates the source error; [`ContentError::NotFound`] if the entry
    /// does not exist or is not published.
    pub fn entry_by_id(&self, id: &str, locale: &str) -> Result<Entry, ContentError> {
        self.source.entry(id, locale, ENTRY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockContentSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn section(id: &str, kind: &str) -> (String, Value) {
        (
            id.to_owned(),
            json!({"type": kind, "content": MockContentSource::entry_link(&format!("{id}-content"))}),
        )
    }

    fn source_with_page(section_ids: &[(&str, &str)]) -> MockContentSource {
        let mut source = MockContentSource::new().with_asset(
            "og",
            "Share",
            "//images.ctfassets.net/og.png",
            "image/png",
        );
        let mut links = Vec::new();
        for (id, kind) in section_ids {
            let (id, fields) = section(id, kind);
            source = source.with_entry(&id, "section", fields);
            links.push(MockContentSource::entry_link(&id));
        }
        source.with_entry(
            "page",
            "landingPage",
            json!({
                "title": "Home",
                "slug": "home",
                "metaDescription": "Our product",
                "metaImage": MockContentSource::asset_link("og"),
                "status": "published",
                "sections": links
            }),
        )
    }

    fn resolver(source: MockContentSource) -> (ContentResolver, Arc<MockContentSource>) {
        let source = Arc::new(source);
        (ContentResolver::new(Arc::clone(&source) as Arc<dyn ContentSource>), source)
    }

    #[test]
    fn test_sections_in_stored_order() {
        let (resolver, _) = resolver(source_with_page(&[
            ("s3", "footer"),
            ("s1", "hero"),
            ("s2", "features"),
        ]));
        let sections = resolver.landing_page_sections("home", "en-US");
        let ids: Vec<&str> = sections.iter().map(Entry::id).collect();
        assert_eq!(ids, vec!["s3", "s1", "s2"]);
        assert_eq!(sections[1].text("type"), Some("hero"));
    }

    #[test]
    fn test_sections_query_shape() {
        let (resolver, source) = resolver(source_with_page(&[("s1", "hero")]));
        resolver.landing_page_sections("home", "es");
        let query = &source.queries()[0];
        assert_eq!(query.content_type.as_deref(), Some("landingPage"));
        assert_eq!(query.field_filters, vec![("slug".to_owned(), "home".to_owned())]);
        assert_eq!(query.select, vec!["fields.sections".to_owned()]);
        assert_eq!(query.include, Some(2));
        assert_eq!(query.limit, Some(1));
        assert_eq!(query.locale.as_deref(), Some("es"));
    }

    #[test]
    fn test_section_order_independent_of_locale() {
        let (resolver, _) = resolver(source_with_page(&[("b", "cta"), ("a", "hero")]));
        let en: Vec<String> = resolver
            .landing_page_sections("home", "en-US")
            .iter()
            .map(|s| s.id().to_owned())
            .collect();
        let es: Vec<String> = resolver
            .landing_page_sections("home", "es")
            .iter()
            .map(|s| s.id().to_owned())
            .collect();
        assert_eq!(en, es);
    }

    #[test]
    fn test_missing_slug_yields_empty_and_none() {
        let (resolver, _) = resolver(source_with_page(&[("s1", "hero")]));
        assert!(resolver.landing_page_sections("missing", "en-US").is_empty());
        assert_eq!(resolver.landing_page_metadata("missing", "en-US"), None);
    }

    #[test]
    fn test_listing_errors_are_recovered() {
        let (resolver, _) = resolver(source_with_page(&[("s1", "hero")]).failing());
        assert!(resolver.landing_page_sections("home", "en-US").is_empty());
        assert_eq!(resolver.landing_page_metadata("home", "en-US"), None);
    }

    #[test]
    fn test_unresolved_section_link_skipped() {
        let source = source_with_page(&[("s1", "hero")]).with_entry(
            "page2",
            "landingPage",
            json!({
                "slug": "broken",
                "sections": [
                    MockContentSource::entry_link("s1"),
                    MockContentSource::entry_link("deleted")
                ]
            }),
        );
        let (resolver, _) = resolver(source);
        let sections = resolver.landing_page_sections("broken", "en-US");
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_metadata() {
        let (resolver, _) = resolver(source_with_page(&[]));
        let metadata = resolver.landing_page_metadata("home", "en-US").unwrap();
        assert_eq!(metadata.title, "Home");
        assert_eq!(metadata.slug, "home");
        assert_eq!(metadata.description, "Our product");
        assert_eq!(metadata.status.as_deref(), Some("published"));
        // Metadata query uses the default include depth, which reaches the image.
        assert_eq!(
            metadata.image.unwrap().url().as_deref(),
            Some("https://images.ctfassets.net/og.png")
        );
    }

    #[test]
    fn test_metadata_requires_description() {
        let source = MockContentSource::new().with_entry(
            "page",
            "landingPage",
            json!({"title": "Home", "slug": "home"}),
        );
        let (resolver, _) = resolver(source);
        assert_eq!(resolver.landing_page_metadata("home", "en-US"), None);
    }

    #[test]
    fn test_entry_by_id_passes_locale_and_depth() {
        let (resolver, source) = resolver(source_with_page(&[("s1", "hero")]));
        let entry = resolver.entry_by_id("s1", "es").unwrap();
        assert_eq!(entry.sys.locale.as_deref(), Some("es"));
        let query = &source.queries()[0];
        assert_eq!(query.sys_id.as_deref(), Some("s1"));
        assert_eq!(query.locale.as_deref(), Some("es"));
        assert_eq!(query.include, Some(10));
    }

    #[test]
    fn test_entry_by_id_propagates_errors() {
        let (resolver, _) = resolver(source_with_page(&[("s1", "hero")]).with_failing_entry("s1"));
        assert!(resolver.entry_by_id("s1", "en-US").is_err());
        assert!(matches!(
            resolver.entry_by_id("gone", "en-US"),
            Err(ContentError::NotFound(_))
        ));
    }
}
