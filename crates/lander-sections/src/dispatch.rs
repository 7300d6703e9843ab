//! Section dispatch.

use std::fmt::Write;

use lander_content::{ContentError, ContentResolver, Entry};
use tracing::warn;

use crate::html::escape_html;
use crate::renderers;
use crate::section_type::SectionType;
use crate::spacing::section_classes;

/// Per-request rendering inputs.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Resolver used to fetch section content.
    pub resolver: &'a ContentResolver,
    /// Backend locale code, passed through to every fetch.
    pub locale: &'a str,
}

/// Render one section.
///
/// Returns `None` if the section's `type` has no renderer; this is logged
/// once as a warning and the section is left out of the page. Otherwise
/// fetches the linked content entry and returns the wrapped section HTML,
/// or the fetch error.
pub fn dispatch(section: &Entry, ctx: &RenderContext<'_>) -> Option<Result<String, ContentError>> {
    let type_name = section.text("type").unwrap_or_default();
    let Some(kind) = SectionType::parse(type_name) else {
        warn!(
            section_type = type_name,
            section_id = section.id(),
            "No renderer for section type"
        );
        return None;
    };
    Some(render_section(kind, section, ctx))
}

fn render_section(
    kind: SectionType,
    section: &Entry,
    ctx: &RenderContext<'_>,
) -> Result<String, ContentError> {
    let content_id = section
        .link_id("content")
        .ok_or_else(|| ContentError::MalformedEntry {
            id: section.id().to_owned(),
            message: "section has no content link".to_owned(),
        })?;
    let content = ctx.resolver.entry_by_id(content_id, ctx.locale)?;
    let inner = renderers::render(kind, &content);
    Ok(wrap_section(kind, section, &inner))
}

/// Wrap rendered content in the `<section>` shell carrying spacing and
/// background classes.
fn wrap_section(kind: SectionType, section: &Entry, inner: &str) -> String {
    let mut html = String::with_capacity(inner.len() + 256);
    html.push_str("<section");
    let classes = section_classes(section);
    if !classes.is_empty() {
        let _ = write!(html, " class=\"{classes}\"");
    }
    let _ = writeln!(
        html,
        " data-section-type=\"{}\" data-section-id=\"{}\">",
        kind.as_str(),
        escape_html(section.id())
    );
    if section.flag("isFullWidth").unwrap_or(false) {
        html.push_str("<div class=\"w-full\">\n");
    } else {
        html.push_str("<div class=\"max-w-7xl mx-auto\">\n");
    }
    html.push_str(inner);
    html.push_str("</div>\n</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use lander_content::{ContentSource, MockContentSource};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Log sink shared with a thread-local subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, captured.output())
    }

    fn section(id: &str, kind: &str, fields: serde_json::Value) -> Entry {
        let mut all = json!({"type": kind, "content": MockContentSource::entry_link(&format!("{id}-content"))});
        if let (Some(all), Some(extra)) = (all.as_object_mut(), fields.as_object()) {
            all.extend(extra.clone());
        }
        serde_json::from_value(json!({"sys": {"id": id, "type": "Entry"}, "fields": all})).unwrap()
    }

    fn setup() -> (ContentResolver, Arc<MockContentSource>) {
        let source = Arc::new(
            MockContentSource::new()
                .with_entry("s1-content", "heroSection", json!({"title": "Hello"}))
                .with_entry("s2-content", "featuresSection", json!({"features": []})),
        );
        let resolver = ContentResolver::new(Arc::clone(&source) as Arc<dyn ContentSource>);
        (resolver, source)
    }

    #[test]
    fn test_unknown_type_warns_once_and_returns_none() {
        let (resolver, source) = setup();
        let ctx = RenderContext {
            resolver: &resolver,
            locale: "en-US",
        };
        let unknown = section("s9", "newsletter", json!({}));

        let (result, logs) = with_captured_logs(|| dispatch(&unknown, &ctx));

        assert!(result.is_none());
        assert_eq!(logs.matches("No renderer for section type").count(), 1);
        assert!(logs.contains("newsletter"));
        assert!(source.queries().is_empty());
    }

    #[test]
    fn test_known_type_renders_wrapped() {
        let (resolver, _) = setup();
        let ctx = RenderContext {
            resolver: &resolver,
            locale: "en-US",
        };
        let hero = section("s1", "hero", json!({"padding": "medium", "backgroundColor": "#fff"}));

        let html = dispatch(&hero, &ctx).unwrap().unwrap();

        assert!(html.starts_with(
            "<section class=\"py-12 px-6 bg-[#fff]\" data-section-type=\"hero\" data-section-id=\"s1\">\n<div class=\"max-w-7xl mx-auto\">"
        ));
        assert!(html.contains(">Hello</h1>"));
        assert!(html.ends_with("</div>\n</section>\n"));
    }

    #[test]
    fn test_full_width_section() {
        let (resolver, _) = setup();
        let ctx = RenderContext {
            resolver: &resolver,
            locale: "en-US",
        };
        let hero = section("s1", "hero", json!({"isFullWidth": true}));
        let html = dispatch(&hero, &ctx).unwrap().unwrap();
        assert!(html.contains("<div class=\"w-full\">"));
        assert!(!html.contains("max-w-7xl mx-auto\">\n"));
    }

    #[test]
    fn test_locale_passed_through() {
        let (resolver, source) = setup();
        for locale in ["en-US", "es", "de-CH"] {
            let ctx = RenderContext {
                resolver: &resolver,
                locale,
            };
            dispatch(&section("s2", "features", json!({})), &ctx)
                .unwrap()
                .unwrap();
        }
        let locales: Vec<Option<String>> = source.queries().into_iter().map(|q| q.locale).collect();
        assert_eq!(
            locales,
            vec![
                Some("en-US".to_owned()),
                Some("es".to_owned()),
                Some("de-CH".to_owned())
            ]
        );
    }

    #[test]
    fn test_missing_content_entry_propagates() {
        let (resolver, _) = setup();
        let ctx = RenderContext {
            resolver: &resolver,
            locale: "en-US",
        };
        let orphan = section("s7", "cta", json!({}));
        let result = dispatch(&orphan, &ctx).unwrap();
        assert!(matches!(result, Err(ContentError::NotFound(id)) if id == "s7-content"));
    }

    #[test]
    fn test_section_without_content_link() {
        let (resolver, _) = setup();
        let ctx = RenderContext {
            resolver: &resolver,
            locale: "en-US",
        };
        let bare: Entry =
            serde_json::from_value(json!({"sys": {"id": "bare", "type": "Entry"}, "fields": {"type": "hero"}}))
                .unwrap();
        let result = dispatch(&bare, &ctx).unwrap();
        assert!(matches!(result, Err(ContentError::MalformedEntry { .. })));
    }
}
