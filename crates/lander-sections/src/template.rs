//! HTML document shell around the rendered sections.

use std::fmt::Write;

use lander_content::Asset;

use crate::html::escape_html;

/// Title used when the landing page has no usable metadata.
pub(crate) const FALLBACK_TITLE: &str = "Welcome";

/// Description used when the landing page has no usable metadata.
pub(crate) const FALLBACK_DESCRIPTION: &str = "Welcome to our platform";

/// Entry in the language switcher.
pub(crate) struct LanguageLink<'a> {
    /// Route prefix (e.g. `en`).
    pub route: &'a str,
    /// Whether this is the locale being rendered.
    pub is_current: bool,
}

/// Everything needed to render a page document.
pub(crate) struct DocumentData<'a> {
    /// Value of `<html lang>`.
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Open Graph image.
    pub image: Option<&'a Asset>,
    pub languages: Vec<LanguageLink<'a>>,
    /// Concatenated section HTML.
    pub body: &'a str,
}

/// Display name for a locale route.
fn language_label(route: &str) -> String {
    match route {
        "en" => "English".to_owned(),
        "es" => "Español".to_owned(),
        "de" => "Deutsch".to_owned(),
        "fr" => "Français".to_owned(),
        "pt" => "Português".to_owned(),
        "it" => "Italiano".to_owned(),
        other => other.to_uppercase(),
    }
}

/// Render the complete HTML document.
pub(crate) fn render_document(doc: &DocumentData<'_>) -> String {
    let mut html = String::with_capacity(doc.body.len() + 2048);

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(doc.lang));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(doc.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(doc.description)
    );
    render_open_graph(&mut html, doc);
    html.push_str("</head>\n<body class=\"bg-white text-gray-900 antialiased\">\n");

    render_header(&mut html, &doc.languages);

    html.push_str("<main class=\"pt-20\">\n");
    html.push_str(doc.body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_open_graph(html: &mut String, doc: &DocumentData<'_>) {
    let _ = writeln!(
        html,
        "<meta property=\"og:title\" content=\"{}\">",
        escape_html(doc.title)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:description\" content=\"{}\">",
        escape_html(doc.description)
    );
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");

    let Some(image) = doc.image else {
        return;
    };
    let Some(url) = image.url() else {
        return;
    };
    let _ = writeln!(
        html,
        "<meta property=\"og:image\" content=\"{}\">",
        escape_html(&url)
    );
    if let Some(size) = image.dimensions() {
        let _ = writeln!(
            html,
            "<meta property=\"og:image:width\" content=\"{}\">",
            size.width
        );
        let _ = writeln!(
            html,
            "<meta property=\"og:image:height\" content=\"{}\">",
            size.height
        );
    }
    if let Some(alt) = image.title() {
        let _ = writeln!(
            html,
            "<meta property=\"og:image:alt\" content=\"{}\">",
            escape_html(alt)
        );
    }
}

/// Fixed header with the language switcher.
fn render_header(html: &mut String, languages: &[LanguageLink<'_>]) {
    html.push_str("<header class=\"fixed top-0 left-0 right-0 z-50 bg-white shadow-sm\">\n");
    html.push_str("<div class=\"container mx-auto px-4 py-4\">\n");
    html.push_str("<div class=\"flex items-center justify-between\">\n");

    let home = languages
        .iter()
        .find(|l| l.is_current)
        .map_or_else(|| "/".to_owned(), |l| format!("/{}/", l.route));
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"flex items-center text-xl font-semibold\">Home</a>",
        escape_html(&home)
    );

    html.push_str("<nav aria-label=\"Switch language\" class=\"flex items-center gap-2\">\n");
    for language in languages {
        let label = language_label(language.route);
        if language.is_current {
            let _ = writeln!(
                html,
                "<span aria-current=\"page\" class=\"px-4 py-2 rounded-md border border-gray-200 text-sm font-medium bg-gray-50\">{}</span>",
                escape_html(&label)
            );
        } else {
            let _ = writeln!(
                html,
                "<a href=\"/{}/\" hreflang=\"{}\" class=\"px-4 py-2 rounded-md border border-gray-200 text-sm font-medium hover:bg-gray-50 transition-colors\">{}</a>",
                escape_html(language.route),
                escape_html(language.route),
                escape_html(&label)
            );
        }
    }
    html.push_str("</nav>\n</div>\n</div>\n</header>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc<'a>(image: Option<&'a Asset>, languages: Vec<LanguageLink<'a>>) -> DocumentData<'a> {
        DocumentData {
            lang: "en-US",
            title: "Eco & Nova",
            description: "Clean \"energy\"",
            image,
            languages,
            body: "<section>x</section>\n",
        }
    }

    #[test]
    fn test_head_is_escaped() {
        let html = render_document(&doc(None, Vec::new()));
        assert!(html.contains("<html lang=\"en-US\">"));
        assert!(html.contains("<title>Eco &amp; Nova</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Clean &quot;energy&quot;\">"));
        assert!(html.contains("<meta property=\"og:title\" content=\"Eco &amp; Nova\">"));
        assert!(!html.contains("og:image"));
        assert!(html.contains("<main class=\"pt-20\">\n<section>x</section>\n</main>"));
    }

    #[test]
    fn test_open_graph_image() {
        let asset: Asset = serde_json::from_value(json!({
            "sys": {"id": "og", "type": "Asset"},
            "fields": {
                "title": "Wind farm",
                "file": {"url": "//images.ctfassets.net/og.jpg", "details": {"image": {"width": 1200, "height": 630}}}
            }
        }))
        .unwrap();
        let html = render_document(&doc(Some(&asset), Vec::new()));
        assert!(html.contains("<meta property=\"og:image\" content=\"https://images.ctfassets.net/og.jpg\">"));
        assert!(html.contains("<meta property=\"og:image:width\" content=\"1200\">"));
        assert!(html.contains("<meta property=\"og:image:height\" content=\"630\">"));
        assert!(html.contains("<meta property=\"og:image:alt\" content=\"Wind farm\">"));
    }

    #[test]
    fn test_language_switcher() {
        let languages = vec![
            LanguageLink {
                route: "en",
                is_current: false,
            },
            LanguageLink {
                route: "es",
                is_current: true,
            },
        ];
        let html = render_document(&doc(None, languages));
        assert!(html.contains("<a href=\"/en/\" hreflang=\"en\""));
        assert!(html.contains(">English</a>"));
        assert!(html.contains("<span aria-current=\"page\""));
        assert!(html.contains(">Español</span>"));
        assert!(html.contains("<a href=\"/es/\" class=\"flex items-center"));
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("en"), "English");
        assert_eq!(language_label("nl"), "NL");
    }
}
