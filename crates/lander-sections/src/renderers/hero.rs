//! Hero section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{
    bg_class, escape_html, overlay_opacity, push_background_media, push_button,
};

const ARROW_DOWN: &str = "<svg class=\"w-6 h-6 opacity-50 text-white\" fill=\"none\" \
    stroke=\"currentColor\" viewBox=\"0 0 24 24\"><path stroke-linecap=\"round\" \
    stroke-linejoin=\"round\" stroke-width=\"2\" d=\"M19 14l-7 7m0 0l-7-7m7 7V3\"></path></svg>";

fn button_variant(variant: &str) -> &'static str {
    match variant {
        "secondary" => {
            "bg-white hover:bg-gray-100 text-blue-600 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 transition-all duration-200"
        }
        "outline" => {
            "border-2 border-white hover:bg-white/10 text-white backdrop-blur-sm transition-colors duration-200"
        }
        _ => {
            "bg-blue-600 hover:bg-blue-700 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 transition-all duration-200"
        }
    }
}

pub(crate) fn render(entry: &Entry) -> String {
    let alignment = entry.text("alignment").unwrap_or("center");
    let left = alignment == "left";
    let overlay_class = bg_class(entry.text("backgroundColor"), "bg-black");
    let opacity = overlay_opacity(entry.number("overlayOpacity"));

    let mut html = String::with_capacity(2048);
    let _ = writeln!(html, "<div class=\"relative h-[90vh]\" data-alignment=\"{}\">", escape_html(alignment));

    if let Some(media) = entry.asset("backgroundMedia") {
        push_background_media(&mut html, &media, &overlay_class, opacity);
    }

    let _ = writeln!(
        html,
        "<div class=\"relative z-10 w-full h-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center {}\">",
        if left {
            "md:grid md:grid-cols-2 md:gap-12 md:items-center"
        } else {
            "justify-center"
        }
    );
    let _ = writeln!(
        html,
        "<div class=\"{} space-y-6 w-full\">",
        if left { "md:text-left" } else { "text-center" }
    );
    let _ = writeln!(
        html,
        "<h1 class=\"text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight tracking-tight text-white\">{}</h1>",
        escape_html(entry.text("title").unwrap_or_default())
    );
    if let Some(subtitle) = entry.text("subtitle") {
        let _ = writeln!(
            html,
            "<p class=\"text-lg sm:text-xl md:text-2xl max-w-2xl mx-auto opacity-90 leading-relaxed text-white\">{}</p>",
            escape_html(subtitle)
        );
    }

    let _ = writeln!(
        html,
        "<div class=\"flex flex-col sm:flex-row gap-4 mt-8 {}\">",
        if left { "md:justify-start" } else { "justify-center" }
    );
    if let Some(button) = entry.entry("ctaButton") {
        push_button(
            &mut html,
            &button,
            "px-8 py-4 rounded-lg font-semibold text-center",
            button_variant,
        );
    }
    html.push_str("</div>\n</div>\n");

    // Empty right column of the split layout
    if left {
        html.push_str("<div class=\"hidden md:block relative\"></div>\n");
    }
    html.push_str("</div>\n");

    html.push_str(
        "<div class=\"absolute bottom-8 left-1/2 transform -translate-x-1/2 z-10 animate-bounce\">",
    );
    html.push_str(ARROW_DOWN);
    html.push_str("</div>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::entry;
    use serde_json::json;

    fn video() -> serde_json::Value {
        json!({
            "sys": {"id": "v", "type": "Asset"},
            "fields": {"title": "Loop", "file": {"url": "//videos.ctfassets.net/loop.webm", "contentType": "video/webm"}}
        })
    }

    #[test]
    fn test_defaults() {
        let html = render(&entry(json!({"title": "Grow"})));
        assert!(html.contains("data-alignment=\"center\""));
        assert!(html.contains("text-center space-y-6"));
        assert!(html.contains("justify-center"));
        assert!(!html.contains("md:grid-cols-2"));
        assert!(html.contains(">Grow</h1>"));
    }

    #[test]
    fn test_default_overlay_opacity_and_color() {
        let html = render(&entry(json!({"title": "Grow", "backgroundMedia": video()})));
        assert!(html.contains("class=\"absolute inset-0 bg-black\" style=\"opacity: 0.5\""));
    }

    #[test]
    fn test_overlay_opacity_and_color_from_fields() {
        let html = render(&entry(json!({
            "backgroundMedia": video(),
            "overlayOpacity": 0.8,
            "backgroundColor": "#0a3d2e"
        })));
        assert!(html.contains("class=\"absolute inset-0 bg-[#0a3d2e]\" style=\"opacity: 0.8\""));
    }

    #[test]
    fn test_video_background_url_rewritten() {
        let html = render(&entry(json!({"backgroundMedia": video()})));
        assert!(html.contains("<video autoplay muted loop playsinline"));
        assert!(html.contains("src=\"https://videos.ctfassets.net/loop.webm\""));
    }

    #[test]
    fn test_left_alignment() {
        let html = render(&entry(json!({"alignment": "left"})));
        assert!(html.contains("md:grid md:grid-cols-2 md:gap-12 md:items-center"));
        assert!(html.contains("md:text-left space-y-6"));
        assert!(html.contains("md:justify-start"));
        assert!(html.contains("hidden md:block relative"));
    }

    #[test]
    fn test_button() {
        let html = render(&entry(json!({
            "ctaButton": {
                "sys": {"id": "b", "type": "Entry"},
                "fields": {"text": "Start now", "link": "/signup", "variant": "outline"}
            }
        })));
        assert!(html.contains("<a href=\"/signup\" class=\"px-8 py-4 rounded-lg font-semibold text-center border-2 border-white"));
        assert!(html.contains(">Start now</a>"));
    }

    #[test]
    fn test_missing_button_is_omitted() {
        let html = render(&entry(json!({
            "title": "Grow",
            "ctaButton": {"sys": {"id": "gone", "type": "Link", "linkType": "Entry"}}
        })));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(&entry(json!({"title": "<script>alert(1)</script>"})));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
