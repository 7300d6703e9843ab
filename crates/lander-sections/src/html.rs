//! HTML building helpers shared by section renderers.

use std::fmt::Write;

use lander_content::{Asset, Entry};

/// Overlay opacity used when a section does not set one.
pub(crate) const DEFAULT_OVERLAY_OPACITY: f64 = 0.5;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Overlay opacity clamped to `[0, 1]`, defaulting to 0.5.
pub(crate) fn overlay_opacity(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => DEFAULT_OVERLAY_OPACITY,
    }
}

/// Push an `<img>` for an asset. Assets without a file are skipped.
///
/// `alt` defaults to the asset title. Intrinsic width and height are emitted
/// when the asset carries image dimensions.
pub(crate) fn push_image(html: &mut String, asset: &Asset, class: &str, alt: Option<&str>) {
    let Some(url) = asset.url() else {
        return;
    };
    let alt = alt.or(asset.title()).unwrap_or_default();
    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{}\" class=\"{}\"",
        escape_html(&url),
        escape_html(alt),
        class
    );
    if let Some(size) = asset.dimensions() {
        let _ = write!(html, " width=\"{}\" height=\"{}\"", size.width, size.height);
    }
    html.push_str(">\n");
}

/// Push a centered title and subtitle block if either is set.
pub(crate) fn push_heading(html: &mut String, entry: &Entry) {
    let title = entry.text("title").filter(|t| !t.is_empty());
    let subtitle = entry.text("subtitle").filter(|t| !t.is_empty());
    if title.is_none() && subtitle.is_none() {
        return;
    }
    html.push_str("<div class=\"text-center mb-12\">\n");
    if let Some(title) = title {
        let _ = writeln!(
            html,
            "<h2 class=\"text-3xl font-bold mb-4\">{}</h2>",
            escape_html(title)
        );
    }
    if let Some(subtitle) = subtitle {
        let _ = writeln!(
            html,
            "<p class=\"text-lg text-gray-600 max-w-2xl mx-auto\">{}</p>",
            escape_html(subtitle)
        );
    }
    html.push_str("</div>\n");
}

/// Push a full-bleed background for hero and call-to-action sections.
///
/// Videos (`video/*` MIME types) become an autoplaying, muted, looping
/// inline `<video>`; anything else becomes a background image. Both get an
/// overlay with `overlay_class` at the given opacity.
pub(crate) fn push_background_media(
    html: &mut String,
    asset: &Asset,
    overlay_class: &str,
    opacity: f64,
) {
    let Some(url) = asset.url() else {
        return;
    };
    let url = escape_html(&url);

    if asset.is_video() {
        html.push_str("<div class=\"absolute inset-0 z-0 overflow-hidden\">\n");
        let _ = writeln!(
            html,
            "<video autoplay muted loop playsinline class=\"absolute min-w-full min-h-full object-cover\">\
             <source src=\"{}\" type=\"{}\"></video>",
            url,
            escape_html(asset.mime().unwrap_or_default())
        );
    } else {
        let _ = writeln!(
            html,
            "<div class=\"absolute inset-0 z-0\" style=\"background-image: url(&#x27;{url}&#x27;); \
             background-size: cover; background-position: center;\">"
        );
    }
    let _ = writeln!(
        html,
        "<div class=\"absolute inset-0 {overlay_class}\" style=\"opacity: {opacity}\"></div>"
    );
    html.push_str("</div>\n");
}

/// Push a button link from a `button` entry.
///
/// `variant_class` maps the `variant` field (default `primary`) to classes.
pub(crate) fn push_button(
    html: &mut String,
    button: &Entry,
    base_class: &str,
    variant_class: fn(&str) -> &'static str,
) {
    let variant = button.text("variant").unwrap_or("primary");
    let _ = write!(
        html,
        "<a href=\"{}\" class=\"{} {}\">",
        escape_html(button.text("link").unwrap_or("#")),
        base_class,
        variant_class(variant)
    );
    if let Some(icon) = button.asset("icon") {
        push_image(html, &icon, "w-5 h-5 inline-block mr-2", None);
    }
    html.push_str(&escape_html(button.text("text").unwrap_or_default()));
    html.push_str("</a>\n");
}

/// Background class for a color field: `bg-[color]`, or `fallback` when unset.
pub(crate) fn bg_class(color: Option<&str>, fallback: &str) -> String {
    match color.filter(|c| !c.is_empty()) {
        Some(color) => format!("bg-[{}]", escape_html(color)),
        None => fallback.to_owned(),
    }
}
