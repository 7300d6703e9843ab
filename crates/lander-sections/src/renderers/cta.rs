//! Call-to-action section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{
    bg_class, escape_html, overlay_opacity, push_background_media, push_button,
};

fn button_variant(variant: &str) -> &'static str {
    match variant {
        "secondary" => "bg-white hover:bg-gray-100 text-blue-600",
        "outline" => "border-2 border-white hover:bg-white/10 text-white",
        _ => "bg-blue-600 hover:bg-blue-700 text-white",
    }
}

fn justify(alignment: &str) -> &'static str {
    match alignment {
        "left" => "justify-start",
        "right" => "justify-end",
        _ => "justify-center",
    }
}

/// The section's own button, or the primary button of its linked CTA block.
fn button(entry: &Entry) -> Option<Entry> {
    entry
        .entry("ctaButton")
        .or_else(|| entry.entry("ctaBlock")?.entry("primaryButton"))
}

pub(crate) fn render(entry: &Entry) -> String {
    let background_color = entry.text("backgroundColor").filter(|c| !c.is_empty());
    let text_color = if background_color.is_some() {
        "text-white"
    } else {
        "text-gray-900"
    };
    let alignment = entry
        .text("buttonAlignment")
        .or_else(|| entry.text("alignment"))
        .unwrap_or("center");

    let mut html = String::with_capacity(1024);
    let _ = writeln!(
        html,
        "<div class=\"relative max-w-7xl mx-auto px-4 py-16 {text_color}\">"
    );

    if let Some(background) = entry.asset("backgroundImage") {
        push_background_media(
            &mut html,
            &background,
            &bg_class(background_color, "bg-black"),
            overlay_opacity(entry.number("overlayOpacity")),
        );
    }

    html.push_str("<div class=\"relative z-10 max-w-3xl mx-auto text-center\">\n<div>\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-4xl font-bold mb-4\">{}</h2>",
        escape_html(entry.text("title").unwrap_or_default())
    );
    if let Some(subtitle) = entry.text("subtitle") {
        let _ = writeln!(html, "<p class=\"text-lg mb-8 opacity-90\">{}</p>", escape_html(subtitle));
    }
    html.push_str("</div>\n");

    if let Some(button) = button(entry) {
        let _ = writeln!(html, "<div class=\"flex flex-col sm:flex-row gap-4 {}\">", justify(alignment));
        push_button(
            &mut html,
            &button,
            "px-8 py-3 rounded-lg font-semibold text-center transition-colors",
            button_variant,
        );
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
    html
}
