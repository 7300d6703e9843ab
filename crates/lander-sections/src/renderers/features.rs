//! Features section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{escape_html, push_heading, push_image};

/// Responsive grid columns. Counts outside 1-4 use the 3-column arrangement.
fn grid_columns(columns: Option<i64>) -> &'static str {
    match columns {
        Some(1) => "grid-cols-1",
        Some(2) => "grid-cols-1 md:grid-cols-2",
        Some(4) => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
        _ => "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
    }
}

pub(crate) fn render(entry: &Entry) -> String {
    let layout = entry.text("layout").unwrap_or("grid");
    let columns = grid_columns(entry.integer("columns"));

    let container = match layout {
        "list" => "space-y-8".to_owned(),
        "cards" => format!("grid {columns} gap-8"),
        _ => format!("grid {columns} gap-12"),
    };
    let item_class = if layout == "cards" {
        "p-6 rounded-lg border border-gray-200 hover:shadow-lg transition-shadow"
    } else {
        "flex flex-col items-center text-center"
    };

    let mut html = String::with_capacity(2048);
    html.push_str("<div class=\"max-w-7xl mx-auto px-4\">\n");
    push_heading(&mut html, entry);
    let _ = writeln!(html, "<div class=\"{container}\">");
    for feature in entry.entries("features") {
        let _ = writeln!(html, "<div class=\"{item_class}\">");
        if let Some(icon) = feature.asset("icon") {
            push_image(&mut html, &icon, "w-12 h-12 mb-4", None);
        }
        let _ = writeln!(
            html,
            "<h3 class=\"text-xl font-semibold mb-2\">{}</h3>",
            escape_html(feature.text("title").unwrap_or_default())
        );
        if let Some(description) = feature.text("description") {
            let _ = writeln!(html, "<p class=\"text-gray-600\">{}</p>", escape_html(description));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
    html
}
