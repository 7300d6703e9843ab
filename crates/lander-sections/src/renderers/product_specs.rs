//! Product specifications section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{escape_html, push_heading, push_image};

fn push_value(html: &mut String, spec: &Entry) {
    html.push_str(&escape_html(spec.text("value").unwrap_or_default()));
    if let Some(unit) = spec.text("unit") {
        let _ = write!(html, "<span class=\"text-gray-500 ml-1\">{}</span>", escape_html(unit));
    }
}

fn push_table(html: &mut String, specs: &[Entry]) {
    html.push_str("<div class=\"overflow-x-auto\">\n<table class=\"w-full border-collapse\">\n<tbody>\n");
    for spec in specs {
        html.push_str("<tr class=\"border-b border-gray-200 last:border-b-0\">\n");
        html.push_str("<td class=\"py-4 px-6 font-semibold w-1/3\">");
        if let Some(icon) = spec.asset("icon") {
            push_image(html, &icon, "w-6 h-6 inline-block mr-2", None);
        }
        html.push_str(&escape_html(spec.text("name").unwrap_or_default()));
        html.push_str("</td>\n<td class=\"py-4 px-6\">\n<div class=\"font-medium\">");
        push_value(html, spec);
        html.push_str("</div>\n");
        if let Some(description) = spec.text("description") {
            let _ = writeln!(
                html,
                "<div class=\"text-sm text-gray-600 mt-1\">{}</div>",
                escape_html(description)
            );
        }
        html.push_str("</td>\n</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn push_cards(html: &mut String, specs: &[Entry], container: &str) {
    let _ = writeln!(html, "<div class=\"{container}\">");
    for spec in specs {
        html.push_str(
            "<div class=\"p-4 rounded-lg border border-gray-200 hover:shadow-md transition-shadow\">\n\
             <div class=\"flex items-start gap-3\">\n",
        );
        if let Some(icon) = spec.asset("icon") {
            push_image(html, &icon, "w-6 h-6 mt-1", None);
        }
        let _ = writeln!(
            html,
            "<div>\n<h3 class=\"font-semibold\">{}</h3>",
            escape_html(spec.text("name").unwrap_or_default())
        );
        html.push_str("<p class=\"text-gray-900 mt-1\">");
        push_value(html, spec);
        html.push_str("</p>\n");
        if let Some(description) = spec.text("description") {
            let _ = writeln!(
                html,
                "<p class=\"text-sm text-gray-600 mt-1\">{}</p>",
                escape_html(description)
            );
        }
        html.push_str("</div>\n</div>\n</div>\n");
    }
    html.push_str("</div>\n");
}

pub(crate) fn render(entry: &Entry) -> String {
    let specs = entry.entries("specs");

    let mut html = String::with_capacity(2048);
    html.push_str("<div>\n");
    push_heading(&mut html, entry);
    match entry.text("layout").unwrap_or("grid") {
        "table" => push_table(&mut html, &specs),
        "list" => push_cards(&mut html, &specs, "space-y-6"),
        _ => push_cards(&mut html, &specs, "grid grid-cols-1 md:grid-cols-2 gap-6"),
    }
    html.push_str("</div>\n");
    html
}
