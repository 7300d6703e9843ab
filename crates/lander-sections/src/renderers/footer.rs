//! Footer section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{escape_html, push_image};

/// Logo box size in pixels.
const LOGO_SIZE: u32 = 56;

/// Arrangement of the footer blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Standard,
    Minimal,
    Expanded,
}

impl Layout {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("minimal") => Self::Minimal,
            Some("expanded") => Self::Expanded,
            _ => Self::Standard,
        }
    }
}

struct Footer<'a> {
    entry: &'a Entry,
    columns: Vec<Entry>,
    social_links: Vec<Entry>,
    bottom_links: Vec<Entry>,
    show_divider: bool,
}

impl<'a> Footer<'a> {
    fn new(entry: &'a Entry) -> Self {
        Self {
            columns: entry.entries("columns"),
            social_links: entry.entries("socialLinks"),
            bottom_links: entry.entries("bottomLinks"),
            show_divider: entry.flag("showDivider").unwrap_or(true),
            entry,
        }
    }

    fn push_logo(&self, html: &mut String) {
        let Some(logo) = self.entry.asset("logo") else {
            return;
        };
        let Some(url) = logo.url() else {
            return;
        };
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\" class=\"w-14 h-14 object-cover rounded mb-4\" width=\"{LOGO_SIZE}\" height=\"{LOGO_SIZE}\">",
            escape_html(&url),
            escape_html(logo.title().unwrap_or_default())
        );
    }

    fn push_social_links(&self, html: &mut String) {
        if self.social_links.is_empty() {
            return;
        }
        html.push_str("<div class=\"flex gap-4 mb-8\">\n");
        for link in &self.social_links {
            let platform = link.text("platform").unwrap_or_default();
            let _ = write!(
                html,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"transition-colors\" aria-label=\"{}\">",
                escape_html(link.text("url").unwrap_or("#")),
                escape_html(platform)
            );
            match link.asset("icon") {
                Some(icon) => push_image(html, &icon, "w-6 h-6", Some(platform)),
                None => {
                    let _ = write!(html, "<span class=\"text-2xl\">{}</span>", escape_html(platform));
                }
            }
            html.push_str("</a>\n");
        }
        html.push_str("</div>\n");
    }

    fn push_columns(&self, html: &mut String) {
        if self.columns.is_empty() {
            return;
        }
        let _ = writeln!(
            html,
            "<div class=\"grid grid-cols-1 md:grid-cols-{} gap-8 mb-8\">",
            self.columns.len()
        );
        for column in &self.columns {
            html.push_str("<div>\n");
            if let Some(heading) = column.text("heading") {
                let _ = writeln!(
                    html,
                    "<h3 class=\"text-lg font-semibold mb-4\">{}</h3>",
                    escape_html(heading)
                );
            }
            let links = column.entries("links");
            if !links.is_empty() {
                html.push_str("<ul class=\"space-y-2\">\n");
                for link in &links {
                    html.push_str("<li>");
                    push_nav_link(html, link);
                    html.push_str("</li>\n");
                }
                html.push_str("</ul>\n");
            }
            if let Some(content) = column.text("content") {
                let _ = writeln!(
                    html,
                    "<div class=\"prose prose-invert max-w-none\">{}</div>",
                    escape_html(content)
                );
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }

    fn push_divider(&self, html: &mut String) {
        if self.show_divider {
            html.push_str("<hr class=\"border-gray-800 my-8\">\n");
        }
    }

    fn push_bottom_links(&self, html: &mut String) {
        if self.bottom_links.is_empty() {
            return;
        }
        html.push_str("<div class=\"flex flex-wrap gap-4 justify-center mb-4\">\n");
        for link in &self.bottom_links {
            push_nav_link(html, link);
            html.push('\n');
        }
        html.push_str("</div>\n");
    }

    fn push_copyright(&self, html: &mut String, class: &str) {
        if let Some(text) = self.entry.text("copyrightText") {
            let _ = writeln!(html, "<p class=\"{class}\">{}</p>", escape_html(text));
        }
    }

    fn push_tagline(&self, html: &mut String, class: &str) {
        if let Some(tagline) = self.entry.text("tagline") {
            let _ = writeln!(html, "<p class=\"{class}\">{}</p>", escape_html(tagline));
        }
    }
}

fn push_nav_link(html: &mut String, link: &Entry) {
    let _ = write!(
        html,
        "<a href=\"{}\" class=\"transition-colors\">{}</a>",
        escape_html(link.text("url").unwrap_or("#")),
        escape_html(link.text("text").unwrap_or_default())
    );
}

pub(crate) fn render(entry: &Entry) -> String {
    let footer = Footer::new(entry);
    let background = entry
        .text("backgroundColor")
        .filter(|c| !c.is_empty())
        .unwrap_or("#000");
    let color = entry
        .text("accentColor")
        .filter(|c| !c.is_empty())
        .unwrap_or("#fff");
    let layout = Layout::parse(entry.text("layout"));

    let mut html = String::with_capacity(4096);
    let _ = writeln!(
        html,
        "<footer style=\"background-color: {}; color: {}\">",
        escape_html(background),
        escape_html(color)
    );
    html.push_str("<div class=\"max-w-7xl mx-auto px-4 py-12\">\n");

    html.push_str("<div class=\"flex flex-col items-center text-center mb-12\">\n");
    footer.push_logo(&mut html);
    footer.push_tagline(&mut html, "text-lg max-w-2xl");
    html.push_str("</div>\n");

    match layout {
        Layout::Standard => {
            footer.push_social_links(&mut html);
            footer.push_columns(&mut html);
            footer.push_divider(&mut html);
            footer.push_bottom_links(&mut html);
            footer.push_copyright(&mut html, "text-center text-sm");
        }
        Layout::Minimal => {
            html.push_str("<div class=\"flex flex-col items-center\">\n");
            footer.push_social_links(&mut html);
            footer.push_bottom_links(&mut html);
            footer.push_copyright(&mut html, "text-center text-sm mt-4");
            html.push_str("</div>\n");
        }
        Layout::Expanded => {
            html.push_str("<div class=\"grid grid-cols-1 lg:grid-cols-2 gap-12\">\n<div>\n");
            footer.push_logo(&mut html);
            footer.push_tagline(&mut html, "text-lg mb-6");
            footer.push_social_links(&mut html);
            html.push_str("</div>\n<div>\n");
            footer.push_columns(&mut html);
            footer.push_divider(&mut html);
            footer.push_bottom_links(&mut html);
            footer.push_copyright(&mut html, "text-sm");
            html.push_str("</div>\n</div>\n");
        }
    }

    html.push_str("</div>\n</footer>\n");
    html
}
