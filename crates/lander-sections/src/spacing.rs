//! Section spacing and background classes.

use lander_content::Entry;

use crate::html::escape_html;

/// Padding classes for a `padding` size.
pub(crate) fn padding_class(size: Option<&str>) -> &'static str {
    match size {
        Some("small") => "py-8 px-4",
        Some("medium") => "py-12 px-6",
        Some("large") => "py-16 px-8",
        _ => "",
    }
}

/// Margin classes for a `margin` size.
pub(crate) fn margin_class(size: Option<&str>) -> &'static str {
    match size {
        Some("small") => "my-4",
        Some("medium") => "my-8",
        Some("large") => "my-12",
        _ => "",
    }
}

/// Class attribute value for the `<section>` wrapper, already escaped.
pub(crate) fn section_classes(section: &Entry) -> String {
    let mut classes: Vec<String> = Vec::with_capacity(3);
    for class in [
        padding_class(section.text("padding")),
        margin_class(section.text("margin")),
    ] {
        if !class.is_empty() {
            classes.push(class.to_owned());
        }
    }
    if let Some(color) = section.text("backgroundColor").filter(|c| !c.is_empty()) {
        classes.push(format!("bg-[{}]", escape_html(color)));
    }
    classes.join(" ")
}
