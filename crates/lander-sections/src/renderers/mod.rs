//! Section renderers.
//!
//! Every renderer takes the section's fully resolved content entry and
//! returns its inner HTML. Missing optional fields and links omit the
//! corresponding element.

mod cta;
mod features;
mod footer;
mod hero;
mod product_specs;
mod testimonials;

use lander_content::Entry;

use crate::section_type::SectionType;

/// Render a content entry with the renderer for `kind`.
pub(crate) fn render(kind: SectionType, content: &Entry) -> String {
    match kind {
        SectionType::Hero => hero::render(content),
        SectionType::Features => features::render(content),
        SectionType::Testimonials => testimonials::render(content),
        SectionType::ProductSpecs => product_specs::render(content),
        SectionType::Cta => cta::render(content),
        SectionType::Footer => footer::render(content),
    }
}

#[cfg(test)]
pub(crate) fn entry(fields: serde_json::Value) -> Entry {
    serde_json::from_value(serde_json::json!({
        "sys": {"id": "content", "type": "Entry"},
        "fields": fields
    }))
    .unwrap()
}
