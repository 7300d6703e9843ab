//! Landing page content model.
//!
//! Built-in content type definitions and the rules deciding which fields
//! hold one value per locale. Definitions are listed so that link targets
//! come before the types that reference them.

mod apply;
mod export;
mod localize;

pub use apply::apply_schema;
pub use export::{export_content_types, export_json};
pub use localize::localize_schema;

use lander_sections::SectionType;

use crate::types::{ContentType, Field};

/// Fields localized on every content type that has them.
pub const COMMON_LOCALIZED_FIELDS: &[&str] = &[
    "title",
    "subtitle",
    "description",
    "metaDescription",
    "text",
    "name",
    "value",
    "quote",
    "authorName",
    "authorTitle",
    "company",
    "longText",
];

/// Additional localized fields per content type.
pub const TYPE_LOCALIZED_FIELDS: &[(&str, &[&str])] = &[
    ("button", &["link"]),
    ("featureItem", &["link"]),
    ("productSpec", &["unit"]),
    ("navigationLink", &["url"]),
    ("socialLink", &["url"]),
    ("footerColumn", &["heading", "content"]),
    ("footerSection", &["tagline", "copyrightText"]),
];

/// Whether `field` of `content_type` holds one value per locale.
#[must_use]
pub fn is_localized(content_type: &str, field: &str) -> bool {
    COMMON_LOCALIZED_FIELDS.contains(&field)
        || TYPE_LOCALIZED_FIELDS
            .iter()
            .any(|(id, fields)| *id == content_type && fields.contains(&field))
}

/// Mark the localizable fields of `content_type`. Returns whether anything changed.
pub fn mark_localized(content_type: &mut ContentType) -> bool {
    let id = content_type.sys.id.clone();
    let mut changed = false;
    for field in &mut content_type.fields {
        if !field.localized && is_localized(&id, &field.id) {
            field.localized = true;
            changed = true;
        }
    }
    changed
}

const ALIGNMENTS: &[&str] = &["left", "center", "right"];
const SPACING: &[&str] = &["none", "small", "medium", "large"];

/// All content types used by the landing page, localization applied.
#[must_use]
pub fn definitions() -> Vec<ContentType> {
    let section_types: Vec<&str> = SectionType::ALL.iter().map(|t| t.as_str()).collect();

    let mut types = vec![
        ContentType::new(
            "button",
            "Button",
            "text",
            vec![
                Field::symbol("text", "Button Text").required().max_length(50),
                Field::symbol("link", "Button Link").required(),
                Field::symbol("variant", "Button Variant")
                    .one_of(&["primary", "secondary", "outline"])
                    .default_value("primary"),
                Field::symbol("size", "Button Size").one_of(&["small", "medium", "large"]),
                Field::asset("icon", "Icon", &["image"]),
            ],
        ),
        ContentType::new(
            "ctaBlock",
            "CTA Block",
            "title",
            vec![
                Field::symbol("title", "Title").required().max_length(100),
                Field::text("subtitle", "Subtitle"),
                Field::text("description", "Description").max_length(500),
                Field::entry("primaryButton", "Primary Button", &["button"]),
                Field::entry("secondaryButton", "Secondary Button", &["button"]),
                Field::symbol("alignment", "Alignment").one_of(ALIGNMENTS),
                Field::asset("backgroundImage", "Background Image", &["image"]),
            ],
        ),
        ContentType::new(
            "heroSection",
            "Hero Section",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("subtitle", "Subtitle"),
                Field::entry("ctaButton", "CTA Button", &["button"]),
                Field::asset("backgroundMedia", "Background Media", &["image", "video"]),
                Field::symbol("alignment", "Alignment").one_of(ALIGNMENTS),
                Field::number("overlayOpacity", "Overlay Opacity").range(0.0, 1.0),
                Field::symbol("backgroundColor", "Background Color"),
            ],
        ),
        ContentType::new(
            "featureItem",
            "Feature Item",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("description", "Description"),
                Field::asset("icon", "Icon", &["image"]),
                Field::symbol("link", "Link"),
            ],
        ),
        ContentType::new(
            "featuresSection",
            "Features Section",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("subtitle", "Subtitle"),
                Field::text("longText", "Long Text"),
                Field::entries("features", "Features", &["featureItem"]),
                Field::symbol("layout", "Layout").one_of(&["grid", "list", "cards"]),
                Field::integer("columns", "Columns").range(1.0, 4.0),
                Field::symbol("backgroundColor", "Background Color"),
            ],
        ),
        ContentType::new(
            "testimonial",
            "Testimonial",
            "authorName",
            vec![
                Field::text("quote", "Quote").required(),
                Field::symbol("authorName", "Author Name").required(),
                Field::symbol("authorTitle", "Author Title"),
                Field::asset("authorImage", "Author Image", &["image"]),
                Field::integer("rating", "Rating").range(1.0, 5.0),
                Field::symbol("company", "Company"),
            ],
        ),
        ContentType::new(
            "testimonialsSection",
            "Testimonials Section",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("subtitle", "Subtitle"),
                Field::entries("testimonials", "Testimonials", &["testimonial"]),
                Field::symbol("layout", "Layout").one_of(&["grid", "carousel", "list"]),
                Field::symbol("backgroundColor", "Background Color"),
            ],
        ),
        ContentType::new(
            "productSpec",
            "Product Spec",
            "name",
            vec![
                Field::symbol("name", "Name").required(),
                Field::symbol("value", "Value").required(),
                Field::symbol("unit", "Unit"),
                Field::asset("icon", "Icon", &["image"]),
                Field::text("description", "Description"),
            ],
        ),
        ContentType::new(
            "productSpecsSection",
            "Product Specs Section",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("subtitle", "Subtitle"),
                Field::entries("specs", "Specs", &["productSpec"]),
                Field::symbol("layout", "Layout").one_of(&["table", "grid", "list"]),
                Field::symbol("backgroundColor", "Background Color"),
            ],
        ),
        ContentType::new(
            "ctaSection",
            "CTA Section",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::text("subtitle", "Subtitle"),
                Field::entry("ctaButton", "CTA Button", &["button"]),
                Field::entry("ctaBlock", "CTA Block", &["ctaBlock"]),
                Field::symbol("alignment", "Alignment").one_of(ALIGNMENTS),
                Field::symbol("buttonAlignment", "Button Alignment").one_of(ALIGNMENTS),
                Field::asset("backgroundImage", "Background Image", &["image", "video"]),
                Field::symbol("backgroundColor", "Background Color"),
                Field::number("overlayOpacity", "Overlay Opacity").range(0.0, 1.0),
            ],
        ),
        ContentType::new(
            "navigationLink",
            "Navigation Link",
            "text",
            vec![
                Field::symbol("text", "Text").required(),
                Field::symbol("url", "URL").required(),
            ],
        ),
        ContentType::new(
            "socialLink",
            "Social Link",
            "platform",
            vec![
                Field::symbol("platform", "Platform").required(),
                Field::symbol("url", "URL").required(),
                Field::asset("icon", "Icon", &["image"]),
            ],
        ),
        ContentType::new(
            "footerColumn",
            "Footer Column",
            "heading",
            vec![
                Field::symbol("heading", "Heading").required(),
                Field::entries("links", "Links", &["navigationLink"]),
                Field::text("content", "Content"),
            ],
        ),
        ContentType::new(
            "footerSection",
            "Footer Section",
            "title",
            vec![
                Field::symbol("title", "Title"),
                Field::asset("logo", "Logo", &["image"]),
                Field::symbol("tagline", "Tagline"),
                Field::entries("columns", "Columns", &["footerColumn"]),
                Field::entries("socialLinks", "Social Links", &["socialLink"]),
                Field::entries("bottomLinks", "Bottom Links", &["navigationLink"]),
                Field::symbol("copyrightText", "Copyright Text"),
                Field::symbol("backgroundColor", "Background Color"),
                Field::symbol("accentColor", "Accent Color"),
                Field::boolean("showDivider", "Show Divider"),
                Field::symbol("layout", "Layout").one_of(&["standard", "minimal", "expanded"]),
            ],
        ),
        ContentType::new(
            "section",
            "Section",
            "type",
            vec![
                Field::symbol("type", "Type").required().one_of(&section_types),
                Field::entry(
                    "content",
                    "Content",
                    &[
                        "heroSection",
                        "featuresSection",
                        "testimonialsSection",
                        "productSpecsSection",
                        "ctaSection",
                        "footerSection",
                    ],
                )
                .required(),
                Field::symbol("padding", "Padding").one_of(SPACING),
                Field::symbol("margin", "Margin").one_of(SPACING),
                Field::symbol("backgroundColor", "Background Color"),
                Field::boolean("isFullWidth", "Is Full Width"),
            ],
        ),
        ContentType::new(
            "landingPage",
            "Landing Page",
            "title",
            vec![
                Field::symbol("title", "Title").required(),
                Field::symbol("slug", "Slug").required().unique(),
                Field::text("metaDescription", "Meta Description"),
                Field::asset("metaImage", "Meta Image", &["image"]),
                Field::entries("sections", "Sections", &["section"]),
                Field::symbol("status", "Status")
                    .required()
                    .one_of(&["draft", "published"]),
            ],
        ),
    ];

    for content_type in &mut types {
        mark_localized(content_type);
    }
    types
}
