//! Section kinds.

use std::fmt;

/// Kind of a page section, taken from the section's `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionType {
    /// Full-height banner with background media and a call-to-action button.
    Hero,
    /// Grid or list of feature items.
    Features,
    /// Customer quotes with optional star ratings.
    Testimonials,
    /// Product specification grid, list or table.
    ProductSpecs,
    /// Call-to-action block.
    Cta,
    /// Page footer.
    Footer,
}

impl SectionType {
    /// All section kinds.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Features,
        Self::Testimonials,
        Self::ProductSpecs,
        Self::Cta,
        Self::Footer,
    ];

    /// Parse a `type` discriminator. Unknown values return `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hero" => Some(Self::Hero),
            "features" => Some(Self::Features),
            "testimonials" => Some(Self::Testimonials),
            "productSpecs" => Some(Self::ProductSpecs),
            "cta" => Some(Self::Cta),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }

    /// Discriminator as stored in content.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Testimonials => "testimonials",
            Self::ProductSpecs => "productSpecs",
            Self::Cta => "cta",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in SectionType::ALL {
            assert_eq!(SectionType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(SectionType::parse("productSpecs"), Some(SectionType::ProductSpecs));
        assert_eq!(SectionType::parse("ProductSpecs"), None);
        assert_eq!(SectionType::parse("carousel"), None);
        assert_eq!(SectionType::parse(""), None);
    }
}
