//! Page assembly.
//!
//! Resolves a landing page, renders its sections in parallel and wraps them
//! in the document shell.

use lander_config::{RenderConfig, SectionErrorPolicy, SiteConfig};
use lander_content::{ContentError, ContentResolver, Entry};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::dispatch::{RenderContext, dispatch};
use crate::html::escape_html;
use crate::template::{
    DocumentData, FALLBACK_DESCRIPTION, FALLBACK_TITLE, LanguageLink, render_document,
};

/// Page rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The route prefix is not a configured locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A section's content could not be fetched.
    #[error("Failed to render section {section_id} ({section_type})")]
    Section {
        /// Section entry ID.
        section_id: String,
        /// Section `type` value.
        section_type: String,
        /// Underlying fetch error.
        #[source]
        source: ContentError,
    },
}

/// Renders landing pages for every configured locale.
#[derive(Clone)]
pub struct PageRenderer {
    resolver: ContentResolver,
    site: SiteConfig,
    section_errors: SectionErrorPolicy,
}

impl PageRenderer {
    /// Create a renderer from site and render settings.
    #[must_use]
    pub fn new(resolver: ContentResolver, site: &SiteConfig, render: &RenderConfig) -> Self {
        Self {
            resolver,
            site: site.clone(),
            section_errors: render.section_errors,
        }
    }

    /// Whether a route prefix is a configured locale.
    #[must_use]
    pub fn has_locale(&self, route: &str) -> bool {
        self.site.locale_code(route).is_some()
    }

    /// Render the home landing page for a locale route prefix (e.g. `en`).
    ///
    /// Sections are fetched concurrently and assembled in page order.
    /// Unknown section types are left out. A section whose content cannot be
    /// fetched becomes an empty placeholder, or fails the page under the
    /// `fail` policy.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownLocale`] for unconfigured routes and
    /// [`RenderError::Section`] under the `fail` policy.
    pub fn render(&self, route: &str) -> Result<String, RenderError> {
        self.render_slug(route, &self.site.home_slug)
    }

    /// Render the landing page with `slug` for a locale route prefix.
    ///
    /// # Errors
    ///
    /// See [`PageRenderer::render`].
    pub fn render_slug(&self, route: &str, slug: &str) -> Result<String, RenderError> {
        let locale = self
            .site
            .locale_code(route)
            .ok_or_else(|| RenderError::UnknownLocale(route.to_owned()))?;

        let metadata = self.resolver.landing_page_metadata(slug, locale);
        let sections = self.resolver.landing_page_sections(slug, locale);
        debug!(slug, locale, sections = sections.len(), "Rendering page");

        let body = self.render_sections(&sections, locale)?;

        let languages = self
            .site
            .locales
            .keys()
            .map(|key| LanguageLink {
                route: key,
                is_current: key.as_str() == route,
            })
            .collect();
        let doc = DocumentData {
            lang: locale,
            title: metadata.as_ref().map_or(FALLBACK_TITLE, |m| m.title.as_str()),
            description: metadata
                .as_ref()
                .map_or(FALLBACK_DESCRIPTION, |m| m.description.as_str()),
            image: metadata.as_ref().and_then(|m| m.image.as_ref()),
            languages,
            body: &body,
        };
        Ok(render_document(&doc))
    }

    fn render_sections(&self, sections: &[Entry], locale: &str) -> Result<String, RenderError> {
        let ctx = RenderContext {
            resolver: &self.resolver,
            locale,
        };
        let rendered: Vec<_> = sections
            .par_iter()
            .map(|section| dispatch(section, &ctx))
            .collect();

        let mut body = String::new();
        for (section, result) in sections.iter().zip(rendered) {
            match result {
                None => {}
                Some(Ok(html)) => body.push_str(&html),
                Some(Err(source)) => {
                    let section_type = section.text("type").unwrap_or_default();
                    match self.section_errors {
                        SectionErrorPolicy::Placeholder => {
                            warn!(
                                section_id = section.id(),
                                section_type,
                                missing = source.is_not_found(),
                                error = %source,
                                "Section content unavailable, rendering placeholder"
                            );
                            body.push_str(&placeholder(section));
                        }
                        SectionErrorPolicy::Fail => {
                            return Err(RenderError::Section {
                                section_id: section.id().to_owned(),
                                section_type: section_type.to_owned(),
                                source,
                            });
                        }
                    }
                }
            }
        }
        Ok(body)
    }
}

fn placeholder(section: &Entry) -> String {
    format!(
        "<section class=\"section-unavailable\" data-section-type=\"{}\" data-section-id=\"{}\"></section>\n",
        escape_html(section.text("type").unwrap_or_default()),
        escape_html(section.id())
    )
}
