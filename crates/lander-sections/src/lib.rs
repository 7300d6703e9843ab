//! Section rendering for Lander landing pages.
//!
//! A landing page is an ordered list of section entries. Each section names
//! its kind in a `type` field and links to a content entry holding the
//! actual copy. This crate maps every section to HTML:
//!
//! - [`SectionType`] is the closed set of section kinds
//! - [`dispatch`] fetches a section's content and runs its renderer
//! - [`PageRenderer`] renders all sections of a page concurrently and wraps
//!   them in a full HTML document
//!
//! Output is plain HTML carrying utility class names; no stylesheet is
//! produced here.

mod dispatch;
mod html;
mod page;
mod renderers;
mod section_type;
mod spacing;
mod template;

pub use dispatch::{RenderContext, dispatch};
pub use html::escape_html;
pub use page::{PageRenderer, RenderError};
pub use section_type::SectionType;
