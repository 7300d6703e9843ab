//! Content access for Lander.
//!
//! This crate reads landing-page content from the Contentful Content
//! Delivery API. It provides:
//!
//! - [`ContentSource`] trait abstracting entry queries
//! - [`ContentClient`], the HTTP implementation backed by a shared `ureq` agent
//! - [`ContentResolver`], the page-level lookups used by the renderers
//! - [`MockContentSource`] for testing (behind `mock` feature flag)
//!
//! Links in query responses are replaced by the included entries and assets
//! up to the requested depth. Links that cannot be resolved stay as bare
//! links and every typed accessor on [`Entry`] treats them as absent.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lander_content::{ContentClient, ContentResolver};
//!
//! let client = ContentClient::new(&config.require_delivery()?);
//! let resolver = ContentResolver::new(Arc::new(client));
//! for section in resolver.landing_page_sections("home", "en-US") {
//!     println!("{}", section.text("type").unwrap_or_default());
//! }
//! ```

mod client;
mod error;
mod links;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod model;
mod query;
mod resolver;
mod source;

pub use client::ContentClient;
pub use error::ContentError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentSource;
pub use model::{
    Asset, AssetFields, Entry, EntryCollection, FileDetails, FileInfo, ImageSize, Link, Sys,
    absolute_url,
};
pub use query::EntryQuery;
pub use resolver::{ContentResolver, PageMetadata};
pub use source::ContentSource;
