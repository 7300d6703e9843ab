//! Contentful provisioning for Lander.
//!
//! Operator-side counterpart of `lander-content`: writes the landing page
//! content model and example content through the Content Management API.
//!
//! - [`ManagementApi`] trait and its HTTP implementation [`ManagementClient`]
//! - [`schema`]: built-in content types, apply, localize and export
//! - [`seed()`]: example landing page in English and Spanish
//! - [`publish_entries`] / [`unpublish_entries`] for bulk state changes
//!
//! Writes use optimistic concurrency: every mutation carries the version the
//! caller last saw, and version conflicts are retried per [`RetryPolicy`].

mod api;
mod bulk;
mod client;
mod error;
#[cfg(test)]
mod fake;
mod report;
mod retry;
pub mod schema;
mod seed;
mod types;

pub use api::ManagementApi;
pub use bulk::{Selection, publish_entries, unpublish_entries};
pub use client::ManagementClient;
pub use error::ProvisionError;
pub use report::{ItemReport, Outcome, Report};
pub use retry::RetryPolicy;
pub use seed::{SeedOptions, SeedOutcome, TRANSLATION_LOCALE, seed};
pub use types::{
    ContentType, EntryFilter, Field, Items, ManagedEntry, PublishState, SOURCE_LOCALE,
};
