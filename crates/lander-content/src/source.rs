//! Content source trait.

use crate::error::ContentError;
use crate::model::{Entry, EntryCollection};
use crate::query::EntryQuery;

/// Source of content entries.
///
/// Implemented by [`ContentClient`](crate::ContentClient) for the Delivery API
/// and by `MockContentSource` for tests. Implementations must be safe to
/// share between threads; section fetches run concurrently.
pub trait ContentSource: Send + Sync {
    /// Run an entry query, resolving links to `query.include_depth()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or rejects the query.
    fn entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError>;

    /// Fetch a single entry by ID.
    ///
    /// Runs as a list query on `sys.id` so that linked objects are included.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no entry has this ID.
    fn entry(&self, id: &str, locale: &str, include: u32) -> Result<Entry, ContentError> {
        let query = EntryQuery::new()
            .sys_id(id)
            .locale(locale)
            .include(include)
            .limit(1);
        self.entries(&query)?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFound(id.to_owned()))
    }
}
