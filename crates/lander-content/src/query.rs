//! Entry query builder.

/// Query against the `entries` endpoint.
///
/// Built with chained setters and turned into URL parameters by
/// [`EntryQuery::to_params`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryQuery {
    /// Content type ID filter (`content_type`).
    pub content_type: Option<String>,
    /// Field equality predicates (`fields.<name>=<value>`).
    pub field_filters: Vec<(String, String)>,
    /// Entry ID filter (`sys.id`).
    pub sys_id: Option<String>,
    /// Field projection (`select`).
    pub select: Vec<String>,
    /// Link expansion depth (`include`).
    pub include: Option<u32>,
    /// Maximum number of items (`limit`).
    pub limit: Option<u32>,
    /// Locale code (`locale`).
    pub locale: Option<String>,
}

/// Link depth the API uses when `include` is not given.
const DEFAULT_INCLUDE: u32 = 1;

impl EntryQuery {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a content type.
    #[must_use]
    pub fn content_type(mut self, id: impl Into<String>) -> Self {
        self.content_type = Some(id.into());
        self
    }

    /// Require `fields.<name>` to equal `value`.
    #[must_use]
    pub fn field_eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_filters.push((name.into(), value.into()));
        self
    }

    /// Restrict to a single entry ID.
    #[must_use]
    pub fn sys_id(mut self, id: impl Into<String>) -> Self {
        self.sys_id = Some(id.into());
        self
    }

    /// Project the given paths (e.g. `fields.sections`).
    #[must_use]
    pub fn select<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Set the link expansion depth.
    #[must_use]
    pub fn include(mut self, depth: u32) -> Self {
        self.include = Some(depth);
        self
    }

    /// Limit the number of items.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request field values in the given locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Effective link expansion depth.
    #[must_use]
    pub fn include_depth(&self) -> u32 {
        self.include.unwrap_or(DEFAULT_INCLUDE)
    }

    /// URL query parameters.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(content_type) = &self.content_type {
            params.push(("content_type".to_owned(), content_type.clone()));
        }
        for (name, value) in &self.field_filters {
            params.push((format!("fields.{name}"), value.clone()));
        }
        if let Some(id) = &self.sys_id {
            params.push(("sys.id".to_owned(), id.clone()));
        }
        if !self.select.is_empty() {
            params.push(("select".to_owned(), self.select.join(",")));
        }
        if let Some(include) = self.include {
            params.push(("include".to_owned(), include.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(locale) = &self.locale {
            params.push(("locale".to_owned(), locale.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_params() {
        let query = EntryQuery::new()
            .content_type("landingPage")
            .field_eq("slug", "home")
            .select(["fields.sections"])
            .include(2)
            .limit(1)
            .locale("es");

        let params = query.to_params();
        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("content_type", "landingPage"),
                ("fields.slug", "home"),
                ("select", "fields.sections"),
                ("include", "2"),
                ("limit", "1"),
                ("locale", "es"),
            ]
        );
    }

    #[test]
    fn test_empty_query() {
        let query = EntryQuery::new();
        assert!(query.to_params().is_empty());
        assert_eq!(query.include_depth(), 1);
    }

    #[test]
    fn test_select_joins_paths() {
        let query = EntryQuery::new().select(["fields.title", "fields.slug"]);
        assert_eq!(
            query.to_params(),
            vec![("select".to_owned(), "fields.title,fields.slug".to_owned())]
        );
    }
}
