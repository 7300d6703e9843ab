//! Per-item results of provisioning runs.

use std::collections::BTreeMap;
use std::fmt;

/// What happened to one content type or entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Created (and published, for content types).
    Created,
    /// Updated and republished.
    Updated,
    /// Published.
    Published,
    /// Unpublished.
    Unpublished,
    /// Nothing to do.
    Unchanged,
    /// Left alone, with the reason.
    Skipped(String),
    /// Failed, with the error message.
    Failed(String),
}

impl Outcome {
    /// Whether the item failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
            Self::Published => f.write_str("published"),
            Self::Unpublished => f.write_str("unpublished"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Result for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemReport {
    /// Content type the item belongs to (its own ID for content types).
    pub group: String,
    /// Item ID.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// What happened.
    pub outcome: Outcome,
}

/// Results of one provisioning run, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Item results.
    pub items: Vec<ItemReport>,
}

impl Report {
    pub(crate) fn push(
        &mut self,
        group: &str,
        id: &str,
        label: &str,
        outcome: Outcome,
    ) {
        self.items.push(ItemReport {
            group: group.to_owned(),
            id: id.to_owned(),
            label: label.to_owned(),
            outcome,
        });
    }

    /// Number of failed items.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_failure()).count()
    }

    /// Number of items that ended with `outcome`.
    #[must_use]
    pub fn count(&self, outcome: &Outcome) -> usize {
        self.items.iter().filter(|i| &i.outcome == outcome).count()
    }

    /// Items grouped by content type, groups sorted by name.
    #[must_use]
    pub fn groups(&self) -> BTreeMap<&str, Vec<&ItemReport>> {
        let mut groups: BTreeMap<&str, Vec<&ItemReport>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.group.as_str()).or_default().push(item);
        }
        groups
    }

    /// Whether nothing was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
