//! Colored terminal output for operators.
//!
//! Everything goes to stderr; logs share the stream through
//! `tracing-subscriber`.

use std::error::Error;

use console::{Style, Term};
use lander_provision::{Outcome, Report};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    heading: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn line(&self, style: Option<&Style>, msg: &str) {
        let _ = match style {
            Some(style) => self.term.write_line(&style.apply_to(msg).to_string()),
            None => self.term.write_line(msg),
        };
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        self.line(None, msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(Some(&self.green), msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(Some(&self.yellow), msg);
    }

    /// Print an error and its causes (red).
    pub(crate) fn error(&self, err: &dyn Error) {
        for line in error_lines(err) {
            self.line(Some(&self.red), &line);
        }
    }

    /// Print a provisioning report grouped by content type, then its summary.
    pub(crate) fn report(&self, title: &str, report: &Report) {
        self.line(Some(&self.heading), &format!("== {title} =="));
        for (group, items) in report.groups() {
            self.line(Some(&self.heading), group);
            for item in items {
                let text = format!("  {} ({}): {}", item.label, item.id, item.outcome);
                let style = match item.outcome {
                    Outcome::Failed(_) => &self.red,
                    Outcome::Skipped(_) | Outcome::Unchanged => &self.yellow,
                    _ => &self.green,
                };
                self.line(Some(style), &text);
            }
        }
        self.info(&summary(report));
    }
}

/// `Error: <message>` followed by one `caused by:` line per source whose
/// text the previous messages do not already include.
fn error_lines(err: &dyn Error) -> Vec<String> {
    let mut shown = err.to_string();
    let mut lines = vec![format!("Error: {shown}")];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !shown.contains(&text) {
            lines.push(format!("  caused by: {text}"));
            shown.push_str(&text);
        }
        source = cause.source();
    }
    lines
}

/// One-line count of outcomes, e.g. `3 items: 2 published, 1 failed`.
fn summary(report: &Report) -> String {
    if report.is_empty() {
        return "Nothing to do".to_owned();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in &report.items {
        let key = match &item.outcome {
            Outcome::Skipped(_) => "skipped".to_owned(),
            Outcome::Failed(_) => "failed".to_owned(),
            other => other.to_string(),
        };
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    let parts: Vec<String> = counts
        .into_iter()
        .map(|(key, n)| format!("{n} {key}"))
        .collect();
    format!("{} items: {}", report.items.len(), parts.join(", "))
}
