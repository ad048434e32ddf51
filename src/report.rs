//! Grouping and counting over issue records.
//!
//! Used by the text commands for their summaries and by the dashboard for
//! every chart on the analysis tab.

use std::io::{self, Write};

use crate::api::IssueRecord;

/// Insertion-ordered counts keyed by a string value.
///
/// Keys appear in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every value yielded by the iterator.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::new();
        for value in values {
            tally.add(value);
        }
        tally
    }

    /// Increment the count for `key`.
    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    /// Get the count for `key`, zero if never seen.
    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Iterate over `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Largest single count, zero when empty.
    pub fn max(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// Status counts for one issue type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBreakdown {
    /// The issue type name.
    pub issue_type: String,
    /// Counts per status for this type.
    pub statuses: Tally,
}

/// Count issues by status.
pub fn count_by_status(issues: &[IssueRecord]) -> Tally {
    Tally::from_values(issues.iter().map(|i| i.status.as_str()))
}

/// Count issues by priority.
pub fn count_by_priority(issues: &[IssueRecord]) -> Tally {
    Tally::from_values(issues.iter().map(|i| i.priority.as_str()))
}

/// Count issues by status within each type.
pub fn count_by_type_and_status(issues: &[IssueRecord]) -> Vec<TypeBreakdown> {
    let mut breakdown: Vec<TypeBreakdown> = Vec::new();

    for issue in issues {
        match breakdown
            .iter_mut()
            .find(|b| b.issue_type == issue.issue_type)
        {
            Some(entry) => entry.statuses.add(&issue.status),
            None => breakdown.push(TypeBreakdown {
                issue_type: issue.issue_type.clone(),
                statuses: Tally::from_values([issue.status.as_str()]),
            }),
        }
    }

    breakdown
}

/// Write the status breakdown block used by the text commands.
pub fn write_status_breakdown<W: Write>(out: &mut W, statuses: &Tally) -> io::Result<()> {
    writeln!(out, "Status breakdown:")?;
    for (status, count) in statuses.iter() {
        writeln!(out, "  - {}: {}", status, count)?;
    }
    Ok(())
}
