//! Per-certificate report: one result per lint plus status counts.

use super::{LintResult, Status};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of results per status. Every status is present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    counts: BTreeMap<Status, usize>,
}

impl Summary {
    fn new() -> Self {
        Self {
            counts: Status::ALL.into_iter().map(|status| (status, 0)).collect(),
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn info_present(&self) -> bool {
        self.count(Status::Info) > 0
    }

    pub fn warnings_present(&self) -> bool {
        self.count(Status::Warn) > 0
    }

    pub fn errors_present(&self) -> bool {
        self.count(Status::Error) > 0
    }

    pub fn fatals_present(&self) -> bool {
        self.count(Status::Fatal) > 0
    }

    /// Total number of results counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Results of one certificate's evaluation, keyed by lint name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    results: BTreeMap<String, LintResult>,
    summary: Summary,
}

impl Report {
    /// Build a report from `(lint name, result)` pairs.
    ///
    /// If a name occurs more than once the first result is kept.
    pub fn aggregate(results: impl IntoIterator<Item = (String, LintResult)>) -> Self {
        let mut map = BTreeMap::new();
        for (name, result) in results {
            map.entry(name).or_insert(result);
        }

        let mut summary = Summary::new();
        for result in map.values() {
            *summary.counts.entry(result.status).or_insert(0) += 1;
        }

        Self {
            results: map,
            summary,
        }
    }

    pub fn get(&self, name: &str) -> Option<&LintResult> {
        self.results.get(name)
    }

    /// Results in lint-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LintResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    pub fn results(&self) -> &BTreeMap<String, LintResult> {
        &self.results
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Worst status in the report, if any.
    pub fn worst(&self) -> Option<Status> {
        self.results.values().map(|result| result.status).max()
    }
}
