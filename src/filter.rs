// src/filter.rs
//! Substring search over the full job set.
//!
//! A record matches when the normalized query occurs in the lower-cased
//! title, company, location or description. Date and URL never match.
//! Order of the input is preserved; there is no ranking.

use std::borrow::Cow;

use crate::model::JobRecord;

/// Normalized search query (trimmed + lower-cased).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self { needle: raw.trim().to_lowercase() }
    }

    /// An empty query means "no filter".
    #[inline]
    pub fn is_empty(&self) -> bool { self.needle.is_empty() }

    pub fn as_str(&self) -> &str { &self.needle }

    pub fn matches(&self, job: &JobRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        job.searchable()
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .any(|v| v.to_lowercase().contains(&self.needle))
    }
}

/// Indexes (into `jobs`) of the rows kept by `query`, in input order.
pub fn matching_rows(jobs: &[JobRecord], query: &Query) -> Vec<usize> {
    if query.is_empty() {
        return (0..jobs.len()).collect();
    }
    jobs.iter()
        .enumerate()
        .filter(|(_, j)| query.matches(j))
        .map(|(i, _)| i)
        .collect()
}

/// Filter `jobs` by a raw query string.
///
/// An empty (or whitespace-only) query hands back the input untouched.
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], raw_query: &str) -> Cow<'a, [JobRecord]> {
    let query = Query::new(raw_query);
    if query.is_empty() {
        return Cow::Borrowed(jobs);
    }
    Cow::Owned(jobs.iter().filter(|j| query.matches(j)).cloned().collect())
}
