// src/session.rs
//! Session state: the full job set (set once per successful load), the
//! current filtered selection and the last-updated timestamp.
//!
//! The filtered set is stored as row indexes into the full set, so a search
//! never copies records. It equals the full set until the first non-empty
//! query.

use crate::export::{self, ExportError};
use crate::filter::{matching_rows, Query};
use crate::model::{JobRecord, JobsDocument};
use crate::render::{self, JobRow};

#[derive(Clone, Debug, Default)]
pub struct Session {
    full: Vec<JobRecord>,
    /// Positions of kept rows in `full`
    row_ix: Vec<usize>,
    last_updated: Option<String>,
    query: Query,
}

impl Session {
    /// Empty session: nothing loaded (initial state and state after a failed load).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Establish the session from a freshly loaded document.
    pub fn from_document(doc: JobsDocument) -> Self {
        let row_ix = (0..doc.jobs.len()).collect();
        Self {
            full: doc.jobs,
            row_ix,
            last_updated: doc.last_updated,
            query: Query::default(),
        }
    }

    /// Recompute the filtered selection for `raw_query`.
    pub fn search(&mut self, raw_query: &str) {
        self.query = Query::new(raw_query);
        self.row_ix = matching_rows(&self.full, &self.query);
        logd!(
            "Search: query={:?} kept={}/{}",
            self.query.as_str(),
            self.row_ix.len(),
            self.full.len()
        );
    }

    pub fn query(&self) -> &Query { &self.query }
    pub fn full(&self) -> &[JobRecord] { &self.full }
    pub fn full_len(&self) -> usize { self.full.len() }
    pub fn filtered_len(&self) -> usize { self.row_ix.len() }
    pub fn row_ix(&self) -> &[usize] { &self.row_ix }
    pub fn last_updated(&self) -> Option<&str> { self.last_updated.as_deref() }

    /// Filtered record by position in the current view.
    pub fn filtered_at(&self, i: usize) -> Option<&JobRecord> {
        self.row_ix.get(i).and_then(|&ix| self.full.get(ix))
    }

    pub fn filtered(&self) -> impl Iterator<Item = &JobRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.full.get(ix))
    }

    pub fn status_line(&self) -> String {
        render::status_line(self.filtered_len(), self.full_len(), self.last_updated())
    }

    pub fn rows(&self) -> Vec<JobRow<'_>> {
        render::rows(self.filtered())
    }

    /// CSV of the current filtered set; `None` when it is empty.
    pub fn export_csv(&self) -> Result<Option<String>, ExportError> {
        export::to_csv(self.filtered())
    }
}
