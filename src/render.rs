// src/render.rs
//! Display side of the pipeline: status line, table rows, HTML markup.

use std::fmt::Write as _;

use crate::config::consts::{PLACEHOLDER_URL, UNKNOWN_TIMESTAMP};
use crate::core::html::{escape, is_safe_href};
use crate::model::JobRecord;

/// "Showing {filtered} of {full} jobs (Updated: {ts})"
pub fn status_line(filtered: usize, full: usize, last_updated: Option<&str>) -> String {
    format!(
        "Showing {} of {} jobs (Updated: {})",
        filtered,
        full,
        last_updated.unwrap_or(UNKNOWN_TIMESTAMP)
    )
}

/// One table row ready for display. No field is ever missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    /// Link target; `#` when the record has no (usable) URL.
    pub url: &'a str,
}

impl<'a> JobRow<'a> {
    pub fn from_record(job: &'a JobRecord) -> Self {
        let url = match job.url() {
            "" => PLACEHOLDER_URL,
            u if !is_safe_href(u) => PLACEHOLDER_URL,
            u => u,
        };
        Self {
            title: job.title(),
            company: job.company(),
            location: job.location(),
            description: job.description(),
            date: job.date(),
            url,
        }
    }

    /// `false` for the placeholder link.
    pub fn has_link(&self) -> bool {
        self.url != PLACEHOLDER_URL
    }
}

/// Rows for a record list, in order.
pub fn rows<'a, I>(jobs: I) -> Vec<JobRow<'a>>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    jobs.into_iter().map(JobRow::from_record).collect()
}

/// `<tr>` markup for each record. Every interpolated value is escaped.
pub fn render_html<'a, I>(jobs: I) -> String
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let mut out = String::new();
    for row in rows(jobs) {
        out.push_str("<tr>");
        for cell in [row.title, row.company, row.location, row.description] {
            let cell = escape(cell);
            let _ = write!(out, "<td title=\"{cell}\">{cell}</td>");
        }
        let _ = write!(out, "<td>{}</td>", escape(row.date));
        let _ = write!(
            out,
            "<td><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"btn-view\">View</a></td>",
            escape(row.url)
        );
        out.push_str("</tr>\n");
    }
    out
}

/// Minimal standalone page around `render_html`, used by the CLI `--html`.
pub fn render_page<'a, I>(jobs: I, status: &str) -> String
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let body = render_html(jobs);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Brainport Jobs</title></head>\n<body>\n\
         <p id=\"stats\">{}</p>\n<table>\n<thead><tr><th>Title</th><th>Company</th><th>Location</th>\
         <th>Description</th><th>Date</th><th></th></tr></thead>\n<tbody>\n{}</tbody>\n</table>\n</body>\n</html>\n",
        escape(status),
        body
    )
}
