// src/export.rs
//! CSV export of the filtered view.
//!
//! Header row is fixed and unquoted; every data cell is quoted (inner quotes
//! doubled) regardless of content. Rows are joined with `\n`, no trailing
//! newline. An empty view exports nothing.

use std::{fs, io, path::{Path, PathBuf}};

use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::config::consts::{EXPORT_HEADERS, EXPORT_PREFIX};
use crate::model::JobRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CSV text for `jobs`, or `None` when there is nothing to export.
pub fn to_csv<'a, I>(jobs: I) -> Result<Option<String>, ExportError>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let mut jobs = jobs.into_iter().peekable();
    if jobs.peek().is_none() {
        return Ok(None);
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for job in jobs {
        wtr.write_record(job.cells())?;
    }
    let body = wtr.into_inner().map_err(|e| e.into_error())?;
    let body = String::from_utf8(body)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut out = EXPORT_HEADERS.join(",");
    out.push('\n');
    out.push_str(body.trim_end_matches('\n'));
    Ok(Some(out))
}

/// `brainport_jobs_export_YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.csv", EXPORT_PREFIX, date.format("%Y-%m-%d"))
}

/// Export date: the current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Write the export for `jobs` into `dir`.
/// Returns `Ok(None)` without touching the filesystem when `jobs` is empty.
pub fn write_export<'a, I>(dir: &Path, jobs: I, date: NaiveDate) -> Result<Option<PathBuf>, ExportError>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let Some(contents) = to_csv(jobs)? else {
        logd!("Export: nothing to export");
        return Ok(None);
    };

    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(export_file_name(date));
    fs::write(&path, contents)?;
    logf!("Export: OK → {}", path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
