// src/scrape.rs
//! Downloader for the Brainport Eindhoven vacancy feed → `jobs.json`.
//!
//! The endpoint is paginated JSON (`{"jobs": [...]}` per page). Pages are
//! fetched from 1 upward until one comes back without jobs. A failing page
//! ends the run; whatever was collected so far is still written. If the very
//! first page fails nothing is written and the error is returned.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use chrono::Local;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Value};
use thiserror::Error;

use crate::config::consts::*;
use crate::config::options::ScrapeOptions;
use crate::core::sanitize::{date_part, normalize_ws};
use crate::export::ensure_directory;
use crate::progress::Progress;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("failed to decode JSON, the server may have blocked the request or changed the format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One cleaned job as written to `jobs.json`. Pass-through fields keep the
/// JSON value the feed sent (often `null`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrapedJob {
    pub title: Value,
    pub company: Value,
    pub location: Value,
    pub province: Value,
    pub region: Value,
    pub date: String,
    pub language: Value,
    pub featured: Value,
    pub url: Value,
    pub description: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrapedDocument {
    pub last_updated: String,
    pub jobs: Vec<ScrapedJob>,
}

impl ScrapedDocument {
    /// Stamp with the current local time (`%Y-%m-%d %H:%M:%S`).
    pub fn now(jobs: Vec<ScrapedJob>) -> Self {
        Self {
            last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            jobs,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrapeSummary {
    pub pages: u32,
    pub jobs: usize,
    pub path: PathBuf,
}

fn get(obj: &Map<String, Value>, key: &str) -> Value {
    obj.get(key).cloned().unwrap_or(Value::Null)
}

/// `date` arrives either as `{"date": "2024-05-01 00:00:00.000000", ...}` or as
/// a plain string; keep the calendar part.
fn clean_date(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::Object(o)) => o
            .get("date")
            .and_then(Value::as_str)
            .map(|s| date_part(s).to_string())
            .unwrap_or_default(),
        Some(Value::String(s)) => date_part(s).to_string(),
        _ => String::new(),
    }
}

fn clean_job(obj: &Map<String, Value>) -> ScrapedJob {
    let location_part = |key: &str| {
        obj.get("locations")
            .and_then(Value::as_object)
            .and_then(|locs| locs.get(key).cloned())
            .unwrap_or_else(|| Value::String(String::new()))
    };

    let description = match obj.get("description") {
        Some(Value::String(s)) if !s.is_empty() => Value::String(normalize_ws(s)),
        Some(v) => v.clone(),
        None => Value::String(String::new()),
    };

    ScrapedJob {
        title: get(obj, "title"),
        company: get(obj, "company"),
        location: get(obj, "location_name"),
        province: location_part(SCRAPE_PROVINCE_KEY),
        region: location_part(SCRAPE_REGION_KEY),
        date: clean_date(obj.get("date")),
        language: get(obj, "language"),
        featured: get(obj, "featured"),
        url: get(obj, "uri"),
        description,
    }
}

/// Parse and clean one page of the feed. A page without a `jobs` array is an
/// empty page (end of feed).
pub fn parse_page(body: &[u8]) -> Result<Vec<ScrapedJob>, serde_json::Error> {
    let data: Value = serde_json::from_slice(body)?;
    let jobs = match data.get("jobs") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(clean_job)
            .collect(),
        _ => Vec::new(),
    };
    Ok(jobs)
}

fn build_client() -> Result<Client, ScrapeError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(SCRAPE_TIMEOUT_SECS))
        .build()?)
}

fn fetch_page(client: &Client, opts: &ScrapeOptions, page: u32) -> Result<Vec<ScrapedJob>, ScrapeError> {
    let resp = client
        .get(&opts.base_url)
        .query(SCRAPE_PARAMS)
        .query(&[(SCRAPE_PAGE_PARAM, page)])
        .send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status(status.as_u16()));
    }
    let body = resp.bytes()?;
    Ok(parse_page(&body)?)
}

/// Write `doc` as pretty JSON (4-space indent, non-ASCII kept as UTF-8).
pub fn write_document(path: &Path, doc: &ScrapedDocument) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut ser)?;
    out.flush()?;
    Ok(())
}

/// Download every page and write the document to `opts.out_file`.
pub fn run(opts: &ScrapeOptions, mut progress: Option<&mut dyn Progress>) -> Result<ScrapeSummary, ScrapeError> {
    let client = build_client()?;
    let mut all_jobs: Vec<ScrapedJob> = Vec::new();
    let mut page: u32 = 1;
    let mut pages_done: u32 = 0;
    let mut failure: Option<ScrapeError> = None;

    logf!("Scrape: Begin url={}", opts.base_url);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.max_pages);
        p.log("Starting download…");
    }

    loop {
        if opts.max_pages.is_some_and(|max| page > max) {
            logd!("Scrape: page limit reached ({})", page - 1);
            break;
        }

        match fetch_page(&client, opts, page) {
            Ok(jobs) if jobs.is_empty() => {
                logf!("Scrape: no more jobs at page {}, finishing", page);
                break;
            }
            Ok(jobs) => {
                let n = jobs.len();
                all_jobs.extend(jobs);
                pages_done += 1;
                logf!("Scrape: page {} ({} jobs), total={}", page, n, all_jobs.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(page, n, all_jobs.len());
                }
                page += 1;
                thread::sleep(Duration::from_millis(opts.pause_ms));
            }
            Err(e) => {
                loge!("Scrape: error fetching page {}: {}", page, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Error fetching page {}: {}", page, e));
                }
                failure = Some(e);
                break;
            }
        }
    }

    // Nothing downloaded: keep the existing file.
    if let (0, Some(e)) = (pages_done, failure) {
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Err(e);
    }

    let doc = ScrapedDocument::now(all_jobs);
    let res = write_document(&opts.out_file, &doc);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res?;

    logf!("Scrape: saved {} jobs → {}", doc.jobs.len(), opts.out_file.display());
    Ok(ScrapeSummary {
        pages: pages_done,
        jobs: doc.jobs.len(),
        path: opts.out_file.clone(),
    })
}
