// src/loader.rs
//! One-shot load of the jobs document from a file path or an HTTP(S) URL.
//!
//! No retry, no polling. The URL path has no request timeout: a load that
//! never resolves leaves the caller in its initial (empty) state.

use std::{fmt, fs, path::PathBuf, time::Duration};

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::{DEFAULT_SOURCE, LOAD_ERROR_MESSAGE, USER_AGENT};
use crate::model::JobsDocument;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// The fixed status-line text shown for any load failure.
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

/// Where the document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl Source {
    /// `http://` / `https://` → URL, anything else is a filesystem path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lc = t.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            Source::Url(t.to_string())
        } else {
            Source::Path(PathBuf::from(t))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

pub fn load(source: &Source) -> Result<JobsDocument, LoadError> {
    logd!("Load: Begin source={}", source);
    let bytes = match source {
        Source::Path(p) => fs::read(p)?,
        Source::Url(u) => fetch(u)?,
    };
    let doc = JobsDocument::from_slice(&bytes)?;
    logf!(
        "Load: OK jobs={} last_updated={:?}",
        doc.jobs.len(),
        doc.last_updated
    );
    Ok(doc)
}

fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(resp.bytes()?.to_vec())
}
