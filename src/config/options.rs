// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::loader::Source;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: Source,
    pub export: ExportOptions,
    pub scrape: ScrapeOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            export: ExportOptions::default(),
            scrape: ScrapeOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Folder the dated CSV is written into.
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    /// Parse GUI/CLI text into the output folder. Blank text → default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    /// Where the downloaded document is written.
    pub out_file: PathBuf,
    pub pause_ms: u64,
    /// Stop after this many pages (None = until an empty page).
    pub max_pages: Option<u32>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: SCRAPE_URL.to_string(),
            out_file: PathBuf::from(DEFAULT_SOURCE),
            pause_ms: REQUEST_PAUSE_MS,
            max_pages: None,
        }
    }
}
