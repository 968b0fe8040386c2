// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    pages: u32,
    jobs: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, pages: 0, jobs: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page_done(&mut self, page: u32, _jobs_in_page: usize, total_jobs: usize) {
        self.pages += 1;
        self.jobs = total_jobs;
        self.set_status(format!("Fetched page {} ({} jobs so far)", page, total_jobs));
    }
    fn finish(&mut self) {
        if self.pages == 0 {
            self.set_status("Scrape complete (no pages)");
        } else {
            self.set_status(format!("Scrape complete ({} pages, {} jobs)", self.pages, self.jobs));
        }
    }
}
