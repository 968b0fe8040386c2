// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages, if known.
    fn begin(&mut self, _total: Option<u32>) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been downloaded and cleaned.
    fn page_done(&mut self, _page: u32, _jobs_in_page: usize, _total_jobs: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
