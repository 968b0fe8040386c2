// src/config/consts.rs

// Data source
pub const DEFAULT_SOURCE: &str = "jobs.json";
pub const LOAD_ERROR_MESSAGE: &str = "Error: Job data not found (jobs.json).";
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";
pub const PLACEHOLDER_URL: &str = "#";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "brainport_jobs_export_";
pub const EXPORT_HEADERS: [&str; 6] = ["Title", "Company", "Location", "Description", "Date", "URL"];

// Scrape
pub const SCRAPE_URL: &str =
    "https://brainporteindhoven.com/en/discover-brainport/work/current-tech-it-vacancies-in-brainport-eindhoven";
pub const SCRAPE_PAGE_PARAM: &str = "tx_brainportjobs_jobslist[page]";
pub const SCRAPE_PARAMS: &[(&str, &str)] = &[
    ("tx_brainportjobs_joblist[action]", "list"),
    ("tx_brainportjobs_joblist[controller]", "JobAjax"),
    ("type", "1594717109"),
    ("cHash", "8d5dd4d6a85579669ba415290168cc20"),
    ("tx_brainportjobs_jobslist[pageLimit]", "15"),
    ("tx_brainportjobs_jobslist[location_filter][]", "5"),
    ("tx_brainportjobs_jobslist[language_filter]", "en"),
];
pub const SCRAPE_PROVINCE_KEY: &str = "4";
pub const SCRAPE_REGION_KEY: &str = "5";
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const SCRAPE_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("brainport_jobs/", env!("CARGO_PKG_VERSION"));
