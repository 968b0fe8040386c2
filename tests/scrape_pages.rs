// tests/scrape_pages.rs
//
// Offline tests for the feed cleaner and the document writer.
use std::fs;
use std::net::TcpListener;

use brainport_jobs::config::options::ScrapeOptions;
use brainport_jobs::scrape::{self, parse_page, write_document, ScrapeError, ScrapedDocument};
use brainport_jobs::JobsDocument;
use serde_json::{json, Value};

const PAGE: &str = r#"{
    "jobs": [
        {
            "title": "Embedded Software Engineer",
            "company": "ASML",
            "location_name": "Veldhoven",
            "locations": {"4": "Noord-Brabant", "5": "Eindhoven region"},
            "date": {"date": "2024-05-01 00:00:00.000000", "timezone_type": 3},
            "language": "en",
            "featured": true,
            "uri": "https://brainporteindhoven.com/en/job/1",
            "description": "  Build the\n\nfuture   of lithography.  "
        },
        {
            "title": "Operator",
            "date": "2024-04-30 12:00:00",
            "locations": []
        }
    ]
}"#;

#[test]
fn cleans_jobs() {
    let jobs = parse_page(PAGE.as_bytes()).unwrap();
    assert_eq!(jobs.len(), 2);

    let a = &jobs[0];
    assert_eq!(a.title, json!("Embedded Software Engineer"));
    assert_eq!(a.location, json!("Veldhoven"));
    assert_eq!(a.province, json!("Noord-Brabant"));
    assert_eq!(a.region, json!("Eindhoven region"));
    assert_eq!(a.date, "2024-05-01");
    assert_eq!(a.featured, json!(true));
    assert_eq!(a.url, json!("https://brainporteindhoven.com/en/job/1"));
    assert_eq!(a.description, json!("Build the future of lithography."));

    let b = &jobs[1];
    assert_eq!(b.date, "2024-04-30");
    assert_eq!(b.company, Value::Null);
    assert_eq!(b.province, json!(""));
    assert_eq!(b.description, json!(""));
}

#[test]
fn empty_or_missing_jobs_ends_feed() {
    assert!(parse_page(br#"{"jobs": []}"#).unwrap().is_empty());
    assert!(parse_page(br#"{"other": 1}"#).unwrap().is_empty());
    assert!(parse_page(b"<html>captcha</html>").is_err());
}

#[test]
fn written_document_loads_back() {
    let jobs = parse_page(PAGE.as_bytes()).unwrap();
    let doc = ScrapedDocument::now(jobs);

    let mut p = std::env::temp_dir();
    p.push("brainport_jobs_scrape_out");
    p.push("jobs.json");
    write_document(&p, &doc).unwrap();

    let text = fs::read_to_string(&p).unwrap();
    assert!(text.contains("\n    \"last_updated\""), "4-space indent");

    let loaded = JobsDocument::from_json(&text).unwrap();
    assert_eq!(loaded.jobs.len(), 2);
    assert_eq!(loaded.last_updated.as_deref(), Some(doc.last_updated.as_str()));
    assert_eq!(loaded.jobs[0].location.as_deref(), Some("Veldhoven"));
    assert_eq!(loaded.jobs[0].date.as_deref(), Some("2024-05-01"));
    assert_eq!(loaded.jobs[1].company, None);
}

#[test]
fn failed_first_page_keeps_existing_file() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let mut out = std::env::temp_dir();
    out.push("brainport_jobs_scrape_keep");
    fs::create_dir_all(&out).unwrap();
    out.push("jobs.json");
    let previous = r#"{"jobs":[{"title":"Keep me"}],"last_updated":"2024-01-01"}"#;
    fs::write(&out, previous).unwrap();

    let opts = ScrapeOptions {
        base_url: format!("http://{}/feed", addr),
        out_file: out.clone(),
        pause_ms: 0,
        max_pages: Some(1),
    };
    let res = scrape::run(&opts, None);

    assert!(matches!(res, Err(ScrapeError::Http(_))), "got {res:?}");
    assert_eq!(fs::read_to_string(&out).unwrap(), previous);
}
