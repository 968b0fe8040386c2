// tests/session_flow.rs
use brainport_jobs::{JobsDocument, Session};

const DOC: &str = r#"{
    "jobs": [
        {"title": "Engineer", "company": "Acme"},
        {"title": "Nurse", "company": "HealthCo"}
    ],
    "last_updated": "2024-01-01"
}"#;

#[test]
fn load_then_search_scenario() {
    let doc = JobsDocument::from_json(DOC).unwrap();
    let mut s = Session::from_document(doc);

    // initial view = full set
    assert_eq!(s.filtered_len(), 2);
    assert_eq!(s.status_line(), "Showing 2 of 2 jobs (Updated: 2024-01-01)");

    s.search("eng");
    let titles: Vec<&str> = s.filtered().map(|j| j.title()).collect();
    assert_eq!(titles, vec!["Engineer"]);
    assert_eq!(s.status_line(), "Showing 1 of 2 jobs (Updated: 2024-01-01)");

    // clearing the query restores everything, in order
    s.search("  ");
    let titles: Vec<&str> = s.filtered().map(|j| j.title()).collect();
    assert_eq!(titles, vec!["Engineer", "Nurse"]);
}

#[test]
fn export_follows_current_filter() {
    let mut s = Session::from_document(JobsDocument::from_json(DOC).unwrap());

    s.search("health");
    let csv = s.export_csv().unwrap().unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains(r#""Nurse","HealthCo""#));

    s.search("no such job");
    assert_eq!(s.export_csv().unwrap(), None);
}

#[test]
fn missing_timestamp_shows_unknown() {
    let s = Session::from_document(JobsDocument::from_json(r#"{"jobs":[]}"#).unwrap());
    assert_eq!(s.status_line(), "Showing 0 of 0 jobs (Updated: Unknown)");
    assert_eq!(s.last_updated(), None);
}

#[test]
fn blank_timestamp_shows_unknown() {
    let doc = JobsDocument::from_json(r#"{"jobs":[{"title":"A"}],"last_updated":""}"#).unwrap();
    let s = Session::from_document(doc);
    assert_eq!(s.status_line(), "Showing 1 of 1 jobs (Updated: Unknown)");
    assert_eq!(s.last_updated(), None);
}

#[test]
fn empty_session_is_empty() {
    let s = Session::empty();
    assert_eq!(s.full_len(), 0);
    assert_eq!(s.filtered_at(0), None);
    assert_eq!(s.export_csv().unwrap(), None);
}

#[test]
fn full_set_untouched_by_search() {
    let mut s = Session::from_document(JobsDocument::from_json(DOC).unwrap());
    let before = s.full().to_vec();
    s.search("nurse");
    assert_eq!(s.full(), before.as_slice());
    assert_eq!(s.row_ix(), &[1]);
}
