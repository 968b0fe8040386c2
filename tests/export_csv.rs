// tests/export_csv.rs
use std::fs;
use std::path::PathBuf;

use brainport_jobs::export::{export_file_name, to_csv, write_export};
use brainport_jobs::JobRecord;
use chrono::NaiveDate;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("brainport_jobs_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn job(title: &str, company: &str) -> JobRecord {
    JobRecord {
        title: Some(title.into()),
        company: Some(company.into()),
        ..JobRecord::default()
    }
}

#[test]
fn empty_list_produces_nothing() {
    let none: Vec<JobRecord> = Vec::new();
    assert_eq!(to_csv(&none).unwrap(), None);

    let dir = tmp_dir("empty_export");
    assert_eq!(write_export(&dir, &none, date()).unwrap(), None);
    assert!(!dir.exists(), "no-op export must not create the folder");
}

#[test]
fn header_then_one_row_per_record_in_order() {
    let jobs = vec![job("B", "Second"), job("A", "First"), job("C", "Third")];
    let csv = to_csv(&jobs).unwrap().unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), jobs.len() + 1);
    assert_eq!(lines[0], "Title,Company,Location,Description,Date,URL");
    assert_eq!(lines[1], r#""B","Second","","","","""#);
    assert_eq!(lines[2], r#""A","First","","","","""#);
    assert_eq!(lines[3], r#""C","Third","","","","""#);
}

#[test]
fn quotes_are_doubled() {
    let jobs = vec![job(r#"He said "hi""#, "Acme, Inc.")];
    let csv = to_csv(&jobs).unwrap().unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.starts_with(r#""He said ""hi""","Acme, Inc.","#));
}

#[test]
fn absent_fields_export_as_empty_cells() {
    let jobs = vec![JobRecord::default()];
    let csv = to_csv(&jobs).unwrap().unwrap();
    assert_eq!(csv.lines().nth(1).unwrap(), r#""","","","","","""#);
}

#[test]
fn multiline_cell_stays_one_record() {
    let mut j = job("Dev", "X");
    j.description = Some("line one\nline two".into());
    let csv = to_csv([&j]).unwrap().unwrap();

    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    let recs: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(recs.len(), 1);
    assert_eq!(&recs[0][3], "line one\nline two");
}

#[test]
fn file_name_pattern() {
    assert_eq!(export_file_name(date()), "brainport_jobs_export_2024-03-09.csv");
}

#[test]
fn write_export_creates_dated_file() {
    let dir = tmp_dir("write_export");
    let jobs = vec![job("Engineer", "Acme")];
    let path = write_export(&dir, &jobs, date()).unwrap().unwrap();

    assert_eq!(path, dir.join("brainport_jobs_export_2024-03-09.csv"));
    let s = fs::read_to_string(&path).unwrap();
    assert_eq!(s, "Title,Company,Location,Description,Date,URL\n\"Engineer\",\"Acme\",\"\",\"\",\"\",\"\"");
}
