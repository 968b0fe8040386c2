// src/model.rs
//! Job records and the `jobs.json` document shape.
//!
//! Parsing is lenient: the file is produced by a scraper over an external
//! site, so individual fields may carry the wrong JSON type. Those are coerced (string → kept, number → its text,
//! `true` → `"true"`, anything else → absent) instead of rejecting the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One job posting. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

impl JobRecord {
    /// Field value with the empty-string default applied.
    #[inline]
    pub fn field(v: &Option<String>) -> &str {
        v.as_deref().unwrap_or("")
    }

    pub fn title(&self) -> &str { Self::field(&self.title) }
    pub fn company(&self) -> &str { Self::field(&self.company) }
    pub fn location(&self) -> &str { Self::field(&self.location) }
    pub fn description(&self) -> &str { Self::field(&self.description) }
    pub fn date(&self) -> &str { Self::field(&self.date) }
    pub fn url(&self) -> &str { Self::field(&self.url) }

    /// Cells in export/display column order: Title, Company, Location,
    /// Description, Date, URL.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.title(),
            self.company(),
            self.location(),
            self.description(),
            self.date(),
            self.url(),
        ]
    }

    /// The four fields that take part in search.
    pub fn searchable(&self) -> [Option<&str>; 4] {
        [
            self.title.as_deref(),
            self.company.as_deref(),
            self.location.as_deref(),
            self.description.as_deref(),
        ]
    }
}

/// Top-level document: `{ "jobs": [...], "last_updated": "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct JobsDocument {
    #[serde(default, deserialize_with = "lenient_jobs")]
    pub jobs: Vec<JobRecord>,
    /// Empty text counts as never set.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<String>,
}

impl JobsDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

fn coerce_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_text(Value::deserialize(de)?))
}

fn lenient_timestamp<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(de)?.filter(|s| !s.is_empty()))
}

fn lenient_jobs<'de, D>(de: D) -> Result<Vec<JobRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(de)? else {
        return Ok(Vec::new());
    };
    let jobs = items
        .into_iter()
        .map(|item| match item {
            // Every field is lenient, so an object always converts.
            Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
            _ => JobRecord::default(),
        })
        .collect();
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_jobs_is_empty() {
        let doc = JobsDocument::from_json(r#"{"last_updated":"2024-01-01"}"#).unwrap();
        assert!(doc.jobs.is_empty());
        assert_eq!(doc.last_updated.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn empty_timestamp_is_unset() {
        let doc = JobsDocument::from_json(r#"{"jobs":[],"last_updated":""}"#).unwrap();
        assert_eq!(doc.last_updated, None);
    }

    #[test]
    fn non_array_jobs_is_empty() {
        let doc = JobsDocument::from_json(r#"{"jobs":{"title":"x"}}"#).unwrap();
        assert!(doc.jobs.is_empty());
        let doc = JobsDocument::from_json(r#"{"jobs":null}"#).unwrap();
        assert!(doc.jobs.is_empty());
        assert_eq!(doc.last_updated, None);
    }

    #[test]
    fn wrong_field_types_are_coerced() {
        let doc = JobsDocument::from_json(
            r#"{"jobs":[{"title":42,"company":null,"location":["a"],"date":true,"url":false,"extra":1}, 7]}"#,
        )
        .unwrap();
        assert_eq!(doc.jobs.len(), 2);
        let j = &doc.jobs[0];
        assert_eq!(j.title.as_deref(), Some("42"));
        assert_eq!(j.company, None);
        assert_eq!(j.location, None);
        assert_eq!(j.date.as_deref(), Some("true"));
        assert_eq!(j.url, None);
        assert_eq!(doc.jobs[1], JobRecord::default());
    }

    #[test]
    fn cells_default_to_empty() {
        let j = JobRecord::default();
        assert_eq!(j.cells(), [""; 6]);
    }
}
