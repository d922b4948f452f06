//! Loading TLD tables from JSON files outside the compiled data.
//!
//! The compiled table is checked by the build script. Data supplied at
//! runtime gets the same checks here before a [`TldTable`] is built.

use crate::{errors::TldError, table::TldTable, types::TldRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{collections::HashSet, fs, path::Path};
use tracing::info;

static CREATED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}(-\d{2}-\d{2})?$").expect("valid created date pattern"));

/// Load a table from a JSON file in the `data/tlds.json` format.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TldTable, TldError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let table = load_from_str(&source)?;
    info!("Loaded {} TLD records from {}", table.len(), path.display());
    Ok(table)
}

/// Parse and check a JSON array of records.
pub fn load_from_str(source: &str) -> Result<TldTable, TldError> {
    let records: Vec<TldRecord> = serde_json::from_str(source)?;
    check_records(&records)?;
    Ok(TldTable::from_records(records))
}

/// Check the table invariants over a batch of records.
pub fn check_records(records: &[TldRecord]) -> Result<(), TldError> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        check_record(record)?;
        if !seen.insert(record.tld.as_str()) {
            return Err(TldError::invalid(&record.tld, "duplicate key"));
        }
    }

    Ok(())
}

fn check_record(record: &TldRecord) -> Result<(), TldError> {
    let tld = record.tld.as_str();

    if tld.len() < 2 || !tld.starts_with('.') {
        return Err(TldError::invalid(tld, "key must start with '.' followed by a label"));
    }
    if tld.trim() != tld || tld.to_lowercase() != tld {
        return Err(TldError::invalid(tld, "key must be trimmed and lowercase"));
    }

    if record.has_emoji_flag {
        let valid_code = record
            .country_code
            .as_deref()
            .is_some_and(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()));
        if !valid_code {
            return Err(TldError::invalid(tld, "emoji flag requires a two-letter country code"));
        }
    }

    // Shape only, the calendar is not checked
    if let Some(date) = record.created_date.as_deref() {
        if !CREATED_DATE.is_match(date) {
            return Err(TldError::invalid(tld, format!("created date {:?} is not YYYY or YYYY-MM-DD", date)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tld: &str, country_code: Option<&str>, created: Option<&str>, flag: bool) -> serde_json::Value {
        serde_json::json!({
            "tld": tld,
            "type": "ccTLD",
            "registry": null,
            "countryCode": country_code,
            "status": "active",
            "createdDate": created,
            "idnSupport": null,
            "hasEmojiFlag": flag,
        })
    }

    fn load(entries: Vec<serde_json::Value>) -> Result<TldTable, TldError> {
        load_from_str(&serde_json::Value::Array(entries).to_string())
    }

    #[test]
    fn test_load_valid_records() {
        let table = load(vec![
            entry(".de", Some("DE"), Some("1986-11-05"), true),
            entry(".fr", Some("FR"), Some("1986"), true),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.emoji_flag("fr").as_deref(), Some("\u{1F1EB}\u{1F1F7}"));
    }

    #[test]
    fn test_rejects_non_canonical_key() {
        for key in ["de", ".DE", " .de", "."] {
            let result = load(vec![entry(key, Some("DE"), None, true)]);
            assert!(matches!(result, Err(TldError::InvalidRecord { .. })), "key {:?}", key);
        }
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = load(vec![
            entry(".de", Some("DE"), None, true),
            entry(".de", Some("DE"), None, true),
        ]);
        assert!(matches!(result, Err(TldError::InvalidRecord { reason, .. }) if reason == "duplicate key"));
    }

    #[test]
    fn test_rejects_flag_without_code() {
        assert!(load(vec![entry(".xx", None, None, true)]).is_err());
        assert!(load(vec![entry(".xx", Some("X1"), None, true)]).is_err());
        assert!(load(vec![entry(".xx", Some("XXX"), None, true)]).is_err());
        // A code without the flag marker is fine
        assert!(load(vec![entry(".xx", Some("X1"), None, false)]).is_ok());
    }

    #[test]
    fn test_created_date_shape() {
        assert!(load(vec![entry(".de", Some("DE"), Some("1986-13-45"), true)]).is_ok());
        assert!(load(vec![entry(".de", Some("DE"), Some("86"), true)]).is_err());
        assert!(load(vec![entry(".de", Some("DE"), Some("1986/11/05"), true)]).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_from_str("{not json"), Err(TldError::Json(_))));
        assert!(matches!(load_from_str(r#"{"tld": ".de"}"#), Err(TldError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_path("/definitely/not/here/tlds.json");
        assert!(matches!(result, Err(TldError::Io(_))));
    }
}
