//! Invariant checks over the table compiled from data/tlds.json

use tld_info::{SearchOptions, TldTable, TldType};

#[test]
fn test_keys_are_canonical() {
    let table = TldTable::compiled();
    for record in &table {
        assert!(record.tld.starts_with('.'), "{}", record.tld);
        assert_eq!(record.tld, record.tld.to_lowercase());
        assert_eq!(tld_info::normalize(&record.tld), record.tld);
    }
}

#[test]
fn test_every_record_looks_itself_up() {
    let table = TldTable::compiled();
    assert_eq!(table.tlds().count(), table.len());

    for record in &table {
        assert_eq!(table.lookup(&record.tld), Some(record));
        assert_eq!(table.lookup(&record.tld.to_uppercase()), Some(record));
        assert!(table.is_valid(record.tld.trim_start_matches('.')));
    }
}

#[test]
fn test_emoji_flag_invariant() {
    let table = TldTable::compiled();
    for record in &table {
        if record.has_emoji_flag {
            let code = record.country_code.as_deref().unwrap();
            assert_eq!(code.len(), 2, "{}", record.tld);
            assert!(code.chars().all(|c| c.is_ascii_alphabetic()), "{}", record.tld);
        }

        let flag = table.emoji_flag(&record.tld);
        let expected = record.kind == TldType::CountryCode && record.has_emoji_flag;
        assert_eq!(flag.is_some(), expected, "{}", record.tld);
    }
}

#[test]
fn test_created_dates_are_year_or_full_date() {
    let shape = regex::Regex::new(r"^\d{4}(-\d{2}-\d{2})?$").unwrap();
    let table = TldTable::compiled();
    for record in &table {
        if let Some(date) = record.created_date.as_deref() {
            assert!(shape.is_match(date), "{}: {}", record.tld, date);
        }
    }
}

#[test]
fn test_filters_never_mismatch() {
    let table = TldTable::compiled();

    for kind in ["gTLD", "cctld", "STLD", "infrastructure", "test"] {
        let results = table.filter_by_type(kind);
        assert!(!results.is_empty(), "{}", kind);
        assert!(results.iter().all(|r| r.kind.as_str().eq_ignore_ascii_case(kind)));
    }

    for code in ["de", "JP", "ru"] {
        let results = table.filter_by_country(code);
        assert!(!results.is_empty(), "{}", code);
        assert!(results.iter().all(|r| r.kind == TldType::CountryCode));
        assert!(results
            .iter()
            .all(|r| r.country_code.as_deref().unwrap().eq_ignore_ascii_case(code)));
    }

    // .ru and its IDN counterpart share a country code
    assert_eq!(table.filter_by_country("RU").len(), 2);
}

#[test]
fn test_known_entries() {
    let table = TldTable::compiled();

    let com = table.lookup("COM").unwrap();
    assert_eq!(com.kind, TldType::Generic);
    assert_eq!(com.registry.as_deref(), Some("VeriSign Global Registry Services"));
    assert_eq!(com.country_code, None);

    let ai = table.lookup(".ai").unwrap();
    assert_eq!(ai.country_code.as_deref(), Some("AI"));
    assert_eq!(table.emoji_flag(".ai").as_deref(), Some("\u{1F1E6}\u{1F1EE}"));

    let test = table.lookup(".test").unwrap();
    assert_eq!(test.kind, TldType::Test);
    assert_eq!(test.country_code, None);
}

#[test]
fn test_search_limit_returns_prefix() {
    let table = TldTable::compiled();
    let all = table.search("nic", SearchOptions::default());
    assert!(all.len() > 2);

    for k in 1..=all.len() {
        let limited = table.search("nic", SearchOptions::with_limit(k));
        assert_eq!(limited.len(), k);
        assert_eq!(limited[..], all[..k]);
    }
}
