use crate::{normalize::normalize, table::TldTable, types::TldRecord};
use tracing::debug;

// Offset between uppercase ASCII letters and regional indicator symbols (U+1F1E6 - 'A')
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Options for [`TldTable::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after this many matches. `None` or `Some(0)` means unlimited.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl TldTable {
    /// Find the record for a TLD given in any case, with or without the dot.
    pub fn lookup(&self, input: &str) -> Option<&TldRecord> {
        if input.trim().is_empty() {
            return None;
        }

        let key = normalize(input);
        let found = self.get(&key);
        if found.is_none() {
            debug!("No TLD record for {:?}", key);
        }
        found
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.lookup(input).is_some()
    }

    /// Records whose type label matches `kind`, ignoring case.
    pub fn filter_by_type(&self, kind: &str) -> Vec<&TldRecord> {
        if kind.trim().is_empty() {
            return Vec::new();
        }

        let wanted = kind.to_lowercase();
        self.iter()
            .filter(|record| record.kind.as_str().to_lowercase() == wanted)
            .collect()
    }

    /// ccTLD records for an ISO 3166-1 alpha-2 code, ignoring case.
    ///
    /// Records of any other type are excluded even if they carry a code.
    pub fn filter_by_country(&self, country_code: &str) -> Vec<&TldRecord> {
        if country_code.trim().is_empty() {
            return Vec::new();
        }

        let wanted = country_code.to_uppercase();
        self.iter()
            .filter(|record| record.is_country_code())
            .filter(|record| {
                record
                    .country_code
                    .as_deref()
                    .is_some_and(|code| code.to_uppercase() == wanted)
            })
            .collect()
    }

    /// Flag emoji for a ccTLD that is marked as having one.
    pub fn emoji_flag(&self, input: &str) -> Option<String> {
        let record = self.lookup(input)?;
        if !record.is_country_code() || !record.has_emoji_flag {
            return None;
        }
        record.country_code.as_deref().and_then(country_flag)
    }

    /// Case-insensitive substring search over tld, registry and country code.
    ///
    /// Matches are returned in table order. With a positive limit the scan
    /// stops at the limit, so the result is the first N matches, not a ranking.
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<&TldRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let limit = options.limit.filter(|&limit| limit > 0);
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        let mut results = Vec::new();
        for record in self.iter() {
            let matched = contains(Some(record.tld.as_str()))
                || contains(record.registry.as_deref())
                || contains(record.country_code.as_deref());
            if !matched {
                continue;
            }

            results.push(record);
            if limit.is_some_and(|limit| results.len() >= limit) {
                break;
            }
        }

        debug!("Search {:?} matched {} records", query, results.len());
        results
    }
}

/// Regional indicator pair for a two-letter country code.
///
/// Returns `None` unless the code is exactly two ASCII letters.
pub fn country_flag(country_code: &str) -> Option<String> {
    let mut chars = country_code.chars();
    let (first, second) = match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => (first, second),
        _ => return None,
    };

    [first, second]
        .into_iter()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                char::from_u32(upper as u32 + REGIONAL_INDICATOR_OFFSET)
            } else {
                None
            }
        })
        .collect()
}
