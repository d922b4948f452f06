use crate::{
    errors::TldError,
    types::{IdnSupport, TldRecord, TldStatus, TldType},
};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Row shape emitted by the build script.
pub(crate) struct CompiledRecord {
    pub tld: &'static str,
    pub kind: &'static str,
    pub registry: Option<&'static str>,
    pub country_code: Option<&'static str>,
    pub status: Option<&'static str>,
    pub created_date: Option<&'static str>,
    pub idn_support: Option<bool>,
    pub has_emoji_flag: bool,
}

include!(concat!(env!("OUT_DIR"), "/compiled_tlds.rs"));

impl From<&CompiledRecord> for TldRecord {
    fn from(row: &CompiledRecord) -> Self {
        TldRecord {
            tld: row.tld.to_string(),
            kind: TldType::from(row.kind),
            registry: row.registry.map(str::to_string),
            country_code: row.country_code.map(str::to_string),
            status: row.status.map(TldStatus::from),
            created_date: row.created_date.map(str::to_string),
            idn_support: IdnSupport::from(row.idn_support),
            has_emoji_flag: row.has_emoji_flag,
        }
    }
}

// Global table - initialized once, never mutated afterwards
static TABLE: OnceCell<TldTable> = OnceCell::new();

/// Immutable TLD table: records in load order plus a canonical-key index.
#[derive(Debug, Clone, Default)]
pub struct TldTable {
    records: Vec<TldRecord>,
    index: HashMap<String, usize>,
}

impl TldTable {
    /// Build a table from records that already satisfy the data invariants.
    ///
    /// The first record for a key wins; later duplicates are dropped so the
    /// sequence and the index always describe the same set.
    pub fn from_records(records: Vec<TldRecord>) -> Self {
        let mut table = Self {
            records: Vec::with_capacity(records.len()),
            index: HashMap::with_capacity(records.len()),
        };

        for record in records {
            if table.index.contains_key(&record.tld) {
                warn!("Dropping duplicate TLD record: {}", record.tld);
                continue;
            }
            table.index.insert(record.tld.clone(), table.records.len());
            table.records.push(record);
        }

        debug!("TLD table built with {} records", table.records.len());
        table
    }

    /// Table built from the data compiled into the binary.
    pub fn compiled() -> Self {
        Self::from_records(COMPILED_RECORDS.iter().map(TldRecord::from).collect())
    }

    /// Exact lookup by canonical key, without normalization.
    pub fn get(&self, key: &str) -> Option<&TldRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    /// Records in table order.
    pub fn records(&self) -> &[TldRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TldRecord> {
        self.records.iter()
    }

    /// Canonical keys in table order.
    pub fn tlds(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.tld.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TldTable {
    type Item = &'a TldRecord;
    type IntoIter = std::slice::Iter<'a, TldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The process-wide table, built from compiled data on first use.
pub fn table() -> &'static TldTable {
    TABLE.get_or_init(|| {
        let table = TldTable::compiled();
        info!("Loaded compiled TLD table ({} records)", table.len());
        table
    })
}

/// Install a replacement process-wide table.
///
/// Only possible before the first query touches the global table.
pub fn install(table: TldTable) -> Result<(), TldError> {
    let count = table.len();
    TABLE.set(table).map_err(|_| TldError::AlreadyInitialized)?;
    info!("Installed TLD table ({} records)", count);
    Ok(())
}
