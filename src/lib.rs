//! # TLD Info Library
//!
//! Lookup, validation and search over a compiled table of top-level domain
//! metadata.
//!
//! ## Features
//!
//! - Table compiled into the binary at build time, checked by the build script
//! - Case- and dot-insensitive lookup (`COM`, `.com` and ` Com ` are the same key)
//! - Filtering by type and by country code
//! - Flag emoji derivation for ccTLDs
//! - Substring search over TLD, registry and country code
//! - Optional replacement table loaded from a JSON file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tld_info::SearchOptions;
//!
//! let com = tld_info::lookup("COM").expect(".com is in the table");
//! println!("{}: {} ({:?})", com.tld, com.kind, com.registry);
//!
//! assert!(tld_info::is_valid(".de"));
//! println!("{:?}", tld_info::emoji_flag("de"));
//!
//! for record in tld_info::search("verisign", SearchOptions::with_limit(5)) {
//!     println!("{}", record.tld);
//! }
//! ```

pub mod config;
pub mod errors;
pub mod loader;
pub mod markdown;
pub mod normalize;
pub mod query;
pub mod table;
pub mod types;

// Re-export main types for easy access
pub use config::{Config, OutputFormat};
pub use errors::TldError;
pub use normalize::normalize;
pub use query::{country_flag, SearchOptions};
pub use table::{install, table, TldTable};
pub use types::{IdnSupport, TldRecord, TldStatus, TldType};

/// Look up a TLD in the process-wide table.
pub fn lookup(input: &str) -> Option<&'static TldRecord> {
    table().lookup(input)
}

/// Whether `input` names a TLD in the process-wide table.
pub fn is_valid(input: &str) -> bool {
    table().is_valid(input)
}

pub fn filter_by_type(kind: &str) -> Vec<&'static TldRecord> {
    table().filter_by_type(kind)
}

pub fn filter_by_country(country_code: &str) -> Vec<&'static TldRecord> {
    table().filter_by_country(country_code)
}

pub fn emoji_flag(input: &str) -> Option<String> {
    table().emoji_flag(input)
}

pub fn search(query: &str, options: SearchOptions) -> Vec<&'static TldRecord> {
    table().search(query, options)
}

/// All records of the process-wide table, in table order.
pub fn records() -> &'static [TldRecord] {
    table().records()
}
