use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

const DATA_FILE: &str = "data/tlds.json";

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceRecord {
    tld: String,
    #[serde(rename = "type")]
    kind: String,
    registry: Option<String>,
    country_code: Option<String>,
    status: Option<String>,
    created_date: Option<String>,
    #[serde(default)]
    idn_support: Option<bool>,
    has_emoji_flag: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", DATA_FILE);

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("compiled_tlds.rs");

    let source = fs::read_to_string(DATA_FILE)?;
    let records: Vec<SourceRecord> = serde_json::from_str(&source)?;

    check_invariants(&records)?;

    // Generate the Rust code
    let mut code = String::new();
    code.push_str("// Auto-generated TLD table compiled from data/tlds.json\n");
    code.push_str("// DO NOT EDIT - This file is generated at build time\n\n");
    code.push_str("pub(crate) static COMPILED_RECORDS: &[CompiledRecord] = &[\n");

    // Debug formatting of &str / Option<&str> yields valid Rust literals
    for record in &records {
        code.push_str(&format!(
            "    CompiledRecord {{ tld: {:?}, kind: {:?}, registry: {:?}, country_code: {:?}, status: {:?}, created_date: {:?}, idn_support: {:?}, has_emoji_flag: {:?} }},\n",
            record.tld,
            record.kind,
            record.registry.as_deref(),
            record.country_code.as_deref(),
            record.status.as_deref(),
            record.created_date.as_deref(),
            record.idn_support,
            record.has_emoji_flag,
        ));
    }

    code.push_str("];\n");

    fs::write(dest_path, code)?;
    println!("cargo:warning=Compiled {} TLD records from {}", records.len(), DATA_FILE);
    Ok(())
}

fn check_invariants(records: &[SourceRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let created_date = regex::Regex::new(r"^\d{4}(-\d{2}-\d{2})?$")?;
    let mut seen = HashSet::new();

    for record in records {
        let tld = &record.tld;
        let canonical = tld.len() > 1
            && tld.starts_with('.')
            && tld.trim() == tld
            && tld.to_lowercase() == *tld;
        if !canonical {
            return Err(format!("{}: key is not in canonical form", tld).into());
        }

        if !seen.insert(tld.clone()) {
            return Err(format!("{}: duplicate key", tld).into());
        }

        if record.has_emoji_flag {
            let valid_code = record
                .country_code
                .as_deref()
                .map(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
                .unwrap_or(false);
            if !valid_code {
                return Err(format!("{}: hasEmojiFlag requires a two-letter country code", tld).into());
            }
        }

        // Shape only, the calendar is not checked
        if let Some(date) = record.created_date.as_deref() {
            if !created_date.is_match(date) {
                return Err(format!("{}: createdDate {:?} is not YYYY or YYYY-MM-DD", tld, date).into());
            }
        }
    }

    Ok(())
}
