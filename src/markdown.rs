use crate::{errors::TldError, query::country_flag, types::TldRecord};
use std::{fs, path::Path};
use tracing::info;

const NOT_AVAILABLE: &str = "N/A";

/// Render the TLD information table as a Markdown document.
pub fn render_table<'a>(records: impl IntoIterator<Item = &'a TldRecord>) -> String {
    let mut md = String::from("# TLD Information Table\n\n");
    md.push_str("A comprehensive list of Top-Level Domains (TLDs) and their metadata.\n\n");
    md.push_str("| TLD | Type | Registry | Country Code | Status | Created Date | IDN Support | Emoji Flag |\n");
    md.push_str("|-----|------|----------|--------------|--------|--------------|-------------|------------|\n");

    for record in records {
        let idn = match record.idn_support.as_bool() {
            Some(value) => value.to_string(),
            None => NOT_AVAILABLE.to_string(),
        };
        let emoji = match (record.has_emoji_flag, record.country_code.as_deref()) {
            (true, Some(code)) => country_flag(code).unwrap_or_default(),
            _ => NOT_AVAILABLE.to_string(),
        };

        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            or_na(Some(record.tld.as_str())),
            or_na(Some(record.kind.as_str())),
            or_na(record.registry.as_deref()),
            or_na(record.country_code.as_deref()),
            or_na(record.status.as_ref().map(|status| status.as_str())),
            or_na(record.created_date.as_deref()),
            idn,
            emoji,
        ));
    }

    md
}

/// Render the table and write it to `path`, creating parent directories.
pub fn write_table<'a>(
    records: impl IntoIterator<Item = &'a TldRecord>,
    path: impl AsRef<Path>,
) -> Result<(), TldError> {
    let path = path.as_ref();
    let content = render_table(records);

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;

    info!("Wrote Markdown documentation to {}", path.display());
    Ok(())
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
