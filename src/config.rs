use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DOCS_PATH: &str = "docs/tld-table.md";

/// How the command-line front end prints records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON table to install instead of the compiled data.
    pub data_path: Option<PathBuf>,
    /// Default search limit, `0` means unlimited.
    pub search_limit: usize,
    pub output: OutputFormat,
    pub docs_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigData {
    #[serde(default)]
    pub data_path: Option<String>,
    pub search_limit: usize,
    pub output: OutputFormat,
    pub docs_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut settings = config::Config::builder()
            .set_default("search_limit", 0)?
            .set_default("output", "text")?
            .set_default("docs_path", DEFAULT_DOCS_PATH)?;

        // Override with environment variables if present
        settings = Self::apply_env_overrides(settings)?;

        let config_data: ConfigData = settings.build()?.try_deserialize()?;

        Ok(Config {
            data_path: config_data
                .data_path
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            search_limit: config_data.search_limit,
            output: config_data.output,
            docs_path: PathBuf::from(config_data.docs_path),
        })
    }

    fn apply_env_overrides(mut settings: config::ConfigBuilder<config::builder::DefaultState>) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let env_mappings = [
            ("TLD_DATA_PATH", "data_path"),
            ("TLD_DATA", "data_path"),
            ("TLD_SEARCH_LIMIT", "search_limit"),
            ("TLD_OUTPUT", "output"),
            ("TLD_OUTPUT_FORMAT", "output"),
            ("TLD_DOCS_PATH", "docs_path"),
        ];

        for (env_var, config_key) in env_mappings {
            if let Ok(value) = std::env::var(env_var) {
                // Format names are matched lowercase
                let value = if config_key == "output" { value.to_lowercase() } else { value };
                settings = settings.set_override(config_key, value)?;
            }
        }

        Ok(settings)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            search_limit: 0,
            output: OutputFormat::Text,
            docs_path: PathBuf::from(DEFAULT_DOCS_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_label() {
        let json: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(json, OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.data_path.is_none());
        assert_eq!(config.search_limit, 0);
        assert_eq!(config.docs_path, PathBuf::from("docs/tld-table.md"));
    }

    // Only test in this binary that touches the TLD_* environment
    #[test]
    fn test_load_applies_env_overrides() {
        for var in ["TLD_DATA", "TLD_OUTPUT_FORMAT"] {
            std::env::remove_var(var);
        }
        std::env::set_var("TLD_SEARCH_LIMIT", "2");
        std::env::set_var("TLD_OUTPUT", "JSON");
        std::env::set_var("TLD_DATA_PATH", "   ");
        std::env::set_var("TLD_DOCS_PATH", "out/tlds.md");

        let config = Config::load();
        for var in ["TLD_SEARCH_LIMIT", "TLD_OUTPUT", "TLD_DATA_PATH", "TLD_DOCS_PATH"] {
            std::env::remove_var(var);
        }

        let config = config.unwrap();
        assert_eq!(config.search_limit, 2);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.data_path.is_none());
        assert_eq!(config.docs_path, PathBuf::from("out/tlds.md"));
    }
}
