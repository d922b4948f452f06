use serde::{Deserialize, Serialize};
use std::fmt;

/// TLD classification as published by the registry data.
///
/// Known labels map to dedicated variants; anything else is preserved verbatim
/// in `Other` so unseen upstream labels survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TldType {
    Generic,
    CountryCode,
    Sponsored,
    Infrastructure,
    Test,
    Other(String),
}

impl TldType {
    pub fn as_str(&self) -> &str {
        match self {
            TldType::Generic => "gTLD",
            TldType::CountryCode => "ccTLD",
            TldType::Sponsored => "sTLD",
            TldType::Infrastructure => "infrastructure",
            TldType::Test => "test",
            TldType::Other(label) => label,
        }
    }
}

impl From<&str> for TldType {
    fn from(label: &str) -> Self {
        match label {
            "gTLD" => TldType::Generic,
            "ccTLD" => TldType::CountryCode,
            "sTLD" => TldType::Sponsored,
            "infrastructure" => TldType::Infrastructure,
            "test" => TldType::Test,
            other => TldType::Other(other.to_string()),
        }
    }
}

impl From<String> for TldType {
    fn from(label: String) -> Self {
        TldType::from(label.as_str())
    }
}

impl From<TldType> for String {
    fn from(kind: TldType) -> Self {
        match kind {
            TldType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delegation status of a TLD.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TldStatus {
    Active,
    Reserved,
    Inactive,
    NotAssigned,
    Other(String),
}

impl TldStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TldStatus::Active => "active",
            TldStatus::Reserved => "reserved",
            TldStatus::Inactive => "inactive",
            TldStatus::NotAssigned => "not assigned",
            TldStatus::Other(label) => label,
        }
    }
}

impl From<&str> for TldStatus {
    fn from(label: &str) -> Self {
        match label {
            "active" => TldStatus::Active,
            "reserved" => TldStatus::Reserved,
            "inactive" => TldStatus::Inactive,
            "not assigned" | "not-assigned" => TldStatus::NotAssigned,
            other => TldStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for TldStatus {
    fn from(label: String) -> Self {
        TldStatus::from(label.as_str())
    }
}

impl From<TldStatus> for String {
    fn from(status: TldStatus) -> Self {
        match status {
            TldStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the registry accepts internationalized labels.
///
/// Serialized as `true`, `false` or `null`; `Unknown` is never the same thing
/// as `Unsupported`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum IdnSupport {
    Supported,
    Unsupported,
    #[default]
    Unknown,
}

impl IdnSupport {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            IdnSupport::Supported => Some(true),
            IdnSupport::Unsupported => Some(false),
            IdnSupport::Unknown => None,
        }
    }
}

impl From<Option<bool>> for IdnSupport {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => IdnSupport::Supported,
            Some(false) => IdnSupport::Unsupported,
            None => IdnSupport::Unknown,
        }
    }
}

impl From<IdnSupport> for Option<bool> {
    fn from(value: IdnSupport) -> Self {
        value.as_bool()
    }
}

/// One entry of the TLD table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TldRecord {
    /// Canonical key: leading dot, lowercase.
    pub tld: String,
    #[serde(rename = "type")]
    pub kind: TldType,
    pub registry: Option<String>,
    /// ISO 3166-1 alpha-2 code, present for ccTLDs.
    pub country_code: Option<String>,
    pub status: Option<TldStatus>,
    /// `YYYY` or `YYYY-MM-DD`.
    pub created_date: Option<String>,
    #[serde(default)]
    pub idn_support: IdnSupport,
    pub has_emoji_flag: bool,
}

impl TldRecord {
    pub fn is_country_code(&self) -> bool {
        self.kind == TldType::CountryCode
    }
}
