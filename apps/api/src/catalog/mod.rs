//! Static catalogs: women-focused programs and colleges, loaded once at startup.
//!
//! Both catalogs are flat JSON arrays on disk. A missing file is an empty
//! catalog; a record with an unknown `category` or `budget` is skipped with a
//! warning so the pure filters only ever see closed enum values.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

pub mod colleges;
pub mod handlers;
pub mod programs;

pub use colleges::CollegeRecord;
pub use programs::ProgramRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path} is not a JSON array of records: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returned when a category or budget string names no known variant.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Program track. Serialized as `tech` / `non-tech`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "tech")]
    Tech,
    #[serde(rename = "non-tech")]
    NonTech,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::NonTech => "non-tech",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tech" => Ok(Category::Tech),
            "non-tech" | "nontech" | "non_tech" => Ok(Category::NonTech),
            _ => Err(UnknownVariant {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fee tier of a college, and the budget preference carried by a roadmap.
/// Parsing is case-insensitive, so equality of two `Budget`s is the
/// case-insensitive comparison of their source strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        }
    }
}

impl FromStr for Budget {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Budget::Low),
            "medium" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            _ => Err(UnknownVariant {
                kind: "budget",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Budget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both read-only catalogs. Shared across requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub programs: Vec<ProgramRecord>,
    pub colleges: Vec<CollegeRecord>,
}

impl Catalogs {
    pub fn load(
        programs_path: impl AsRef<Path>,
        colleges_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let programs = load_catalog::<ProgramRecord>(programs_path.as_ref(), "program")?;
        let colleges = load_catalog::<CollegeRecord>(colleges_path.as_ref(), "college")?;
        info!(
            "Catalogs loaded: {} programs, {} colleges",
            programs.len(),
            colleges.len()
        );
        Ok(Self { programs, colleges })
    }
}

/// Reads a JSON array of records from `path`.
///
/// A missing file yields an empty catalog. Records that fail to deserialize are
/// skipped individually; only an unreadable file or a non-array document fails.
pub fn load_catalog<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<Vec<T>, CatalogError> {
    let path_text = path.display().to_string();

    if !path.exists() {
        warn!("No {kind} catalog at {path_text}; continuing with an empty catalog");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_text.clone(),
        source,
    })?;

    let values: Vec<Value> = serde_json::from_str(&raw).map_err(|source| CatalogError::Format {
        path: path_text.clone(),
        source,
    })?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping {kind} record #{index} in {path_text}: {e}"),
        }
    }

    Ok(records)
}
