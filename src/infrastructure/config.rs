//! Configuration management

use crate::domain::labels;
use crate::error::{DentdocError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "DENTDOC_CONFIG";
/// Environment variable overriding the id strategy
pub const ID_STRATEGY_ENV: &str = "DENTDOC_ID_STRATEGY";

/// How new document ids are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Sequential numbers continuing after the highest existing id
    #[default]
    Counter,
    /// Random UUID v4 in simple (32 hex chars) form
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "counter" => Ok(IdStrategy::Counter),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(format!("Invalid id strategy: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Subtitle shown under the page title
    pub clinic: String,
    /// Start each session with the demo documents
    pub seed: bool,
    pub id_strategy: IdStrategy,
    /// chrono format string for document dates
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clinic: labels::DEFAULT_CLINIC.to_string(),
            seed: true,
            id_strategy: IdStrategy::default(),
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration: explicit path, then `DENTDOC_CONFIG`, then defaults.
    /// `DENTDOC_ID_STRATEGY` overrides the id strategy in every case.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };

        if let Ok(strategy) = std::env::var(ID_STRATEGY_ENV) {
            config.id_strategy = IdStrategy::from_str(&strategy).map_err(DentdocError::Config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DentdocError::ConfigNotFound(path.to_path_buf())
            } else {
                DentdocError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            DentdocError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Reject settings that would fail later at render time
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(DentdocError::Config(
                "date_format must not be empty".to_string(),
            ));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(DentdocError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }

        // Time specifiers parse fine but cannot be rendered from a date alone.
        let mut sample = String::new();
        write!(sample, "{}", NaiveDate::MIN.format(&self.date_format)).map_err(|_| {
            DentdocError::Config(format!(
                "Invalid date format: '{}' (only date fields are allowed)",
                self.date_format
            ))
        })?;

        Ok(())
    }
}
