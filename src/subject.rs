use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming a JSON file that overrides the defaults.
pub const SUBJECT_ENV: &str = "WEEKS_SUBJECT";

/// The person whose age is reported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Subject {
    pub name: String,
    pub pronoun: String,
    /// Local birth time, `YYYY-MM-DD H:MM AM`.
    pub birth_time: String,
    /// IANA zone the birth time is written in.
    pub birth_zone: String,
    pub life_expectancy_years: Option<f64>,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            name: "Nathan".to_string(),
            pronoun: "He".to_string(),
            birth_time: "1977-04-05 11:58 AM".to_string(),
            birth_zone: "America/Vancouver".to_string(),
            life_expectancy_years: None,
        }
    }
}

impl Subject {
    /// Load from the file named by `WEEKS_SUBJECT`, or fall back to the defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(SUBJECT_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read subject file {}", path.display()))?;
                Self::from_json(&json)
                    .with_context(|| format!("Invalid subject file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
