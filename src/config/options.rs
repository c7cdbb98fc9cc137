// src/config/options.rs
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub sliders: SliderOptions,
}

impl AppOptions {
    /// Read `path` as TOML. A missing file is not an error: defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Like `load`, but a broken config only costs a log line.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(opts) => opts,
            Err(e) => {
                loge!("Config: {e}; using defaults");
                Self::default()
            }
        }
    }
}

/// Where the trip pages live and which ones to fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Local directory or `http://host[:port]/prefix`.
    pub base: String,
    pub pages: Vec<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base: s!(DEFAULT_BASE),
            pages: DEFAULT_PAGES.iter().map(|p| s!(*p)).collect(),
        }
    }
}

/// How slider maxima are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Configured visual maxima, independent of the loaded data.
    #[default]
    Fixed,
    /// Data maxima rounded up to the step, never below `min + step`.
    DataDerived,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderOptions {
    pub policy: DomainPolicy,
    pub days_min: u64,
    pub days_max: u64,
    pub days_step: u64,
    pub budget_min: u64,
    pub budget_max: u64,
    pub budget_step: u64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            policy: DomainPolicy::Fixed,
            days_min: DAYS_MIN,
            days_max: DAYS_MAX,
            days_step: DAYS_STEP,
            budget_min: BUDGET_MIN,
            budget_max: BUDGET_MAX,
            budget_step: BUDGET_STEP,
        }
    }
}
