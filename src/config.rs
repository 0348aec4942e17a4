//! Console Configuration
//!
//! Table defaults plus per-screen overrides, persisted as TOML in the
//! platform config directory.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FILTER_MIN_CHARS, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Effective settings for one entity table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
    /// Choices offered by the page-size selector
    pub page_size_options: Vec<usize>,
    /// Filter text shorter than this is ignored
    pub filter_min_chars: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            filter_min_chars: DEFAULT_FILTER_MIN_CHARS,
        }
    }
}

impl TableConfig {
    /// Clamp values a table cannot work with
    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            warn!("Configured page_size is 0, using 1");
            self.page_size = 1;
        }
        self.page_size_options.retain(|size| *size > 0);
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
            self.page_size_options.sort_unstable();
        }
        self
    }
}

/// Per-screen overrides; unset fields fall back to `[table]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScreenConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size_options: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_min_chars: Option<usize>,
}

/// Persisted console configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Defaults for every table
    pub table: TableConfig,
    /// Overrides keyed by screen name (`users`, `vendors`, ...)
    pub screens: BTreeMap<String, ScreenConfig>,
}

/// Default config file location
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

impl ConsoleConfig {
    /// Load from the default location; a missing or empty file yields defaults
    pub fn try_load() -> Result<Self> {
        Self::load_from_path(&config_path()?)
    }

    /// Load from an explicit path; a missing or empty file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&config_path()?)
    }

    /// Save to an explicit path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// Effective table settings for `screen`
    pub fn for_screen(&self, screen: &str) -> TableConfig {
        let mut config = self.table.clone();
        if let Some(overrides) = self.screens.get(screen) {
            if let Some(page_size) = overrides.page_size {
                config.page_size = page_size;
            }
            if let Some(options) = &overrides.page_size_options {
                config.page_size_options = options.clone();
            }
            if let Some(min_chars) = overrides.filter_min_chars {
                config.filter_min_chars = min_chars;
            }
        }
        config.sanitized()
    }

    /// JSON schema of the config file, for editor tooling
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(ConsoleConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
