//! User settings for the expense ledger
//!
//! Display locale, defaults applied to new expenses, whether the sample
//! records are loaded, and the log filter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::display::Locale;
use crate::error::LedgerError;
use crate::ledger::DEFAULT_CATEGORY;
use crate::models::PaymentMethod;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display locale for amounts and labels
    #[serde(default)]
    pub locale: Locale,

    /// Category given to expenses added from the shell
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Payment method preselected in the add form
    #[serde(default)]
    pub default_payment_method: PaymentMethod,

    /// Whether the ledger starts with the sample records
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// `tracing` filter directive, e.g. "expense_ledger=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            default_category: default_category(),
            default_payment_method: PaymentMethod::default(),
            seed_sample_data: default_seed_sample_data(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from the config directory, or fall back to defaults if
    /// the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, LedgerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
