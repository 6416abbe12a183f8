//! User settings for the budget ledger
//!
//! Holds the remote spreadsheet coordinates, the income cell address and
//! display preferences. The access token is never persisted; it is read from
//! the environment at startup.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Environment variable carrying the OAuth bearer token for the spreadsheet API
pub const ACCESS_TOKEN_ENV: &str = "BUDGET_LEDGER_ACCESS_TOKEN";

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Identifier of the remote spreadsheet (None = offline only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,

    /// Name of the worksheet holding the budget
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// A1 address of the income cell
    #[serde(default = "default_income_cell")]
    pub income_cell: String,

    /// Currency symbol used in the summary
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timeout applied to each remote request, in seconds
    #[serde(default = "default_remote_timeout_secs")]
    pub remote_timeout_secs: u64,
}

fn default_worksheet() -> String {
    "Budget".to_string()
}

fn default_income_cell() -> String {
    "A2".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_remote_timeout_secs() -> u64 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            worksheet: default_worksheet(),
            income_cell: default_income_cell(),
            currency_symbol: default_currency(),
            remote_timeout_secs: default_remote_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Read the bearer token from the environment, ignoring blank values
    pub fn access_token() -> Option<String> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.spreadsheet_id.is_none());
        assert_eq!(settings.worksheet, "Budget");
        assert_eq!(settings.income_cell, "A2");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.remote_timeout_secs, 15);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.worksheet, "Budget");
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.spreadsheet_id = Some("sheet-123".into());
        settings.income_cell = "F1".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.spreadsheet_id.as_deref(), Some("sheet-123"));
        assert_eq!(loaded.income_cell, "F1");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"worksheet": "March"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.worksheet, "March");
        assert_eq!(loaded.income_cell, "A2");
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
