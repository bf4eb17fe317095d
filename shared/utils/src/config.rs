use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use validator::{Validate, ValidationError};

use crate::error::{DashboardError, DashboardResult};

/// Legacy environment variable holding the spreadsheet id.
pub const LEGACY_SPREADSHEET_ID_VAR: &str = "SPREADSHEET_ID_2";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate]
    pub server: ServerConfig,
    #[validate]
    pub sheet: SheetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1, message = "Server host is required"))]
    pub host: String,
    #[validate(range(min = 1, message = "Server port must be nonzero"))]
    pub port: u16,
    #[validate(range(min = 1, max = 600, message = "Request timeout must be between 1 and 600 seconds"))]
    pub timeout_seconds: u64,
}

/// Where the dashboard grid is read from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SheetSourceKind {
    GoogleSheets,
    Csv,
    Xlsx,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_sheet_config", skip_on_field_errors = false))]
pub struct SheetConfig {
    pub source: SheetSourceKind,
    pub spreadsheet_id: String,
    #[validate(length(min = 1, message = "Sheet name is required"))]
    pub sheet_name: String,
    #[validate(length(min = 1, message = "Sheet range is required"))]
    pub range: String,
    #[validate(url(message = "Sheets API base URL must be a valid URL"))]
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub file_path: Option<String>,
    #[validate(range(min = 1, max = 300, message = "Sheet fetch timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

fn validate_sheet_config(sheet: &SheetConfig) -> Result<(), ValidationError> {
    match sheet.source {
        SheetSourceKind::GoogleSheets if sheet.spreadsheet_id.trim().is_empty() => {
            Err(ValidationError::new("spreadsheet_id_required"))
        }
        SheetSourceKind::Csv | SheetSourceKind::Xlsx
            if sheet.file_path.as_deref().map_or(true, |p| p.trim().is_empty()) =>
        {
            Err(ValidationError::new("file_path_required"))
        }
        _ => Ok(()),
    }
}

impl AppConfig {
    pub fn load() -> DashboardResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with SALESBOARD prefix
            .add_source(Environment::with_prefix("SALESBOARD").separator("__"));

        let mut app_config: AppConfig = config.build()?.try_deserialize()?;
        app_config.apply_legacy_env();
        app_config.validate_all()?;

        Ok(app_config)
    }

    /// Fills a blank spreadsheet id from `SPREADSHEET_ID_2`.
    fn apply_legacy_env(&mut self) {
        if self.sheet.spreadsheet_id.trim().is_empty() {
            if let Ok(id) = env::var(LEGACY_SPREADSHEET_ID_VAR) {
                self.sheet.spreadsheet_id = id;
            }
        }
    }

    pub fn validate_all(&self) -> DashboardResult<()> {
        self.validate()
            .map_err(|errors| DashboardError::configuration(crate::format_validation_errors(&errors)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            source: SheetSourceKind::GoogleSheets,
            spreadsheet_id: String::new(),
            sheet_name: "全体ダッシュボード".to_string(),
            range: "A:Z".to_string(),
            api_base_url: "https://sheets.googleapis.com".to_string(),
            api_key: None,
            access_token: None,
            file_path: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_google_source_needs_spreadsheet_id() {
        let config = AppConfig::default();
        let err = config.validate_all().unwrap_err();

        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_csv_source_needs_file_path() {
        let mut config = AppConfig::default();
        config.sheet.source = SheetSourceKind::Csv;
        assert!(config.validate_all().is_err());

        config.sheet.file_path = Some("dashboard.csv".to_string());
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_source_kind_names() {
        let kind: SheetSourceKind = serde_json::from_str("\"google_sheets\"").unwrap();
        assert_eq!(kind, SheetSourceKind::GoogleSheets);
        let kind: SheetSourceKind = serde_json::from_str("\"xlsx\"").unwrap();
        assert_eq!(kind, SheetSourceKind::Xlsx);
    }
}
