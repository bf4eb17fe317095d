//! Sheet Grid Sources
//!
//! Fetches the raw dashboard grid from Google Sheets or from a local export.

pub mod file;
pub mod google;

pub use google::SheetsClient;

use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::config::{SheetConfig, SheetSourceKind};
use crate::error::DashboardResult;
use crate::report::RawGrid;
use crate::validation::validate_file_type;

/// Where a request's grid comes from.
#[derive(Debug, Clone)]
pub enum GridSource {
    GoogleSheets(SheetsClient),
    CsvFile { path: PathBuf },
    XlsxFile { path: PathBuf, sheet_name: String },
}

impl GridSource {
    pub fn from_config(config: &SheetConfig) -> DashboardResult<Self> {
        let file_path = || PathBuf::from(config.file_path.clone().unwrap_or_default());

        match config.source {
            SheetSourceKind::GoogleSheets => Ok(Self::GoogleSheets(SheetsClient::new(config)?)),
            SheetSourceKind::Csv => {
                let path = file_path();
                validate_file_type(&path.to_string_lossy(), &["csv"])?;
                Ok(Self::CsvFile { path })
            }
            SheetSourceKind::Xlsx => {
                let path = file_path();
                validate_file_type(&path.to_string_lossy(), &["xlsx", "xlsm"])?;
                Ok(Self::XlsxFile {
                    path,
                    sheet_name: config.sheet_name.clone(),
                })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::GoogleSheets(client) => format!("google_sheets:{}", client.spreadsheet_id()),
            Self::CsvFile { path } => format!("csv:{}", path.display()),
            Self::XlsxFile { path, sheet_name } => format!("xlsx:{}#{}", path.display(), sheet_name),
        }
    }

    pub async fn fetch(&self) -> DashboardResult<RawGrid> {
        let started = Instant::now();
        let grid = match self {
            Self::GoogleSheets(client) => client.fetch_values().await?,
            Self::CsvFile { path } => file::read_csv_grid(path).await?,
            Self::XlsxFile { path, sheet_name } => file::read_xlsx_grid(path, sheet_name).await?,
        };

        info!(
            source = %self.describe(),
            rows = grid.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched sheet grid"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_checks_file_extension() {
        let mut config = SheetConfig {
            source: SheetSourceKind::Csv,
            file_path: Some("dashboard.xlsx".to_string()),
            ..SheetConfig::default()
        };
        assert!(GridSource::from_config(&config).is_err());

        config.source = SheetSourceKind::Xlsx;
        let source = GridSource::from_config(&config).unwrap();
        assert_eq!(source.describe(), "xlsx:dashboard.xlsx#全体ダッシュボード");
    }

    #[test]
    fn test_from_config_google() {
        let config = SheetConfig {
            spreadsheet_id: "abc".to_string(),
            ..SheetConfig::default()
        };
        let source = GridSource::from_config(&config).unwrap();
        assert_eq!(source.describe(), "google_sheets:abc");
    }
}
