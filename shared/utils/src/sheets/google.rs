//! Google Sheets Client
//!
//! Reads a worksheet range through the Sheets API v4 `values.get` endpoint.

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::SheetConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::report::RawGrid;

const SERVICE_NAME: &str = "Google Sheets";

/// Sheets API client bound to one spreadsheet range.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

/// `values.get` response body.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsClient {
    pub fn new(config: &SheetConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| DashboardError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            range: format!("{}!{}", config.sheet_name, config.range),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            access_token: config.access_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// `{base}/v4/spreadsheets/{id}/values/{sheet}!{range}` with every
    /// segment percent-encoded.
    pub fn values_url(&self) -> DashboardResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DashboardError::configuration(format!("Invalid Sheets API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| DashboardError::configuration("Sheets API URL cannot be a base"))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", self.range.as_str()]);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("valueRenderOption", "FORMATTED_VALUE");
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
        }

        Ok(url)
    }

    /// Fetches the configured range as a raw grid.
    pub async fn fetch_values(&self) -> DashboardResult<RawGrid> {
        let url = self.values_url()?;
        debug!(range = %self.range, "Fetching sheet values");

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::external_service(
                SERVICE_NAME,
                format!("HTTP {}: {}", status, body.trim()),
            ));
        }

        let body = response.bytes().await?;
        parse_value_range(&body)
    }
}

/// Decodes a `values.get` body. A range with no data omits `values`.
pub fn parse_value_range(body: &[u8]) -> DashboardResult<RawGrid> {
    let range: ValueRange = serde_json::from_slice(body)?;
    Ok(range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetConfig {
        SheetConfig {
            spreadsheet_id: "sheet-123".to_string(),
            api_key: Some("k3y".to_string()),
            ..SheetConfig::default()
        }
    }

    #[test]
    fn test_values_url_encodes_sheet_name() {
        let client = SheetsClient::new(&config()).unwrap();
        let url = client.values_url().unwrap();

        assert!(url
            .as_str()
            .starts_with("https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/"));
        assert!(url.path().ends_with("!A:Z"));
        assert!(!url.path().contains("全体"));
        assert_eq!(url.query(), Some("valueRenderOption=FORMATTED_VALUE&key=k3y"));
    }

    #[test]
    fn test_values_url_without_key() {
        let mut config = config();
        config.api_key = Some(String::new());
        config.api_base_url = "http://localhost:9000/".to_string();
        let url = SheetsClient::new(&config).unwrap().values_url().unwrap();

        assert!(url.as_str().starts_with("http://localhost:9000/v4/spreadsheets/"));
        assert_eq!(url.query(), Some("valueRenderOption=FORMATTED_VALUE"));
    }

    #[test]
    fn test_parse_value_range() {
        let body = r#"{"range":"x!A1:C2","majorDimension":"ROWS","values":[["指標","2024年6月"],["実績：通電数",1200,null]]}"#;
        let grid = parse_value_range(body.as_bytes()).unwrap();

        assert_eq!(grid[0], vec!["指標", "2024年6月"]);
        assert_eq!(grid[1], vec!["実績：通電数", "1200", ""]);
    }

    #[test]
    fn test_parse_value_range_without_values() {
        let grid = parse_value_range(br#"{"range":"x!A1:Z1000","majorDimension":"ROWS"}"#).unwrap();
        assert!(grid.is_empty());

        let err = parse_value_range(b"<html>").unwrap_err();
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }
}
