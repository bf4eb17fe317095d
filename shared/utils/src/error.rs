use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum DashboardError {
    #[error("Sheet structure error: {message}")]
    SheetStructure { message: String },

    #[error("Sheet source error: {message}")]
    SheetSource { message: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl DashboardError {
    pub fn sheet_structure(message: impl Into<String>) -> Self {
        Self::SheetStructure {
            message: message.into(),
        }
    }

    pub fn sheet_source(message: impl Into<String>) -> Self {
        Self::SheetSource {
            message: message.into(),
        }
    }

    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures caused by the sheet layout itself rather than by I/O.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::SheetStructure { .. })
    }

    /// The failure's message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::SheetStructure { message }
            | Self::SheetSource { message }
            | Self::ExternalService { message, .. }
            | Self::Configuration { message }
            | Self::Internal { message } => message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SheetStructure { .. } => "SHEET_STRUCTURE_ERROR",
            Self::SheetSource { .. } => "SHEET_SOURCE_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::SheetStructure { .. } => 500,
            Self::SheetSource { .. } => 500,
            Self::ExternalService { .. } => 500,
            Self::Configuration { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// JSON body returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl From<DashboardError> for ErrorResponse {
    fn from(error: DashboardError) -> Self {
        Self {
            detail: error.message().to_string(),
            code: error.error_code().to_string(),
        }
    }
}

// Conversion from common error types
impl From<reqwest::Error> for DashboardError {
    fn from(error: reqwest::Error) -> Self {
        Self::external_service("Google Sheets", error.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        Self::external_service("Google Sheets", format!("Malformed response: {}", error))
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        Self::sheet_source(error.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(error: csv::Error) -> Self {
        Self::sheet_source(format!("CSV: {}", error))
    }
}

impl From<calamine::XlsxError> for DashboardError {
    fn from(error: calamine::XlsxError) -> Self {
        Self::sheet_source(format!("XLSX: {}", error))
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failure_is_server_error() {
        let error = DashboardError::external_service("Google Sheets", "HTTP 403 Forbidden");
        assert_eq!(error.http_status_code(), 500);
        assert_eq!(error.error_code(), "EXTERNAL_SERVICE_ERROR");

        let response = ErrorResponse::from(error);
        assert_eq!(response.detail, "HTTP 403 Forbidden");
        assert_eq!(response.code, "EXTERNAL_SERVICE_ERROR");
    }
}
