pub mod config;
pub mod logging;
pub mod error;
pub mod validation;
pub mod report;
pub mod sheets;

pub use self::config::*;
pub use logging::*;
pub use error::*;
pub use validation::*;
pub use report::*;
pub use sheets::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.sheet.sheet_name, "全体ダッシュボード");
    }

    #[test]
    fn test_error_handling() {
        let error = DashboardError::sheet_structure("Sheet data is empty");
        assert_eq!(error.error_code(), "SHEET_STRUCTURE_ERROR");
        assert_eq!(error.http_status_code(), 500);

        let response = ErrorResponse::from(error);
        assert_eq!(response.detail, "Sheet data is empty");
    }
}
