use crate::error::{DashboardError, DashboardResult};
use regex::Regex;
use std::sync::OnceLock;
use validator::{ValidationErrors, ValidationErrorsKind};

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.join(", ")
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = match (&error.message, &*error.code) {
                        (Some(message), _) => format!("{}: {}", path, message),
                        (None, "spreadsheet_id_required") => {
                            format!("{}: spreadsheet_id is required for the google_sheets source", prefix)
                        }
                        (None, "file_path_required") => {
                            format!("{}: file_path is required for file sources", prefix)
                        }
                        (None, "url") => format!("Invalid URL for field '{}'", path),
                        (None, "length") => format!("Length validation failed for field '{}'", path),
                        (None, "range") => format!("Value out of range for field '{}'", path),
                        (None, code) => format!("Validation failed for field '{}': {}", path, code),
                    };
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, messages),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{}[{}]", path, index), nested, messages);
                }
            }
        }
    }
}

fn month_key_regex() -> &'static Regex {
    static MONTH_KEY: OnceLock<Regex> = OnceLock::new();
    MONTH_KEY.get_or_init(|| Regex::new(r"^[0-9]{4}/[0-9]{2}$").expect("month key pattern is valid"))
}

/// Checks the "YYYY/MM" shape of a requested month.
///
/// Whether the month exists in the sheet is decided by the parser.
pub fn validate_month_key(month: &str) -> DashboardResult<()> {
    if !month_key_regex().is_match(month) {
        return Err(DashboardError::configuration(format!(
            "Invalid month '{}'. Expected format: YYYY/MM",
            month
        )));
    }

    Ok(())
}

pub fn validate_file_type(file_name: &str, allowed_types: &[&str]) -> DashboardResult<()> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !allowed_types.contains(&extension.to_lowercase().as_str()) {
        return Err(DashboardError::configuration(format!(
            "File type '{}' not allowed. Allowed types: {}",
            extension,
            allowed_types.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month_key() {
        assert!(validate_month_key("2024/06").is_ok());
        assert!(validate_month_key("2024/6").is_err());
        assert!(validate_month_key("2024-06").is_err());
        assert!(validate_month_key("").is_err());
    }

    #[test]
    fn test_validate_file_type() {
        let allowed_types = &["xlsx", "xlsm"];
        assert!(validate_file_type("dashboard.XLSX", allowed_types).is_ok());
        assert!(validate_file_type("dashboard.csv", allowed_types).is_err());
        assert!(validate_file_type("dashboard", allowed_types).is_err());
    }
}
