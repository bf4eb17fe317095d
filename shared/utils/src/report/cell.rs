//! Cell coercion from sheet text to optional numbers.

/// Cell texts the sheet uses for "no value".
pub const ABSENT_MARKERS: &[&str] = &["-", "---", "#DIV/0!", "#N/A"];

/// Converts a raw cell into a number.
///
/// Thousands separators are dropped and a trailing `%` divides by 100.
/// Blank cells, absent markers, unparsable text and non-finite results all
/// come back as `None`; a bad cell never fails the report.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() || ABSENT_MARKERS.contains(&cleaned.as_str()) {
        return None;
    }

    let value = match cleaned.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()? / 100.0,
        None => cleaned.parse::<f64>().ok()?,
    };

    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_and_grouped_numbers() {
        assert_eq!(parse_cell("1,234"), Some(1234.0));
        assert_eq!(parse_cell("  42 "), Some(42.0));
        assert_eq!(parse_cell("-3.5"), Some(-3.5));
        assert_eq!(parse_cell("1,234,567.25"), Some(1_234_567.25));
    }

    #[test]
    fn test_percentages() {
        assert_eq!(parse_cell("15%"), Some(0.15));
        assert_eq!(parse_cell("1,200%"), Some(12.0));
        assert_eq!(parse_cell("%"), None);
    }

    #[test]
    fn test_absent_values() {
        for raw in ["", "   ", "\u{3000}", "-", "---", "#DIV/0!", "#N/A", "abc", "12abc", "inf", "NaN"] {
            assert_eq!(parse_cell(raw), None, "expected {:?} to be absent", raw);
        }
    }

    #[test]
    fn test_only_ascii_decimal_text_is_numeric() {
        assert_eq!(parse_cell("１２"), None);
        assert_eq!(parse_cell("1_000"), None);
        assert_eq!(parse_cell(" 12 "), Some(12.0));
    }

    proptest! {
        /// Integers rendered with thousands separators read back exactly.
        #[test]
        fn prop_grouped_integers_parse(value in 0u64..1_000_000_000u64) {
            let digits = value.to_string();
            let mut grouped = String::new();
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }

            prop_assert_eq!(parse_cell(&grouped), Some(value as f64));
        }

        /// Arbitrary text never panics and never yields a non-finite number.
        #[test]
        fn prop_never_non_finite(raw in ".{0,24}") {
            if let Some(value) = parse_cell(&raw) {
                prop_assert!(value.is_finite());
            }
        }
    }
}
