//! Fixed sheet layout of the inside-sales dashboard.
//!
//! Every label below is an exact-match contract with the upstream sheet
//! (compared after trimming ASCII and full-width spaces). Changing the sheet
//! means changing this table, not the parser.

use salesboard_models::Unit;

/// Column-A label of the row that carries the month headers.
pub const HEADER_ANCHOR: &str = "指標";

// 案件化 (deal conversion)
pub const ROW_ANKENJIKA_TARGET: &str = "目標：案件化数";
pub const ROW_ANKENJIKA_ACTUAL: &str = "実績：案件化数";
pub const ROW_ANKENJIKA_RATE_TARGET: &str = "目標：案件化率";
pub const ROW_ANKENJIKA_RATE_ACTUAL: &str = "実績：案件化率";
pub const ROW_APO_JISSHI: &str = "実績：アポ実施数";

// アポ獲得 (appointment acquisition); the sheet puts spaces around the slash
pub const ROW_APO_TARGET: &str = "目標：アポ数";
pub const ROW_APO_ACTUAL: &str = "実績：アポ数";
pub const ROW_APO_RATE_TSUUDEN: &str = "実績：アポ化率（新規アポ数 / 通電数）";
pub const ROW_APO_ACQUISITION_RATE_TARGET: &str = "目標：アポ獲得率";
pub const ROW_TSUUDEN_RATE: &str = "実績：通電率";
pub const ROW_TSUUDEN_RATE_TARGET: &str = "目標：通電率";
pub const ROW_TSUUDEN_COUNT: &str = "実績：通電数";

// リード獲得 (lead acquisition)
pub const ROW_LEAD_VALID_TARGET: &str = "目標：有効リード数";
pub const ROW_LEAD_VALID_ACTUAL: &str = "実績：有効リード数";
pub const ROW_LEAD_NEW: &str = "新規リード数";

/// A headline card: target and actual rows read at the selected month.
#[derive(Debug, Clone, Copy)]
pub struct KpiDefinition {
    pub label: &'static str,
    pub target_row: Option<&'static str>,
    pub actual_row: Option<&'static str>,
    pub unit: Unit,
}

/// A funnel rate compared against a sheet benchmark or a fixed fallback.
#[derive(Debug, Clone, Copy)]
pub struct FunnelDefinition {
    pub label: &'static str,
    pub actual_row: &'static str,
    pub benchmark_row: Option<&'static str>,
    /// Must be nonzero.
    pub fallback_benchmark: f64,
}

/// Immutable tables that drive one report parse.
#[derive(Debug, Clone, Copy)]
pub struct ReportLayout {
    pub header_anchor: &'static str,
    pub kpis: &'static [KpiDefinition],
    pub funnel: &'static [FunnelDefinition],
    pub section_ankenjika: &'static [&'static str],
    pub section_apo_kakutoku: &'static [&'static str],
    pub section_lead_kakutoku: &'static [&'static str],
    /// Rows whose value is constant for every month instead of read from the sheet.
    pub fixed_values: &'static [(&'static str, f64)],
    /// Sheet label to display label.
    pub label_overrides: &'static [(&'static str, &'static str)],
}

impl ReportLayout {
    pub fn fixed_value(&self, label: &str) -> Option<f64> {
        self.fixed_values
            .iter()
            .find(|(row, _)| *row == label)
            .map(|(_, value)| *value)
    }

    pub fn display_label<'a>(&self, label: &'a str) -> &'a str {
        self.label_overrides
            .iter()
            .find(|(row, _)| *row == label)
            .map_or(label, |(_, display)| *display)
    }
}

pub const DASHBOARD_LAYOUT: ReportLayout = ReportLayout {
    header_anchor: HEADER_ANCHOR,
    kpis: &[
        KpiDefinition {
            label: "案件獲得",
            target_row: Some(ROW_ANKENJIKA_TARGET),
            actual_row: Some(ROW_ANKENJIKA_ACTUAL),
            unit: Unit::Count,
        },
        KpiDefinition {
            label: "アポ獲得",
            target_row: Some(ROW_APO_TARGET),
            actual_row: Some(ROW_APO_ACTUAL),
            unit: Unit::Count,
        },
        KpiDefinition {
            label: "通電数",
            target_row: None,
            actual_row: Some(ROW_TSUUDEN_COUNT),
            unit: Unit::Count,
        },
        KpiDefinition {
            label: "有効リード数",
            target_row: Some(ROW_LEAD_VALID_TARGET),
            actual_row: Some(ROW_LEAD_VALID_ACTUAL),
            unit: Unit::Count,
        },
        KpiDefinition {
            label: "新規リード数",
            target_row: None,
            actual_row: Some(ROW_LEAD_NEW),
            unit: Unit::Count,
        },
    ],
    funnel: &[
        FunnelDefinition {
            label: "案件化率",
            actual_row: ROW_ANKENJIKA_RATE_ACTUAL,
            benchmark_row: Some(ROW_ANKENJIKA_RATE_TARGET),
            fallback_benchmark: 0.15,
        },
        FunnelDefinition {
            label: "アポ獲得率",
            actual_row: ROW_APO_RATE_TSUUDEN,
            benchmark_row: None,
            fallback_benchmark: 0.15,
        },
        FunnelDefinition {
            label: "通電率",
            actual_row: ROW_TSUUDEN_RATE,
            benchmark_row: None,
            fallback_benchmark: 0.50,
        },
    ],
    section_ankenjika: &[
        ROW_ANKENJIKA_TARGET,
        ROW_ANKENJIKA_ACTUAL,
        ROW_ANKENJIKA_RATE_TARGET,
        ROW_ANKENJIKA_RATE_ACTUAL,
        ROW_APO_JISSHI,
    ],
    section_apo_kakutoku: &[
        ROW_APO_TARGET,
        ROW_APO_ACTUAL,
        ROW_APO_RATE_TSUUDEN,
        ROW_APO_ACQUISITION_RATE_TARGET,
        ROW_TSUUDEN_RATE,
        ROW_TSUUDEN_RATE_TARGET,
        ROW_TSUUDEN_COUNT,
    ],
    section_lead_kakutoku: &[
        ROW_LEAD_VALID_TARGET,
        ROW_LEAD_VALID_ACTUAL,
        ROW_LEAD_NEW,
    ],
    fixed_values: &[
        (ROW_APO_ACQUISITION_RATE_TARGET, 0.15),
        (ROW_TSUUDEN_RATE_TARGET, 0.50),
    ],
    label_overrides: &[
        (ROW_APO_TARGET, "目標：アポ獲得数"),
        (ROW_APO_ACTUAL, "実績：アポ獲得数"),
        (ROW_APO_RATE_TSUUDEN, "実績：アポ獲得率"),
        (ROW_APO_ACQUISITION_RATE_TARGET, "目標：アポ獲得率（15%）"),
        (ROW_TSUUDEN_RATE_TARGET, "目標：通電率（50%）"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_benchmarks_are_nonzero() {
        assert!(DASHBOARD_LAYOUT
            .funnel
            .iter()
            .all(|stage| stage.fallback_benchmark != 0.0));
    }

    #[test]
    fn test_fixed_value_and_display_label_lookup() {
        assert_eq!(DASHBOARD_LAYOUT.fixed_value(ROW_TSUUDEN_RATE_TARGET), Some(0.50));
        assert_eq!(DASHBOARD_LAYOUT.fixed_value(ROW_TSUUDEN_RATE), None);
        assert_eq!(DASHBOARD_LAYOUT.display_label(ROW_APO_TARGET), "目標：アポ獲得数");
        assert_eq!(DASHBOARD_LAYOUT.display_label(ROW_LEAD_NEW), ROW_LEAD_NEW);
    }
}
