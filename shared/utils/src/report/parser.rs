//! Dashboard Report Parser
//!
//! Turns a raw sheet grid into a [`DashboardReport`] by label matching.

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use salesboard_models::{DashboardReport, FunnelStage, KpiCard, MonthlyRow};
use tracing::debug;

use super::grid::{find_header_row, IndexedGrid, MonthColumns};
use super::layout::{ReportLayout, DASHBOARD_LAYOUT};
use crate::error::{DashboardError, DashboardResult};

/// Offset of the report timestamp (JST).
pub const REPORT_UTC_OFFSET_SECONDS: i32 = 9 * 3600;

fn report_offset() -> FixedOffset {
    FixedOffset::east_opt(REPORT_UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Parser over a fixed [`ReportLayout`].
#[derive(Debug, Clone, Copy)]
pub struct ReportParser {
    layout: &'static ReportLayout,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self {
            layout: &DASHBOARD_LAYOUT,
        }
    }
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: &'static ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &'static ReportLayout {
        self.layout
    }

    /// Parses the grid, stamping the report with the current time.
    pub fn parse(&self, grid: &[Vec<String>], selected_month: Option<&str>) -> DashboardResult<DashboardReport> {
        self.parse_at(grid, selected_month, Utc::now())
    }

    /// Parses the grid, stamping the report with `generated_at`.
    ///
    /// An empty, missing or unknown `selected_month` selects the latest month.
    pub fn parse_at(
        &self,
        grid: &[Vec<String>],
        selected_month: Option<&str>,
        generated_at: DateTime<Utc>,
    ) -> DashboardResult<DashboardReport> {
        if grid.is_empty() {
            return Err(DashboardError::sheet_structure("Sheet data is empty"));
        }

        let header_index = find_header_row(grid, self.layout.header_anchor).ok_or_else(|| {
            DashboardError::sheet_structure(format!(
                "Dashboard header row (column A = '{}') not found",
                self.layout.header_anchor
            ))
        })?;

        let months = MonthColumns::from_header_row(&grid[header_index]);
        let latest = months.latest().ok_or_else(|| {
            DashboardError::sheet_structure("No month columns found (headers must look like 'YYYY年MM月')")
        })?;

        let selected = match selected_month {
            Some(month) if months.column(month).is_some() => month,
            requested => {
                if let Some(month) = requested.filter(|m| !m.is_empty()) {
                    debug!(requested = month, fallback = latest, "Requested month not in sheet, using latest");
                }
                latest
            }
        };
        let selected_column = months.column(selected).ok_or_else(|| {
            DashboardError::internal(format!("Selected month {} has no column", selected))
        })?;

        let sheet = IndexedGrid::new(grid);
        debug!(
            header_row = header_index,
            months = months.len(),
            labels = sheet.row_index().len(),
            selected_month = selected,
            "Parsing dashboard sheet"
        );

        let kpi_cards = self
            .layout
            .kpis
            .iter()
            .map(|kpi| {
                let target = kpi.target_row.and_then(|row| sheet.value(row, selected_column));
                let actual = kpi.actual_row.and_then(|row| sheet.value(row, selected_column));
                KpiCard::new(kpi.label, target, actual, kpi.unit)
            })
            .collect();

        let funnel_stages = self
            .layout
            .funnel
            .iter()
            .map(|stage| {
                let actual = sheet.value(stage.actual_row, selected_column);
                let benchmark = stage.benchmark_row.and_then(|row| sheet.value(row, selected_column));
                FunnelStage::new(stage.label, actual, benchmark, stage.fallback_benchmark)
            })
            .collect();

        Ok(DashboardReport {
            available_months: months.months(),
            selected_month: selected.to_string(),
            kpi_cards,
            funnel_stages,
            section_ankenjika: self.build_section(&sheet, &months, self.layout.section_ankenjika),
            section_apo_kakutoku: self.build_section(&sheet, &months, self.layout.section_apo_kakutoku),
            section_lead_kakutoku: self.build_section(&sheet, &months, self.layout.section_lead_kakutoku),
            last_updated: generated_at
                .with_timezone(&report_offset())
                .to_rfc3339_opts(SecondsFormat::Micros, false),
        })
    }

    fn build_section(&self, sheet: &IndexedGrid<'_>, months: &MonthColumns, labels: &[&str]) -> Vec<MonthlyRow> {
        labels
            .iter()
            .map(|&label| {
                let fixed = self.layout.fixed_value(label);
                let columns = months
                    .iter()
                    .map(|(month, column)| {
                        let value = fixed.or_else(|| sheet.value(label, column));
                        (month.to_string(), value)
                    })
                    .collect();

                MonthlyRow {
                    metric: self.layout.display_label(label).to_string(),
                    columns,
                }
            })
            .collect()
    }
}

/// Parses the grid with the dashboard layout.
pub fn parse_dashboard(grid: &[Vec<String>], selected_month: Option<&str>) -> DashboardResult<DashboardReport> {
    ReportParser::new().parse(grid, selected_month)
}
