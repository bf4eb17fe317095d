//! Top-level dashboard report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{FunnelStage, KpiCard};

/// One metric across every month column, keyed by "YYYY/MM".
///
/// A `BTreeMap` keeps the columns in chronological order since month keys
/// are fixed-width and zero-padded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRow {
    pub metric: String,
    pub columns: BTreeMap<String, Option<f64>>,
}

impl MonthlyRow {
    pub fn value(&self, month: &str) -> Option<f64> {
        self.columns.get(month).copied().flatten()
    }
}

/// The complete dashboard response for one parse of the sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// Month keys found in the header row, ascending.
    pub available_months: Vec<String>,
    pub selected_month: String,
    pub kpi_cards: Vec<KpiCard>,
    pub funnel_stages: Vec<FunnelStage>,
    /// Deal conversion (案件化) section.
    pub section_ankenjika: Vec<MonthlyRow>,
    /// Appointment acquisition (アポ獲得) section.
    pub section_apo_kakutoku: Vec<MonthlyRow>,
    /// Lead acquisition (リード獲得) section.
    pub section_lead_kakutoku: Vec<MonthlyRow>,
    /// RFC 3339 timestamp in UTC+09:00.
    pub last_updated: String,
}

impl DashboardReport {
    pub fn kpi_card(&self, label: &str) -> Option<&KpiCard> {
        self.kpi_cards.iter().find(|card| card.label == label)
    }

    pub fn funnel_stage(&self, label: &str) -> Option<&FunnelStage> {
        self.funnel_stages.iter().find(|stage| stage.label == label)
    }
}
