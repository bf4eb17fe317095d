//! KPI card models.

use serde::{Deserialize, Serialize};

/// Display unit of a KPI card value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Unit {
    /// Item count ("件").
    #[serde(rename = "件")]
    Count,
    /// Ratio shown as a percentage ("%").
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "件",
            Self::Percent => "%",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target vs. actual for one headline metric in the selected month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiCard {
    pub label: String,
    pub target: Option<f64>,
    pub actual: Option<f64>,
    pub achievement_rate: Option<f64>,
    pub unit: Unit,
}

impl KpiCard {
    /// Builds a card, deriving `achievement_rate` from `actual / target`.
    pub fn new(label: impl Into<String>, target: Option<f64>, actual: Option<f64>, unit: Unit) -> Self {
        Self {
            label: label.into(),
            target,
            actual,
            achievement_rate: achievement_rate(actual, target),
            unit,
        }
    }
}

/// `actual / target`, or `None` when either side is missing or the target is zero.
pub fn achievement_rate(actual: Option<f64>, target: Option<f64>) -> Option<f64> {
    match (actual, target) {
        (Some(actual), Some(target)) if target != 0.0 => Some(actual / target),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_rate_requires_nonzero_target() {
        assert_eq!(achievement_rate(Some(10.0), Some(20.0)), Some(0.5));
        assert_eq!(achievement_rate(Some(10.0), Some(0.0)), None);
        assert_eq!(achievement_rate(Some(10.0), None), None);
        assert_eq!(achievement_rate(None, Some(20.0)), None);
    }

    #[test]
    fn test_unit_serializes_as_symbol() {
        let card = KpiCard::new("通電数", None, Some(42.0), Unit::Count);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["unit"], "件");
        assert!(json["target"].is_null());
        assert!(json["achievement_rate"].is_null());
        assert_eq!(json["actual"], 42.0);
        assert_eq!(serde_json::to_value(Unit::Percent).unwrap(), "%");
    }
}
