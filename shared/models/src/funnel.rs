//! Funnel stage models.

use serde::{Deserialize, Serialize};

/// A conversion rate measured against its benchmark.
///
/// The benchmark is never absent: when the sheet has no usable value the
/// stage falls back to a fixed default, so `achievement_rate` only depends
/// on whether `actual` is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunnelStage {
    pub label: String,
    pub actual: Option<f64>,
    pub benchmark: f64,
    pub achievement_rate: Option<f64>,
}

impl FunnelStage {
    /// Builds a stage from the sheet benchmark, falling back to `fallback`
    /// when the sheet value is missing or zero.
    ///
    /// `fallback` must be nonzero.
    pub fn new(label: impl Into<String>, actual: Option<f64>, sheet_benchmark: Option<f64>, fallback: f64) -> Self {
        let benchmark = match sheet_benchmark {
            Some(value) if value != 0.0 => value,
            _ => fallback,
        };
        let achievement_rate = match actual {
            Some(actual) if benchmark != 0.0 => Some(actual / benchmark),
            _ => None,
        };

        Self {
            label: label.into(),
            actual,
            benchmark,
            achievement_rate,
        }
    }
}
