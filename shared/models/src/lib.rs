//! # Salesboard Report Models
//!
//! Value types produced by the dashboard report parser and served by the
//! dashboard API. Every model serializes with serde into the JSON shape the
//! dashboard frontend consumes.
//!
//! ## Key Models
//!
//! - **KpiCard**: target vs. actual for one headline metric in the selected month
//! - **FunnelStage**: a conversion rate measured against its benchmark
//! - **MonthlyRow**: one metric across every month column of the sheet
//! - **DashboardReport**: the complete response for one parse
//!
//! ## Optional numbers
//!
//! Spreadsheet cells are frequently blank or hold error markers. Those are
//! carried as `None` and serialize as JSON `null`; no sentinel numbers are
//! used anywhere.

pub mod kpi;
pub mod funnel;
pub mod report;

pub use kpi::*;
pub use funnel::*;
pub use report::*;

#[cfg(test)]
pub mod property_tests;
