//! Dashboard Report Module
//!
//! Label-driven extraction of the monthly inside-sales report from a raw
//! sheet grid. The fixed sheet layout lives in [`layout`]; the parser never
//! hardcodes a row label.

pub mod cell;
pub mod grid;
pub mod layout;
pub mod parser;

pub use cell::parse_cell;
pub use grid::{clean_label, IndexedGrid, MonthColumns, RawGrid, RowIndex};
pub use layout::{FunnelDefinition, KpiDefinition, ReportLayout, DASHBOARD_LAYOUT};
pub use parser::{parse_dashboard, ReportParser};
