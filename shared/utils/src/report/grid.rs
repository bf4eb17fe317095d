//! Positional lookups over a raw sheet grid.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::cell::parse_cell;

/// One sheet snapshot: rows of cell text, possibly ragged.
pub type RawGrid = Vec<Vec<String>>;

/// Trims ASCII whitespace and the full-width space (U+3000) from both ends.
pub fn clean_label(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\u{3000}')
}

/// Index of the first row whose column A equals `anchor` after cleaning.
pub fn find_header_row(grid: &[Vec<String>], anchor: &str) -> Option<usize> {
    grid.iter().position(|row| {
        row.first()
            .map_or(false, |first| clean_label(first) == anchor)
    })
}

fn month_header_regex() -> &'static Regex {
    static MONTH_HEADER: OnceLock<Regex> = OnceLock::new();
    MONTH_HEADER.get_or_init(|| {
        Regex::new(r"^([0-9]{4})年([0-9]{1,2})月").expect("month header pattern is valid")
    })
}

/// Normalizes a header such as `2024年6月` into the month key `2024/06`.
pub fn month_key(header: &str) -> Option<String> {
    let captures = month_header_regex().captures(clean_label(header))?;
    Some(format!("{}/{:0>2}", &captures[1], &captures[2]))
}

/// Month key ("YYYY/MM") to column position, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthColumns {
    columns: BTreeMap<String, usize>,
}

impl MonthColumns {
    pub fn from_header_row(header_row: &[String]) -> Self {
        let mut columns = BTreeMap::new();
        for (index, header) in header_row.iter().enumerate() {
            if let Some(key) = month_key(header) {
                columns.insert(key, index);
            }
        }

        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Month keys in ascending (and therefore chronological) order.
    pub fn months(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    pub fn latest(&self) -> Option<&str> {
        self.columns.keys().next_back().map(String::as_str)
    }

    pub fn column(&self, month: &str) -> Option<usize> {
        self.columns.get(month).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|(month, column)| (month.as_str(), *column))
    }
}

/// Cleaned column-A label to row position; the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    rows: HashMap<String, usize>,
}

impl RowIndex {
    pub fn build(grid: &[Vec<String>]) -> Self {
        let mut rows = HashMap::new();
        for (index, row) in grid.iter().enumerate() {
            let Some(first) = row.first() else {
                continue;
            };
            let label = clean_label(first);
            if !label.is_empty() {
                rows.entry(label.to_string()).or_insert(index);
            }
        }

        Self { rows }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.rows.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A grid together with its row index, for numeric lookups by label.
#[derive(Debug)]
pub struct IndexedGrid<'a> {
    grid: &'a [Vec<String>],
    rows: RowIndex,
}

impl<'a> IndexedGrid<'a> {
    pub fn new(grid: &'a [Vec<String>]) -> Self {
        Self {
            grid,
            rows: RowIndex::build(grid),
        }
    }

    /// Numeric value at (`label`, `column`); `None` when the row is missing,
    /// the row is too short, or the cell does not hold a number.
    pub fn value(&self, label: &str, column: usize) -> Option<f64> {
        let row = self.grid.get(self.rows.get(label)?)?;
        parse_cell(row.get(column)?)
    }

    pub fn row_index(&self) -> &RowIndex {
        &self.rows
    }
}
