//! Sheet snapshots exported to local files.
//!
//! CSV exports are read headerless and flexible, so ragged rows survive as
//! they are. XLSX worksheets are padded back to A1 so grid positions match
//! sheet positions.

use calamine::{open_workbook_from_rs, DataType, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::report::RawGrid;

pub async fn read_csv_grid(path: &Path) -> DashboardResult<RawGrid> {
    let data = tokio::fs::read(path).await?;
    parse_csv_grid(&data)
}

pub fn parse_csv_grid(data: &[u8]) -> DashboardResult<RawGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    Ok(grid)
}

pub async fn read_xlsx_grid(path: &Path, sheet_name: &str) -> DashboardResult<RawGrid> {
    let data = tokio::fs::read(path).await?;
    let sheet_name = sheet_name.to_string();

    tokio::task::spawn_blocking(move || parse_xlsx_grid(&data, &sheet_name))
        .await
        .map_err(|e| DashboardError::internal(format!("XLSX reader task failed: {}", e)))?
}

pub fn parse_xlsx_grid(data: &[u8], sheet_name: &str) -> DashboardResult<RawGrid> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(data))?;

    let range = workbook.worksheet_range(sheet_name).ok_or_else(|| {
        DashboardError::sheet_source(format!(
            "Worksheet '{}' not found (available: {})",
            sheet_name,
            workbook.sheet_names().join(", ")
        ))
    })??;

    // calamine ranges start at the first used cell, not at A1
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut grid: RawGrid = vec![Vec::new(); start_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col as usize];
        row.extend(cells.iter().map(|cell: &DataType| cell.to_string()));
        grid.push(row);
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_keeps_ragged_rows() {
        let data = "指標,2024年5月,2024年6月\n実績：通電数,\"1,000\"\n新規リード数,500,520\n".as_bytes();
        let grid = parse_csv_grid(data).unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["指標", "2024年5月", "2024年6月"]);
        assert_eq!(grid[1], vec!["実績：通電数", "1,000"]);
        assert_eq!(grid[2].len(), 3);
    }

    #[test]
    fn test_csv_rejects_invalid_utf8() {
        let err = parse_csv_grid(&[0x82, 0xa0, b',', b'1']).unwrap_err();
        assert_eq!(err.error_code(), "SHEET_SOURCE_ERROR");
    }

    #[tokio::test]
    async fn test_read_csv_grid_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "指標,2024年6月").unwrap();
        writeln!(file, "実績：案件化数,10").unwrap();

        let grid = read_csv_grid(file.path()).await.unwrap();
        assert_eq!(grid[1], vec!["実績：案件化数", "10"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_source_error() {
        let err = read_csv_grid(Path::new("/nonexistent/dashboard.csv")).await.unwrap_err();
        assert_eq!(err.error_code(), "SHEET_SOURCE_ERROR");
    }

    #[test]
    fn test_xlsx_rejects_non_workbook() {
        let err = parse_xlsx_grid(b"not a workbook", "全体ダッシュボード").unwrap_err();
        assert_eq!(err.error_code(), "SHEET_SOURCE_ERROR");
    }
}
