//! Sheet: one table of rows.

use super::types::{Cell, Records, Row};
use crate::common::{Error, Result};

/// One table within a [`Document`](super::Document).
///
/// Rows and columns are addressed 1-based. Rows are not required to have
/// the same number of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    records: Records,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet owning `records`
    pub fn from_records(records: Records) -> Self {
        Sheet { records }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn into_records(self) -> Records {
        self.records
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.records.iter()
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.records.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a cell by row and column (1-based).
    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        row.checked_sub(1)
            .and_then(|r| self.records.get(r))
            .and_then(|cells| column.checked_sub(1).and_then(|c| cells.get(c)))
            .ok_or(Error::CellNotFound { row, column })
    }

    /// Get a cell by coordinate (e.g. "B3").
    pub fn cell_by_coordinate(&self, coordinate: &str) -> Result<&Cell> {
        let (row, column) = parse_coordinate(coordinate).ok_or_else(|| {
            Error::UnknownError(format!("Invalid coordinate: {}", coordinate))
        })?;
        self.cell(row, column)
    }

    /// Get a row (1-based).
    pub fn row(&self, row: usize) -> Result<&Row> {
        row.checked_sub(1)
            .and_then(|r| self.records.get(r))
            .ok_or(Error::RowNotFound(row))
    }

    /// Get a column (1-based).
    ///
    /// Rows too short to reach the column yield `None` at their position.
    pub fn column(&self, column: usize) -> Result<Vec<Option<&Cell>>> {
        if column == 0 || column > self.column_count() {
            return Err(Error::ColumnNotFound(column));
        }
        Ok(self
            .records
            .iter()
            .map(|cells| cells.get(column - 1))
            .collect())
    }

    /// Append a row.
    pub fn insert_record(&mut self, row: Row) -> &mut Self {
        self.records.push(row);
        self
    }

    /// Insert a row so that it becomes row `index` (1-based, up to one past the end).
    pub fn insert_record_at(&mut self, index: usize, row: Row) -> Result<&mut Self> {
        if index == 0 || index > self.records.len() + 1 {
            return Err(Error::RowNotFound(index));
        }
        self.records.insert(index - 1, row);
        Ok(self)
    }

    /// Remove row `index` (1-based) and return it.
    pub fn remove_record(&mut self, index: usize) -> Result<Row> {
        if index == 0 || index > self.records.len() {
            return Err(Error::RowNotFound(index));
        }
        Ok(self.records.remove(index - 1))
    }

    /// Replace row `index` (1-based), returning the previous row.
    pub fn replace_record(&mut self, index: usize, row: Row) -> Result<Row> {
        let slot = index
            .checked_sub(1)
            .and_then(|i| self.records.get_mut(i))
            .ok_or(Error::RowNotFound(index))?;
        Ok(std::mem::replace(slot, row))
    }

    /// Replace the whole body.
    pub fn set_records(&mut self, records: Records) -> &mut Self {
        self.records = records;
        self
    }
}

impl From<Records> for Sheet {
    fn from(records: Records) -> Self {
        Sheet::from_records(records)
    }
}

impl FromIterator<Row> for Sheet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Sheet::from_records(iter.into_iter().collect())
    }
}

/// Convert a column number to letters (1=A, 26=Z, 27=AA).
pub fn column_letters(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        column -= 1;
        letters.push(b'A' + (column % 26) as u8);
        column /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Parse a coordinate like "AA10" into (row, column), both 1-based.
fn parse_coordinate(coordinate: &str) -> Option<(usize, usize)> {
    let split = coordinate.find(|c: char| c.is_ascii_digit())?;
    let (col_str, row_str) = coordinate.split_at(split);
    if col_str.is_empty() || !col_str.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let column = col_str.chars().try_fold(0usize, |acc, c| {
        acc.checked_mul(26)?
            .checked_add((c.to_ascii_uppercase() as u8 - b'A' + 1) as usize)
    })?;
    let row = row_str.parse::<usize>().ok()?;
    Some((row, column))
}
