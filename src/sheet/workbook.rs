//! Document: the ordered multi-sheet container owned by every codec.

use super::worksheet::Sheet;
use crate::common::{Error, Result};

/// Ordered sequence of sheets, addressed 1-based.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }

    /// Get sheet `number` (1-based).
    pub fn sheet(&self, number: usize) -> Result<&Sheet> {
        number
            .checked_sub(1)
            .and_then(|i| self.sheets.get(i))
            .ok_or(Error::SheetNotFound(number))
    }

    pub fn sheet_mut(&mut self, number: usize) -> Result<&mut Sheet> {
        number
            .checked_sub(1)
            .and_then(|i| self.sheets.get_mut(i))
            .ok_or(Error::SheetNotFound(number))
    }

    /// Append a sheet; bare records are wrapped into a new sheet.
    pub fn insert_sheet(&mut self, data: impl Into<Sheet>) -> &mut Self {
        self.sheets.push(data.into());
        self
    }

    /// Remove sheet `number` (1-based) and return it.
    pub fn remove_sheet(&mut self, number: usize) -> Result<Sheet> {
        if number == 0 || number > self.sheets.len() {
            return Err(Error::SheetNotFound(number));
        }
        Ok(self.sheets.remove(number - 1))
    }

    /// Put `sheet` at position `number`, replacing what is there or
    /// appending when `number` is one past the end.
    pub fn set_sheet(&mut self, number: usize, sheet: Sheet) -> Result<()> {
        self.place_sheets(number, vec![sheet])
    }

    /// Place `sheets` at consecutive positions starting at `start`.
    ///
    /// The position is checked before anything is touched, so a failure
    /// leaves the document unchanged.
    pub fn place_sheets(&mut self, start: usize, sheets: Vec<Sheet>) -> Result<()> {
        if sheets.is_empty() {
            return Ok(());
        }
        if start == 0 || start > self.sheets.len() + 1 {
            return Err(Error::InvalidSheetIndex(start));
        }
        for (offset, sheet) in sheets.into_iter().enumerate() {
            let index = start - 1 + offset;
            if index < self.sheets.len() {
                self.sheets[index] = sheet;
            } else {
                self.sheets.push(sheet);
            }
        }
        Ok(())
    }
}

impl From<Vec<Sheet>> for Document {
    fn from(sheets: Vec<Sheet>) -> Self {
        Document { sheets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    fn one_cell(value: &str) -> Sheet {
        Sheet::from_records(vec![vec![Cell::new(value)]])
    }

    #[test]
    fn test_sheets_are_one_based() {
        let mut doc = Document::new();
        doc.insert_sheet(one_cell("first")).insert_sheet(vec![vec![Cell::new("second")]]);

        assert_eq!(doc.sheet(1).unwrap().cell(1, 1).unwrap().value(), "first");
        assert_eq!(doc.sheet(2).unwrap().cell(1, 1).unwrap().value(), "second");
        assert!(matches!(doc.sheet(0), Err(Error::SheetNotFound(0))));
        assert!(matches!(doc.sheet(3), Err(Error::SheetNotFound(3))));
    }

    #[test]
    fn test_remove_sheet() {
        let mut doc = Document::from(vec![one_cell("a"), one_cell("b")]);
        let removed = doc.remove_sheet(1).unwrap();
        assert_eq!(removed, one_cell("a"));
        assert_eq!(doc.sheet_count(), 1);
        assert!(matches!(doc.remove_sheet(2), Err(Error::SheetNotFound(2))));
    }

    #[test]
    fn test_place_sheets_replaces_then_appends() {
        let mut doc = Document::from(vec![one_cell("a"), one_cell("b")]);
        doc.place_sheets(2, vec![one_cell("x"), one_cell("y")]).unwrap();
        assert_eq!(doc.sheets(), &[one_cell("a"), one_cell("x"), one_cell("y")]);
    }

    #[test]
    fn test_place_sheets_rejects_gap_without_mutation() {
        let mut doc = Document::from(vec![one_cell("a")]);
        let err = doc.place_sheets(3, vec![one_cell("x")]).unwrap_err();
        assert!(matches!(err, Error::InvalidSheetIndex(3)));
        assert_eq!(doc.sheets(), &[one_cell("a")]);
    }
}
