use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::Grid;
use std::borrow::Cow;

/// Represents a named sheet held in memory, addressed by zero-based row and column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Cells row by row; rows may have different lengths
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            rows: Vec::new(),
        }
    }

    /// Creates a sheet from rows of anything convertible to a cell value.
    pub fn from_rows<R, C>(name: &str, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self {
            name: name.to_owned(),
            rows,
        }
    }

    /// Returns true if the sheet contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns of the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at (row, col), if the position lies inside the sheet.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }

    /// Appends a row at the bottom of the sheet.
    pub fn push_row<C: Into<CellValue>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Stores a value at (row, col), growing the sheet with empty cells as needed.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let record = &mut self.rows[row];
        if record.len() <= col {
            record.resize_with(col + 1, CellValue::default);
        }
        record[col] = value.into();
    }
}

impl Grid for Sheet {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn text(&self, row: usize, col: usize) -> Cow<'_, str> {
        match self.cell(row, col) {
            Some(CellValue::Text(value)) => Cow::Borrowed(value.as_str()),
            Some(value) => Cow::Owned(value.to_string()),
            None => Cow::Borrowed(""),
        }
    }
}

/// An ordered collection of named sheets, one table definition per sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    /// Workbook name (spreadsheet title)
    pub name: String,
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            sheets: Vec::new(),
        }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Looks up a sheet by exact name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::spreadsheet::*;

    #[test]
    fn sheet_initial() {
        let sheet = Sheet::new("users");

        assert!(sheet.is_empty());
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.col_count(), 0);
        assert_eq!(sheet.text(0, 0), "");
    }

    #[test]
    fn sheet_from_rows() {
        let sheet = Sheet::from_rows("users", vec![vec!["", "1", "id"], vec!["", "2"]]);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.text(0, 2), "id");
        assert_eq!(sheet.text(1, 1), "2");
        // Outside a short row and outside the sheet
        assert_eq!(sheet.text(1, 2), "");
        assert_eq!(sheet.text(5, 0), "");
    }

    #[test]
    fn sheet_set_grows() {
        let mut sheet = Sheet::new("users");
        sheet.set(2, 3, "users");

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 4);
        assert_eq!(sheet.cell(2, 0), Some(&CellValue::Empty));
        assert_eq!(sheet.text(2, 3), "users");

        sheet.set(0, 0, 1.0);
        assert_eq!(sheet.text(0, 0), "1");
        assert_eq!(sheet.row_count(), 3);
    }

    #[test]
    fn sheet_push_row() {
        let mut sheet = Sheet::new("users");
        sheet.push_row([CellValue::Empty, CellValue::Integer(7), CellValue::Boolean(true)]);

        assert_eq!(sheet.text(0, 1), "7");
        assert_eq!(sheet.text(0, 2), "TRUE");
    }

    #[test]
    fn workbook_lookup() {
        let mut workbook = Workbook::new("schema");
        workbook.push(Sheet::new("users"));
        workbook.push(Sheet::new("common"));

        assert!(workbook.sheet("common").is_some());
        assert!(workbook.sheet("Common").is_none());
        assert_eq!(workbook.sheet_names().collect::<Vec<_>>(), vec!["users", "common"]);
    }
}
