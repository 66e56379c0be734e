//! # Spreadsheet Access Module
//!
//! Grid abstraction over table definition sheets. The parser only ever asks for
//! "the cell at (row, col) as text", so any backing store works: the in-memory
//! [`Sheet`], plain string matrices, or an adapter over a spreadsheet API.
use std::borrow::Cow;
use thiserror::Error;

pub mod cell;
pub mod criteria;
pub mod reference;
pub mod sheet;

pub use cell::CellValue;
pub use criteria::Criteria;
pub use sheet::Sheet;
pub use sheet::Workbook;

/// Errors raised while looking up sheets in a workbook.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Requested sheet does not exist in the workbook
    #[error("Sheet not found: '{name}'")]
    SheetNotFound { name: String },
}

/// Read access to a rectangular region of cells coerced to text.
pub trait Grid {
    /// Number of rows; scanning never goes past this extent.
    fn row_count(&self) -> usize;

    /// Text of the cell at the zero-based (row, col), empty outside the grid.
    fn text(&self, row: usize, col: usize) -> Cow<'_, str>;
}

impl<G: Grid + ?Sized> Grid for &G {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn text(&self, row: usize, col: usize) -> Cow<'_, str> {
        (**self).text(row, col)
    }
}

impl Grid for Vec<Vec<String>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn text(&self, row: usize, col: usize) -> Cow<'_, str> {
        self.get(row)
            .and_then(|record| record.get(col))
            .map(|value| Cow::Borrowed(value.as_str()))
            .unwrap_or(Cow::Borrowed(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_matrix_grid() {
        let grid = vec![
            vec!["".to_owned(), "users".to_owned()],
            vec!["1".to_owned()],
        ];
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.text(0, 1), "users");
        assert_eq!(grid.text(1, 1), "");
        assert_eq!(grid.text(9, 9), "");
    }

    #[test]
    fn grid_by_reference() {
        fn first<G: Grid>(grid: G) -> String {
            grid.text(0, 0).into_owned()
        }
        let sheet = Sheet::from_rows("users", vec![vec!["x"]]);
        assert_eq!(first(&sheet), "x");
    }
}
