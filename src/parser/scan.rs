//! Row scanning over a table definition grid.
//!
//! Each column definition occupies one row, laid out from column B:
//!
//! | B  | C    | D    | E  | F        | G      | H     | I      | J       |
//! |----|------|------|----|----------|--------|-------|--------|---------|
//! | No | Name | Type | PK | Not Null | Unique | Index | Option | Comment |
//!
//! An empty "No" cell ends the table. A row with a "No" but no type is a
//! comment row and is skipped.
use crate::database::Column;
use crate::database::Key;
use crate::database::Table;
use crate::parser::ParseError;
use crate::parser::Parser;
use crate::spreadsheet::reference::index_to_reference;
use crate::spreadsheet::Grid;
use tracing::debug;
use tracing::trace;

const NO_COL: usize = 1;
const NAME_COL: usize = 2;
const TYPE_COL: usize = 3;
const PRIMARY_KEY_COL: usize = 4;
const NOT_NULL_COL: usize = 5;
const UNIQUE_COL: usize = 6;
const INDEX_COL: usize = 7;
const OPTION_COL: usize = 8;
const COMMENT_COL: usize = 9;

impl Parser {
    /// Parses one grid into a validated table.
    ///
    /// The own columns are scanned and their keys derived before the common
    /// columns are appended, so common columns never contribute keys.
    ///
    /// # Errors
    ///
    /// * `TableNameRequired` - the table name cell is blank
    /// * `NoColumns` - no column definition row was found
    pub fn parse_table<G: Grid + ?Sized>(&self, grid: &G) -> Result<Table, ParseError> {
        let name = grid.text(self.table_name_row, self.table_name_col).trim().to_owned();
        if name.is_empty() {
            return Err(ParseError::TableNameRequired {
                reference: index_to_reference(self.table_name_row, self.table_name_col),
            });
        }

        let mut columns = self.scan_columns(grid);
        if columns.is_empty() {
            return Err(ParseError::NoColumns { table: name });
        }

        let primary_key_columns = columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| column.name.clone())
            .collect::<Vec<_>>();
        let unique_keys = unique_keys(&columns);
        let index_keys = columns
            .iter()
            .filter(|column| column.index)
            .map(|column| Key::single(self.key_name(&column.name), &column.name))
            .collect::<Vec<_>>();

        columns.extend_from_slice(self.common_columns());

        debug!(
            table = %name,
            columns = columns.len(),
            primary_keys = primary_key_columns.len(),
            index_keys = index_keys.len(),
            "parsed table"
        );
        Ok(Table {
            name,
            columns,
            primary_key_columns,
            unique_keys,
            index_keys,
        })
    }

    /// Registers the columns appended to every table parsed afterwards.
    ///
    /// The grid is scanned like a table body; no table name is read. Common
    /// columns must not be part of the primary key nor carry an index.
    ///
    /// # Errors
    ///
    /// * `CommonColumnsAlreadySet` - a previous call succeeded; its columns are kept
    /// * `CommonColumnMustNotBePrimaryKey`, `CommonColumnMustNotHaveIndex`
    pub fn set_common_columns<G: Grid + ?Sized>(&mut self, grid: &G) -> Result<(), ParseError> {
        if self.common_columns.is_some() {
            return Err(ParseError::CommonColumnsAlreadySet);
        }

        let mut columns = self.scan_columns(grid);
        for column in columns.iter_mut() {
            if column.primary_key {
                return Err(ParseError::CommonColumnMustNotBePrimaryKey {
                    name: column.name.clone(),
                });
            }
            if column.index {
                return Err(ParseError::CommonColumnMustNotHaveIndex {
                    name: column.name.clone(),
                });
            }
            column.common = true;
        }

        debug!(columns = columns.len(), "registered common columns");
        self.common_columns = Some(columns);
        Ok(())
    }

    /// Collects column definitions from the start row up to the end-of-table sentinel.
    fn scan_columns<G: Grid + ?Sized>(&self, grid: &G) -> Vec<Column> {
        let mut columns = Vec::new();
        for row in self.start_row..grid.row_count() {
            if grid.text(row, NO_COL).is_empty() {
                debug!(cell = %index_to_reference(row, NO_COL), "end of table");
                break;
            }
            let kind = grid.text(row, TYPE_COL);
            if kind.is_empty() {
                trace!(cell = %index_to_reference(row, TYPE_COL), "skip row without type");
                continue;
            }
            columns.push(Column {
                name: grid.text(row, NAME_COL).into_owned(),
                kind: kind.into_owned(),
                primary_key: self.flag(grid, row, PRIMARY_KEY_COL),
                not_null: self.flag(grid, row, NOT_NULL_COL),
                unique: self.flag(grid, row, UNIQUE_COL),
                index: self.flag(grid, row, INDEX_COL),
                option: grid.text(row, OPTION_COL).into_owned(),
                comment: grid.text(row, COMMENT_COL).into_owned(),
                common: false,
            });
        }
        columns
    }

    /// A flag is set only when the cell equals the bool string exactly.
    fn flag<G: Grid + ?Sized>(&self, grid: &G, row: usize, col: usize) -> bool {
        grid.text(row, col).as_ref() == self.bool_string.as_str()
    }
}

/// Unique key groups spanning several columns.
///
/// A column flagged unique is rendered inline and produces no key here. The
/// sheet layout has no syntax for grouping columns into one composite unique
/// key yet, so no groups are derived.
fn unique_keys(_columns: &[Column]) -> Vec<Key> {
    Vec::new()
}
