//! # tdconv
//!
//! Converts table definitions kept in spreadsheets into schema artifacts.
//!
//! Each sheet describes one table: a table name cell, then one row per column
//! with its type, flags (primary key, not null, unique, index), a DDL option
//! and a comment. Columns shared by every table (audit timestamps, ...) can
//! live on a dedicated sheet and are appended to each parsed table.
//!
//! ## Features
//!
//! - **Configurable layout**: table name cell, first column row, truthy flag
//!   token and key naming, validated as each option is applied
//! - **Common columns**: registered once, appended to every table
//! - **Key synthesis**: one named key per indexed column
//! - **Formatters**: MySQL DDL and Go structs, with pluggable header and footer hooks
//!
//! ## Example
//!
//! ```
//! use tdconv::formatter::{render, SqlFormatter};
//! use tdconv::parser::Parser;
//! use tdconv::spreadsheet::{Criteria, Sheet, Workbook};
//!
//! let users = Sheet::from_rows("users", vec![
//!     vec![],
//!     vec!["", "users"],
//!     vec![],
//!     vec![],
//!     vec!["", "1", "id", "INT", "yes", "yes"],
//! ]);
//!
//! let mut workbook = Workbook::new("schema");
//! workbook.push(users);
//!
//! let mut parser = Parser::default();
//! let tables = tdconv::convert(&mut parser, &workbook, &Criteria::default()).unwrap();
//! let sql = render(&SqlFormatter::default(), &tables).unwrap();
//! assert!(sql.contains("`id` INT NOT NULL,\n    PRIMARY KEY (id)"));
//! ```
pub mod database;
pub mod error;
pub mod formatter;
mod helpers;
pub mod parser;
pub mod spreadsheet;

use crate::database::TableSet;
use crate::parser::Parser;
use crate::spreadsheet::Criteria;
use crate::spreadsheet::SpreadsheetError;
use crate::spreadsheet::Workbook;
use anyhow::{Context, Result};
use tracing::debug;

pub use crate::database::{Column, Key, Table};
pub use crate::error::TdconvError;
pub use crate::parser::{ParseError, ParseErrorKind, ParseOption};

/// Parses every table sheet of a workbook into a table set.
///
/// When `criteria` names a common sheet, its columns are registered with
/// `parser` first and that sheet is not parsed as a table. The remaining sheets
/// are parsed in workbook order if they match the criteria, up to its limit.
///
/// # Errors
///
/// Returns an error naming the sheet if the common sheet is missing or if any
/// sheet fails to parse.
pub fn convert(parser: &mut Parser, workbook: &Workbook, criteria: &Criteria) -> Result<TableSet> {
    if let Some(name) = &criteria.common_sheet_name {
        let sheet = workbook
            .sheet(name)
            .ok_or_else(|| SpreadsheetError::SheetNotFound { name: name.to_owned() })?;
        parser
            .set_common_columns(sheet)
            .with_context(|| format!("Failed to register common columns from sheet '{name}'"))?;
    }

    let mut set = TableSet::new(&workbook.name);
    let sheets = workbook
        .sheets
        .iter()
        .filter(|sheet| !criteria.is_common(&sheet.name) && criteria.accept(&sheet.name))
        .take(criteria.sheet_limit.unwrap_or(usize::MAX));
    for sheet in sheets {
        let table = parser
            .parse_table(sheet)
            .with_context(|| format!("Failed to parse sheet '{}'", sheet.name))?;
        set.push(table);
    }
    debug!(workbook = %workbook.name, tables = set.tables.len(), "converted workbook");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::Sheet;
    use pretty_assertions::assert_eq;

    fn table_sheet(name: &str, table_name: &str, columns: &[&str]) -> Sheet {
        let mut sheet = Sheet::new(name);
        sheet.set(1, 1, table_name);
        for (index, column) in columns.iter().enumerate() {
            let no = (index + 1).to_string();
            let row = ["", no.as_str(), *column, "INT", "no", "yes", "no", "no", "", ""];
            sheet.set(4 + index, 0, "");
            sheet.rows[4 + index] = row.into_iter().map(Into::into).collect();
        }
        sheet
    }

    fn workbook() -> Workbook {
        let mut workbook = Workbook::new("schema");
        workbook.push(table_sheet("users", "users", &["id", "name"]));
        workbook.push(table_sheet("common", "", &["created_at"]));
        workbook.push(table_sheet("m_items", "items", &["id"]));
        workbook.push(table_sheet("m_tags", "tags", &["id"]));
        workbook
    }

    fn table_names(set: &TableSet) -> Vec<&str> {
        set.tables.iter().map(|table| table.name.as_str()).collect()
    }

    #[test]
    fn convert_with_common_sheet() {
        let mut parser = Parser::default();
        let criteria = Criteria::default().with_common_sheet_name("common");
        let set = convert(&mut parser, &workbook(), &criteria).unwrap();

        assert_eq!(set.name, "schema");
        assert_eq!(table_names(&set), vec!["users", "items", "tags"]);
        let users = set.table("users").unwrap();
        let columns: Vec<_> = users.columns.iter().map(|c| (c.name.as_str(), c.common)).collect();
        assert_eq!(columns, vec![("id", false), ("name", false), ("created_at", true)]);
    }

    #[test]
    fn convert_filtered_and_limited() {
        let mut parser = Parser::default();
        let criteria = Criteria::default()
            .with_common_sheet_name("common")
            .with_sheet_name_patterns(&["m_*"])
            .unwrap()
            .with_sheet_limit(1);
        let set = convert(&mut parser, &workbook(), &criteria).unwrap();

        assert_eq!(table_names(&set), vec!["items"]);
        assert_eq!(set.tables[0].columns.len(), 2);
    }

    #[test]
    fn convert_missing_common_sheet() {
        let mut parser = Parser::default();
        let criteria = Criteria::default().with_common_sheet_name("shared");
        let error = convert(&mut parser, &workbook(), &criteria).unwrap_err();

        assert_eq!(error.to_string(), "Sheet not found: 'shared'");
        assert!(!parser.has_common_columns());
    }

    #[test]
    fn convert_reports_failing_sheet() {
        let mut parser = Parser::default();
        // Without a common sheet, "common" is parsed as a table and has no name
        let error = convert(&mut parser, &workbook(), &Criteria::default()).unwrap_err();

        assert_eq!(error.to_string(), "Failed to parse sheet 'common'");
        let cause = error.downcast_ref::<ParseError>().unwrap();
        assert_eq!(cause.kind(), ParseErrorKind::TableNameRequired);
    }
}
