//! # Table Definition Parser
//!
//! Turns table definition grids into [`Table`] values. A [`Parser`] carries the
//! sheet layout (where the table name lives, where column rows start), the
//! token that marks a flag cell as true, the key naming function, and the
//! columns shared by every table.
//!
//! Options are validated one at a time against the state the parser holds
//! when the option is applied, so the same pair of options may fail
//! differently depending on their order:
//!
//! ```
//! use tdconv::parser::{ParseErrorKind, ParseOption, Parser};
//!
//! let error = Parser::new([ParseOption::table_name_position(3, "C"), ParseOption::StartRow(2)])
//!     .unwrap_err();
//! assert_eq!(error.kind(), ParseErrorKind::InvalidStartRow);
//!
//! let error = Parser::new([ParseOption::StartRow(2), ParseOption::table_name_position(3, "C")])
//!     .unwrap_err();
//! assert_eq!(error.kind(), ParseErrorKind::InvalidTableNamePosition);
//! ```
use crate::database::Column;
use crate::database::Table;
use crate::spreadsheet::reference::col_to_index;
use crate::spreadsheet::Grid;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

mod scan;

/// Zero-based row of the table name cell unless configured.
pub const DEFAULT_TABLE_NAME_ROW: usize = 1;
/// Zero-based column of the table name cell ("B") unless configured.
pub const DEFAULT_TABLE_NAME_COLUMN: usize = 1;
/// Zero-based row where column definitions start unless configured.
pub const DEFAULT_START_ROW: usize = 4;
/// Token marking a flag cell as true unless configured.
pub const DEFAULT_BOOL_STRING: &str = "yes";

/// Maps a column name to the name of the key synthesized for it.
pub type KeyNameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Errors raised while configuring a parser or parsing a grid.
///
/// Each message starts with a fixed lead sentence; details follow after `": "`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Table name row must be smaller than the start row: table name row={row}, start row={start_row}")]
    InvalidTableNamePosition { row: usize, start_row: usize },

    #[error("Unable to convert column string: '{column}'")]
    InvalidColumnAddress { column: String },

    #[error("Start row must be greater than the table name row: start row={row}, table name row={table_name_row}")]
    InvalidStartRow { row: usize, table_name_row: usize },

    #[error("Key name function must be set")]
    InvalidKeyNamingFunction,

    #[error("The common columns are already set")]
    CommonColumnsAlreadySet,

    #[error("The common column must not be PK: '{name}'")]
    CommonColumnMustNotBePrimaryKey { name: String },

    #[error("The common column must not have index: '{name}'")]
    CommonColumnMustNotHaveIndex { name: String },

    #[error("Table name is required: cell {reference} is empty")]
    TableNameRequired { reference: String },

    #[error("The length of table columns must not be zero: table '{table}'")]
    NoColumns { table: String },
}

/// Detail-free discriminant of a [`ParseError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidTableNamePosition,
    InvalidColumnAddress,
    InvalidStartRow,
    InvalidKeyNamingFunction,
    CommonColumnsAlreadySet,
    CommonColumnMustNotBePrimaryKey,
    CommonColumnMustNotHaveIndex,
    TableNameRequired,
    NoColumns,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::InvalidTableNamePosition { .. } => ParseErrorKind::InvalidTableNamePosition,
            ParseError::InvalidColumnAddress { .. } => ParseErrorKind::InvalidColumnAddress,
            ParseError::InvalidStartRow { .. } => ParseErrorKind::InvalidStartRow,
            ParseError::InvalidKeyNamingFunction => ParseErrorKind::InvalidKeyNamingFunction,
            ParseError::CommonColumnsAlreadySet => ParseErrorKind::CommonColumnsAlreadySet,
            ParseError::CommonColumnMustNotBePrimaryKey { .. } => ParseErrorKind::CommonColumnMustNotBePrimaryKey,
            ParseError::CommonColumnMustNotHaveIndex { .. } => ParseErrorKind::CommonColumnMustNotHaveIndex,
            ParseError::TableNameRequired { .. } => ParseErrorKind::TableNameRequired,
            ParseError::NoColumns { .. } => ParseErrorKind::NoColumns,
        }
    }
}

/// One change to a parser's configuration.
pub enum ParseOption {
    /// Moves the table name cell to a zero-based row and a column given as letters.
    TableNamePosition { row: usize, column: String },
    /// Moves the first zero-based row scanned for column definitions.
    StartRow(usize),
    /// Replaces the token that marks a flag cell as true.
    BoolString(String),
    /// Replaces the key naming function; `None` is rejected.
    KeyNameFunc(Option<KeyNameFn>),
}

impl ParseOption {
    pub fn table_name_position(row: usize, column: &str) -> Self {
        ParseOption::TableNamePosition {
            row,
            column: column.to_owned(),
        }
    }

    pub fn bool_string(token: &str) -> Self {
        ParseOption::BoolString(token.to_owned())
    }

    pub fn key_name_func<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let func: KeyNameFn = Arc::new(f);
        ParseOption::KeyNameFunc(Some(func))
    }
}

impl Debug for ParseOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseOption::TableNamePosition { row, column } => f
                .debug_struct("TableNamePosition")
                .field("row", row)
                .field("column", column)
                .finish(),
            ParseOption::StartRow(row) => f.debug_tuple("StartRow").field(row).finish(),
            ParseOption::BoolString(token) => f.debug_tuple("BoolString").field(token).finish(),
            ParseOption::KeyNameFunc(func) => f
                .debug_tuple("KeyNameFunc")
                .field(&func.as_ref().map(|_| "<fn>"))
                .finish(),
        }
    }
}

/// Layout and interpretation rules for table definition grids.
///
/// Built once, optionally given common columns once, then shared read-only
/// across any number of [`Parser::parse_table`] calls.
pub struct Parser {
    table_name_row: usize,
    table_name_col: usize,
    start_row: usize,
    bool_string: String,
    key_name: KeyNameFn,
    /// `None` until common columns are registered
    common_columns: Option<Vec<Column>>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            table_name_row: DEFAULT_TABLE_NAME_ROW,
            table_name_col: DEFAULT_TABLE_NAME_COLUMN,
            start_row: DEFAULT_START_ROW,
            bool_string: DEFAULT_BOOL_STRING.to_owned(),
            key_name: Arc::new(|column: &str| format!("{}_key", column)),
            common_columns: None,
        }
    }
}

impl Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("table_name_row", &self.table_name_row)
            .field("table_name_col", &self.table_name_col)
            .field("start_row", &self.start_row)
            .field("bool_string", &self.bool_string)
            .field("common_columns", &self.common_columns)
            .finish_non_exhaustive()
    }
}

impl Parser {
    /// Creates a parser from the defaults, applying each option in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that is invalid against the
    /// configuration built so far.
    pub fn new(options: impl IntoIterator<Item = ParseOption>) -> Result<Self, ParseError> {
        let mut parser = Self::default();
        for option in options {
            parser.apply(option)?;
        }
        Ok(parser)
    }

    /// Applies one option, validating it against the current configuration.
    pub fn apply(&mut self, option: ParseOption) -> Result<(), ParseError> {
        match option {
            ParseOption::TableNamePosition { row, column } => self.set_table_name_position(row, &column),
            ParseOption::StartRow(row) => self.set_start_row(row),
            ParseOption::BoolString(token) => {
                self.bool_string = token;
                Ok(())
            }
            ParseOption::KeyNameFunc(func) => self.set_key_name_func(func),
        }
    }

    /// Moves the table name cell. The row must stay above the start row.
    pub fn set_table_name_position(&mut self, row: usize, column: &str) -> Result<(), ParseError> {
        if row >= self.start_row {
            return Err(ParseError::InvalidTableNamePosition {
                row,
                start_row: self.start_row,
            });
        }
        let col = col_to_index(column).ok_or_else(|| ParseError::InvalidColumnAddress {
            column: column.to_owned(),
        })?;
        self.table_name_row = row;
        self.table_name_col = col;
        Ok(())
    }

    /// Moves the first scanned row. It must stay below the table name row.
    pub fn set_start_row(&mut self, row: usize) -> Result<(), ParseError> {
        if row <= self.table_name_row {
            return Err(ParseError::InvalidStartRow {
                row,
                table_name_row: self.table_name_row,
            });
        }
        self.start_row = row;
        Ok(())
    }

    pub fn set_bool_string(&mut self, token: &str) {
        self.bool_string = token.to_owned();
    }

    pub fn set_key_name_func(&mut self, func: Option<KeyNameFn>) -> Result<(), ParseError> {
        self.key_name = func.ok_or(ParseError::InvalidKeyNamingFunction)?;
        Ok(())
    }

    pub fn table_name_row(&self) -> usize {
        self.table_name_row
    }

    pub fn table_name_column(&self) -> usize {
        self.table_name_col
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn bool_string(&self) -> &str {
        &self.bool_string
    }

    /// Registered common columns, empty until [`Parser::set_common_columns`] succeeds.
    pub fn common_columns(&self) -> &[Column] {
        self.common_columns.as_deref().unwrap_or_default()
    }

    pub fn has_common_columns(&self) -> bool {
        self.common_columns.is_some()
    }

    /// Name of the key synthesized for a column.
    pub fn key_name(&self, column: &str) -> String {
        (self.key_name)(column)
    }
}

/// Parses a grid with an optional parser. Absent input is a no-op yielding `None`.
pub fn parse<G: Grid + ?Sized>(parser: Option<&Parser>, grid: Option<&G>) -> Result<Option<Table>, ParseError> {
    match (parser, grid) {
        (Some(parser), Some(grid)) => parser.parse_table(grid).map(Some),
        _ => Ok(None),
    }
}

/// Registers common columns with an optional parser. Absent input is a no-op.
pub fn set_common_columns<G: Grid + ?Sized>(parser: Option<&mut Parser>, grid: Option<&G>) -> Result<(), ParseError> {
    match (parser, grid) {
        (Some(parser), Some(grid)) => parser.set_common_columns(grid),
        _ => Ok(()),
    }
}
