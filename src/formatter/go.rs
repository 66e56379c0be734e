//! Go struct declarations with nullable fields.
use crate::database::ColumnType;
use crate::database::Table;
use crate::database::TableSet;
use crate::formatter::FormatOption;
use crate::formatter::Formatter;
use crate::formatter::Hooks;
use crate::helpers::string::to_go_name;
use std::io;
use std::io::Write;

/// Banner and package clause written at the top of every generated Go file unless replaced.
pub const GO_HEADER: &str = "// This file generated by tdconv. DO NOT EDIT.\n\
                             package main\n\
                             \n\
                             import (\n\
                             \t\"time\"\n\
                             )\n\
                             \n";

/// Renders each table as a Go struct with one pointer field per column.
pub struct GoFormatter {
    hooks: Hooks,
}

impl GoFormatter {
    pub fn new(options: impl IntoIterator<Item = FormatOption>) -> Self {
        let header = Box::new(|w: &mut dyn Write, _: &TableSet| w.write_all(GO_HEADER.as_bytes()));
        Self {
            hooks: Hooks::new(header, options),
        }
    }
}

impl Default for GoFormatter {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Formatter for GoFormatter {
    fn extension(&self) -> &'static str {
        "go"
    }

    fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    fn write_table(&self, w: &mut dyn Write, table: &Table) -> io::Result<()> {
        writeln!(w, "type {} struct {{", to_go_name(&table.name, false))?;
        for column in &table.columns {
            writeln!(w, "\t{} {}", to_go_name(&column.name, true), go_type(column.column_type()))?;
        }
        writeln!(w, "}}")
    }
}

/// Nullable Go type of a column type; unrecognized types are marked `UNKNOWN`.
fn go_type(kind: ColumnType) -> &'static str {
    match kind {
        ColumnType::Integer => "*int",
        ColumnType::Float => "*float32",
        ColumnType::String => "*string",
        ColumnType::Boolean => "*bool",
        ColumnType::DateTime => "*time.Time",
        ColumnType::Unknown => "UNKNOWN",
    }
}
