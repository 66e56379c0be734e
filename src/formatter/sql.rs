//! MySQL-flavoured DDL output.
use crate::database::Column;
use crate::database::Table;
use crate::database::TableSet;
use crate::formatter::FormatOption;
use crate::formatter::Formatter;
use crate::formatter::Hooks;
use std::io;
use std::io::Write;

/// Banner written at the top of every generated SQL file unless replaced.
pub const SQL_HEADER: &str = "# SQL generated by tdconv. DO NOT EDIT.\n\n";

/// Renders each table as `DROP TABLE` + `CREATE TABLE` statements.
pub struct SqlFormatter {
    hooks: Hooks,
}

impl SqlFormatter {
    pub fn new(options: impl IntoIterator<Item = FormatOption>) -> Self {
        let header = Box::new(|w: &mut dyn Write, _: &TableSet| w.write_all(SQL_HEADER.as_bytes()));
        Self {
            hooks: Hooks::new(header, options),
        }
    }
}

impl Default for SqlFormatter {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Formatter for SqlFormatter {
    fn extension(&self) -> &'static str {
        "sql"
    }

    fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    fn write_table(&self, w: &mut dyn Write, table: &Table) -> io::Result<()> {
        writeln!(w, "DROP TABLE IF EXISTS {};", table.name)?;
        writeln!(w, "CREATE TABLE `{}` (", table.name)?;

        let mut clauses: Vec<String> = table.columns.iter().map(column_definition).collect();
        if !table.primary_key_columns.is_empty() {
            clauses.push(format!("    PRIMARY KEY ({})", table.primary_key_columns.join(", ")));
        }
        // Index keys are emitted with the same UNIQUE KEY syntax as unique groups
        for key in table.unique_keys.iter().chain(&table.index_keys) {
            clauses.push(format!("    UNIQUE KEY `{}` ({})", key.name, key.columns.join(", ")));
        }

        writeln!(w, "{}", clauses.join(",\n"))?;
        writeln!(w, ");")
    }
}

/// `name type [NOT NULL] [option] [UNIQUE] [COMMENT '...']`
fn column_definition(column: &Column) -> String {
    let mut elements = Vec::with_capacity(6);
    elements.push(format!("    `{}`", column.name));
    elements.push(column.kind.clone());
    if column.not_null {
        elements.push("NOT NULL".to_owned());
    }
    if !column.option.is_empty() {
        elements.push(column.option.clone());
    }
    if column.unique {
        elements.push("UNIQUE".to_owned());
    }
    if !column.comment.is_empty() {
        elements.push(format!("COMMENT '{}'", column.comment.replace('\'', "''")));
    }
    elements.join(" ")
}
