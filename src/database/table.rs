use crate::database::column::Column;
use crate::database::key::Key;

/// Represents one table parsed from a table definition sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Own columns followed by the common columns
    pub columns: Vec<Column>,
    /// Names of the primary key columns in column order
    pub primary_key_columns: Vec<String>,
    /// Multi-column unique groups; single unique columns stay on the column itself
    pub unique_keys: Vec<Key>,
    /// One single-column key per indexed column
    pub index_keys: Vec<Key>,
}

impl Table {
    /// Columns defined by the table's own rows.
    pub fn own_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| !column.common)
    }
}

/// A named group of tables rendered into one output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSet {
    pub name: String,
    pub tables: Vec<Table>,
}

impl TableSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            tables: Vec::new(),
        }
    }

    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
