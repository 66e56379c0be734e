/// A named group of column names backing a UNIQUE or INDEX clause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Key {
    /// Key name, derived by the parser's key naming function
    pub name: String,
    /// Column names in key order, never empty
    pub columns: Vec<String>,
}

impl Key {
    /// Creates a key over a single column.
    pub fn single(name: String, column: &str) -> Self {
        Self {
            name,
            columns: vec![column.to_owned()],
        }
    }
}
