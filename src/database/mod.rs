//! Table definition model produced by the parser and consumed by the formatters.
pub mod column;
pub mod key;
pub mod table;

pub use column::Column;
pub use column::ColumnType;
pub use key::Key;
pub use table::Table;
pub use table::TableSet;
