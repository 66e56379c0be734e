use regex::Regex;

/// Represents one attribute of a table definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Raw type string as written in the sheet (e.g. "VARCHAR(32)"), passed through untouched
    pub kind: String,
    /// Part of the primary key
    pub primary_key: bool,
    /// Declared NOT NULL
    pub not_null: bool,
    /// Declared UNIQUE on the column itself
    pub unique: bool,
    /// Backed by a single-column key
    pub index: bool,
    /// Free-text DDL fragment (default value, auto increment, ...)
    pub option: String,
    /// Free-text comment
    pub comment: String,
    /// Contributed by the shared common columns rather than the table's own rows
    pub common: bool,
}

/// Scalar families a raw column type is classified into for struct rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// INT, TINYINT, BIGINT
    Integer,
    /// DOUBLE
    Float,
    /// CHAR, VARCHAR, TEXT, ENUM
    String,
    /// BOOLEAN
    Boolean,
    /// TIMESTAMP, DATE, TIME
    DateTime,
    /// Anything else
    Unknown,
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "datetime",
            ColumnType::Unknown => "unknown",
        }
    }

    /// Classifies a raw SQL type by its leading alphabetic token, case-insensitively.
    /// "INT UNSIGNED" and "int(11)" are both integers; unrecognized types are `Unknown`.
    pub fn parse(raw: &str) -> Self {
        let pattern = Regex::new(r"^([a-zA-Z]+)[ (].*$").expect("Hardcode regex pattern");
        let token = pattern
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map(|matcher| matcher.as_str())
            .unwrap_or(raw);
        match token.to_ascii_uppercase().as_str() {
            "INT" | "TINYINT" | "BIGINT" => Self::Integer,
            "DOUBLE" => Self::Float,
            "CHAR" | "VARCHAR" | "TEXT" | "ENUM" => Self::String,
            "BOOLEAN" => Self::Boolean,
            "TIMESTAMP" | "DATE" | "TIME" => Self::DateTime,
            _ => Self::Unknown,
        }
    }
}

impl Column {
    /// Classifies the raw type of this column.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::parse(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_types() {
        assert_eq!(ColumnType::parse("INT"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("INT UNSIGNED"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("int(11)"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("TinyInt(1)"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("BIGINT UNSIGNED"), ColumnType::Integer);
    }

    #[test]
    fn parse_other_types() {
        assert_eq!(ColumnType::parse("DOUBLE"), ColumnType::Float);
        assert_eq!(ColumnType::parse("VARCHAR(32)"), ColumnType::String);
        assert_eq!(ColumnType::parse("enum('a','b')"), ColumnType::String);
        assert_eq!(ColumnType::parse("text"), ColumnType::String);
        assert_eq!(ColumnType::parse("BOOLEAN"), ColumnType::Boolean);
        assert_eq!(ColumnType::parse("TIMESTAMP NULL"), ColumnType::DateTime);
        assert_eq!(ColumnType::parse("date"), ColumnType::DateTime);
    }

    #[test]
    fn parse_unknown_types() {
        assert_eq!(ColumnType::parse(""), ColumnType::Unknown);
        assert_eq!(ColumnType::parse("DATETIME(6)"), ColumnType::Unknown);
        assert_eq!(ColumnType::parse("DECIMAL(10,2)"), ColumnType::Unknown);
        // The token must be followed by a space or a parenthesis
        assert_eq!(ColumnType::parse("INT,"), ColumnType::Unknown);
        assert_eq!(ColumnType::Unknown.as_str(), "unknown");
    }

    #[test]
    fn column_type_of_column() {
        let column = Column {
            name: "created_at".to_owned(),
            kind: "TIMESTAMP NULL".to_owned(),
            ..Default::default()
        };
        assert_eq!(column.column_type(), ColumnType::DateTime);
    }
}
