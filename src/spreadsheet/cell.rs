use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// Content of a single spreadsheet cell.
///
/// Table definitions are read as text, so every variant renders through
/// `Display` the way a spreadsheet would show it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    /// Inline string values
    Text(String),
    /// Whole numbers
    Integer(i64),
    /// Floating point numbers
    Number(f64),
    /// Boolean values (true/false)
    Boolean(bool),
    /// Date without time component
    Date(NaiveDate),
    /// Date and time
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Returns true if the cell renders as an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(value) => value.is_empty(),
            _ => false,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => write!(f, "{value}"),
            CellValue::Integer(value) => write!(f, "{value}"),
            // Spreadsheets store ordinals like "1" as floats
            CellValue::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Boolean(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            CellValue::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::from(" ").is_empty());
        assert!(!CellValue::from(0i64).is_empty());
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn numbers_to_text() {
        assert_eq!(CellValue::from(3i64).to_string(), "3");
        assert_eq!(CellValue::from(3.0).to_string(), "3");
        assert_eq!(CellValue::from(-12.0).to_string(), "-12");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn booleans_to_text() {
        assert_eq!(CellValue::from(true).to_string(), "TRUE");
        assert_eq!(CellValue::from(false).to_string(), "FALSE");
    }

    #[test]
    fn dates_to_text() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CellValue::from(date).to_string(), "2024-02-29");
        let datetime = date.and_hms_opt(13, 5, 9).unwrap();
        assert_eq!(CellValue::from(datetime).to_string(), "2024-02-29 13:05:09");
    }
}
