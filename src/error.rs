use thiserror::Error;

/// Main error type for tdconv.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum TdconvError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    StringEncodingError(#[from] std::string::FromUtf8Error),

    // Third-party library errors
    #[error("{0}")]
    PatternError(#[from] glob::PatternError),

    // Spreadsheet module errors
    #[error("{0}")]
    SpreadsheetError(#[from] crate::spreadsheet::SpreadsheetError),

    // Parser module errors
    #[error("{0}")]
    ParseError(#[from] crate::parser::ParseError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, TdconvError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| TdconvError::WithContextError(format!("{}: {}", message, e)))
    }
}
