use thiserror::Error;

/// Result alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors produced while interpreting an authored document.
///
/// Every variant names the field path of the offending node so a report
/// can point straight at the authored line, e.g. `pages[2].title`.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("expected {path} to be {expected}, was {actual}")]
    WrongType {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("missing required field {path}")]
    MissingField { path: String },

    #[error("value {value} for {path} must be between {min} and {max}")]
    OutOfRange {
        path: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("{path} must have at least {minimum} elements, found {actual}")]
    TooFewElements {
        path: String,
        minimum: usize,
        actual: usize,
    },

    #[error("unknown {what} {name} at {path}")]
    UnknownName {
        path: String,
        what: String,
        name: String,
    },

    #[error("invalid value for {path}: {reason}")]
    Invalid { path: String, reason: String },
}

impl DocumentError {
    pub fn missing(path: impl Into<String>) -> Self {
        DocumentError::MissingField { path: path.into() }
    }

    pub fn out_of_range(
        path: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        DocumentError::OutOfRange {
            path: path.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn unknown_name(
        path: impl Into<String>,
        what: impl Into<String>,
        name: impl ToString,
    ) -> Self {
        DocumentError::UnknownName {
            path: path.into(),
            what: what.into(),
            name: name.to_string(),
        }
    }

    pub fn invalid(path: impl Into<String>, reason: impl ToString) -> Self {
        DocumentError::Invalid {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The field path the error points at.
    pub fn path(&self) -> &str {
        match self {
            DocumentError::WrongType { path, .. }
            | DocumentError::MissingField { path }
            | DocumentError::OutOfRange { path, .. }
            | DocumentError::TooFewElements { path, .. }
            | DocumentError::UnknownName { path, .. }
            | DocumentError::Invalid { path, .. } => path,
        }
    }
}
