use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {message}", path.display())]
    SchemaError { path: PathBuf, message: String },

    #[error("{}, line {line}, column '{column}': {source}", path.display())]
    ValidationError {
        path: PathBuf,
        line: u64,
        column: String,
        #[source]
        source: FieldError,
    },

    #[error("unknown report '{name}'")]
    ReportNotFoundError { name: String },

    #[error("cannot register report '{name}': {reason}")]
    DuplicateReportError { name: String, reason: String },

    #[error("invalid arguments: {message}")]
    InvalidArgumentsError { message: String },
}

/// Why a single cell could not be coerced into a typed `Row` field.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("value is missing")]
    Missing,

    #[error("expected an integer, got {value:?} ({source})")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected a number, got {value:?} ({source})")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Data,
    Registry,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::ReadError { .. } | ReportError::InvalidArgumentsError { .. } => {
                ErrorCategory::Input
            }
            ReportError::SchemaError { .. } => ErrorCategory::Schema,
            ReportError::ValidationError { .. } => ErrorCategory::Data,
            ReportError::ReportNotFoundError { .. } | ReportError::DuplicateReportError { .. } => {
                ErrorCategory::Registry
            }
        }
    }

    /// Process exit status for a domain failure. Usage errors (2) never get here,
    /// clap exits on its own before any domain logic runs.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
