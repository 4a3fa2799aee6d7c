//! Error type for record validation and formatting

use rust_decimal::Decimal;

use crate::locale::LocaleError;

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unsupported format code or numeric pattern, or a name/phone that does not match its grammar
    Format,
    /// A value outside its allowed range
    Range,
    /// A missing or wrongly typed argument
    Argument,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("format '{code}' is not supported")]
    UnsupportedFormat { code: String },

    #[error("name '{0}' must be one or more capitalized words")]
    InvalidName(String),

    #[error("contact phone '{0}' must look like +1 (425) 555-0100")]
    InvalidPhone(String),

    #[error("invalid numeric pattern: {0}")]
    InvalidPattern(String),

    #[error("revenue can't be negative, got {0}")]
    NegativeRevenue(Decimal),

    #[error("arg can't be equal to null")]
    NullArgument,

    #[error("arg should have {expected} type")]
    WrongArgumentType { expected: &'static str },

    /// Lets callers `?` a failed locale lookup into this error type
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. }
            | Error::InvalidName(_)
            | Error::InvalidPhone(_)
            | Error::InvalidPattern(_) => ErrorKind::Format,
            Error::NegativeRevenue(_) => ErrorKind::Range,
            Error::NullArgument | Error::WrongArgumentType { .. } | Error::Locale(_) => {
                ErrorKind::Argument
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
