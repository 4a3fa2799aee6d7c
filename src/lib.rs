pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod provider;
pub mod record;
pub mod types;

// Main API
pub use error::{Error, ErrorKind, Result};
pub use formatter::{format_currency, format_decimal, format_number, spell_out};
pub use locale::{Locale, LocaleError, list_available_locales};
pub use parser::parse_number_pattern;
pub use provider::{CustomerFormatter, RecordFormat, StandardFormat};
pub use record::CustomerRecord;
pub use types::*;

#[cfg(test)]
mod tests;
