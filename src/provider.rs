//! Currency and spelled-out formatting of customer records
//!
//! [`CustomerFormatter`] is the richer of the two formatting strategies: it
//! renders revenue as a currency amount or as words and can spell the contact
//! phone out. [`StandardFormat`] exposes the record's own format codes through
//! the same [`RecordFormat`] capability.

use std::any::Any;

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::parser::parse_provider_code;
use crate::record::{CustomerRecord, compose};

const DEFAULT_PROVIDER_FORMAT: &str = "GC";

/// Something that renders a [`CustomerRecord`] under a format code
pub trait RecordFormat {
    fn format(
        &self,
        code: Option<&str>,
        record: &CustomerRecord,
        locale: Option<&Locale>,
    ) -> Result<String>;
}

/// The record format codes (`G`, `NRP`, `N`, `R`, `P`, `NR`, `NP`, `RP`)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormat;

impl RecordFormat for StandardFormat {
    fn format(
        &self,
        code: Option<&str>,
        record: &CustomerRecord,
        locale: Option<&Locale>,
    ) -> Result<String> {
        record.to_string_with(code, locale)
    }
}

/// Currency and word formatting for customer records
///
/// # Examples
/// ```
/// use customer_format::{CustomerFormatter, CustomerRecord, Locale};
/// use rust_decimal::Decimal;
///
/// let record = CustomerRecord::new("Jeffrey Richter", Decimal::from(1234567), "+1 (425) 555-0100").unwrap();
/// let formatter = CustomerFormatter::new(Some(Locale::named("en-US").unwrap()));
/// assert_eq!(
///     formatter.format(Some("RC"), &record, None).unwrap(),
///     "Customer record: $1,234,567.00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerFormatter {
    default_locale: Locale,
}

impl CustomerFormatter {
    /// Create a formatter whose default locale is `locale`, or the invariant locale
    pub fn new(locale: Option<Locale>) -> Self {
        Self {
            default_locale: locale.unwrap_or_default(),
        }
    }

    /// The locale used when a call doesn't supply one
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Render `record` under a provider format code
    ///
    /// A missing or empty code means `GC`, a missing locale means the
    /// formatter's default locale.
    pub fn format(
        &self,
        code: Option<&str>,
        record: &CustomerRecord,
        locale: Option<&Locale>,
    ) -> Result<String> {
        let code = code.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_PROVIDER_FORMAT);
        let layout = parse_provider_code(code)?;
        compose(record, layout, locale.unwrap_or(&self.default_locale))
    }

    /// Render an untyped argument, which must be a [`CustomerRecord`]
    pub fn format_any(
        &self,
        code: Option<&str>,
        arg: Option<&dyn Any>,
        locale: Option<&Locale>,
    ) -> Result<String> {
        let arg = arg.ok_or(Error::NullArgument)?;
        let record = arg
            .downcast_ref::<CustomerRecord>()
            .ok_or(Error::WrongArgumentType {
                expected: "CustomerRecord",
            })?;
        self.format(code, record, locale)
    }
}

impl RecordFormat for CustomerFormatter {
    fn format(
        &self,
        code: Option<&str>,
        record: &CustomerRecord,
        locale: Option<&Locale>,
    ) -> Result<String> {
        CustomerFormatter::format(self, code, record, locale)
    }
}
