//! The customer record and its standard string forms

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::formatter::{format_currency, format_number, spell_out};
use crate::locale::Locale;
use crate::parser::{is_valid_name, is_valid_phone, parse_record_code};
use crate::types::{FieldLayout, PhoneStyle, RevenueStyle};

const RECORD_PREFIX: &str = "Customer record: ";
const DEFAULT_RECORD_FORMAT: &str = "G";

/// A customer with a validated name, revenue and contact phone
///
/// `CustomerRecord::default()` holds an empty name, an empty phone and zero
/// revenue. Those defaults are not checked against the field grammars, but
/// every setter is.
///
/// # Examples
/// ```
/// use customer_format::{CustomerRecord, Locale};
/// use rust_decimal::Decimal;
///
/// let record = CustomerRecord::new("Jeffrey Richter", Decimal::from(1234567), "+1 (425) 555-0100").unwrap();
/// let ru = Locale::named("ru-RU").unwrap();
/// assert_eq!(
///     record.to_string_with(Some("NR"), Some(&ru)).unwrap(),
///     "Customer record: Jeffrey Richter, 1 234 567,00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerRecord {
    name: String,
    revenue: Decimal,
    contact_phone: String,
}

impl CustomerRecord {
    pub fn new(
        name: impl Into<String>,
        revenue: Decimal,
        contact_phone: impl Into<String>,
    ) -> Result<Self> {
        let mut record = Self::default();
        record.set_name(name)?;
        record.set_contact_phone(contact_phone)?;
        record.set_revenue(revenue)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    /// Fails with [`Error::InvalidName`] unless `name` is one or more capitalized words
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidName(name));
        }
        self.name = name;
        Ok(())
    }

    /// Fails with [`Error::InvalidPhone`] unless `phone` looks like `+1 (425) 555-0100`
    pub fn set_contact_phone(&mut self, phone: impl Into<String>) -> Result<()> {
        let phone = phone.into();
        if !is_valid_phone(&phone) {
            return Err(Error::InvalidPhone(phone));
        }
        self.contact_phone = phone;
        Ok(())
    }

    /// Fails with [`Error::NegativeRevenue`] when `revenue` is below zero
    ///
    /// A negative zero is stored as plain zero.
    pub fn set_revenue(&mut self, mut revenue: Decimal) -> Result<()> {
        if revenue.is_zero() {
            revenue.set_sign_positive(true);
        } else if revenue.is_sign_negative() {
            return Err(Error::NegativeRevenue(revenue));
        }
        self.revenue = revenue;
        Ok(())
    }

    /// Render the record under a record format code
    ///
    /// A missing or empty code means `G`, a missing locale means the invariant one.
    pub fn to_string_with(&self, code: Option<&str>, locale: Option<&Locale>) -> Result<String> {
        let code = code.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_RECORD_FORMAT);
        let layout = parse_record_code(code)?;
        match locale {
            Some(locale) => compose(self, layout, locale),
            None => compose(self, layout, &Locale::invariant()),
        }
    }
}

impl fmt::Display for CustomerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let revenue = format_number(self.revenue, &Locale::invariant()).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{RECORD_PREFIX}{}, {}, {}",
            self.name, revenue, self.contact_phone
        )
    }
}

/// Join the fields selected by `layout` after the record prefix
pub(crate) fn compose(
    record: &CustomerRecord,
    layout: FieldLayout,
    locale: &Locale,
) -> Result<String> {
    let mut fields: Vec<Cow<'_, str>> = Vec::with_capacity(3);

    if layout.name {
        fields.push(Cow::Borrowed(record.name.as_str()));
    }

    if let Some(style) = layout.revenue {
        let revenue = match style {
            RevenueStyle::Number => format_number(record.revenue, locale)?,
            RevenueStyle::Currency => format_currency(record.revenue, locale)?,
            RevenueStyle::Words => spell_out(&record.revenue.to_string()),
        };
        fields.push(Cow::Owned(revenue));
    }

    if let Some(style) = layout.phone {
        fields.push(match style {
            PhoneStyle::AsStored => Cow::Borrowed(record.contact_phone.as_str()),
            PhoneStyle::Words => Cow::Owned(spell_out(&record.contact_phone)),
        });
    }

    Ok(format!("{RECORD_PREFIX}{}", fields.join(", ")))
}
