//! Number formatting module
//!
//! This module renders decimals according to parsed numeric patterns and the
//! settings of a locale, and spells values out digit by digit.
//! The main entry points are `format_number`, `format_currency` and `spell_out`.

mod core;
mod text;
mod words;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::parser::parse_number_pattern;
use crate::types::{LocaleSettings, NumberPattern};

pub use words::spell_out;

/// Format a decimal according to the specified numeric pattern
///
/// # Arguments
/// * `value` - The value to format
/// * `pattern` - The parsed numeric pattern
/// * `locale` - Locale settings for formatting
///
/// # Returns
/// * `String` - The formatted number string
///
/// # Examples
/// ```
/// use customer_format::formatter::format_decimal;
/// use customer_format::parser::parse_number_pattern;
/// use customer_format::types::LocaleSettings;
/// use rust_decimal::Decimal;
///
/// let pattern = parse_number_pattern("#,##0.00").unwrap();
/// let result = format_decimal(Decimal::from(1234567), &pattern, &LocaleSettings::default());
/// assert_eq!(result, "1,234,567.00");
/// ```
pub fn format_decimal(value: Decimal, pattern: &NumberPattern, locale: &LocaleSettings) -> String {
    let (is_negative, digits) = self::core::format_digits(value, pattern, locale);

    let mut result = String::new();
    if is_negative {
        result.push('-');
    }
    text::push_affix(&mut result, &pattern.prefix, locale);
    result.push_str(&digits);
    text::push_affix(&mut result, &pattern.suffix, locale);
    result
}

/// Format a value with the locale's number pattern, e.g. `1 234 567,00` for ru-RU
pub fn format_number(value: Decimal, locale: &Locale) -> Result<String> {
    let settings = locale.settings();
    format_with(value, &settings.number_pattern, settings)
}

/// Format a value with the locale's currency pattern, e.g. `$1,234,567.00` for en-US
pub fn format_currency(value: Decimal, locale: &Locale) -> Result<String> {
    let settings = locale.settings();
    format_with(value, &settings.currency_pattern, settings)
}

fn format_with(value: Decimal, pattern: &str, settings: &LocaleSettings) -> Result<String> {
    let pattern = parse_number_pattern(pattern).map_err(Error::InvalidPattern)?;
    Ok(format_decimal(value, &pattern, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn fmt(value: Decimal, pattern: &str) -> String {
        let pattern = parse_number_pattern(pattern).unwrap();
        format_decimal(value, &pattern, &LocaleSettings::default())
    }

    #[test]
    fn test_grouping_and_padding() {
        assert_eq!(fmt(Decimal::from(1234567), "#,##0.00"), "1,234,567.00");
        assert_eq!(fmt(Decimal::from(123), "#,##0.00"), "123.00");
        assert_eq!(fmt(Decimal::ZERO, "#,##0.00"), "0.00");
        assert_eq!(fmt(Decimal::from(1234567), "0.00"), "1234567.00");
        assert_eq!(fmt(Decimal::from(7), "000"), "007");
    }

    #[test]
    fn test_rounding_is_away_from_zero() {
        assert_eq!(fmt(Decimal::new(12345, 3), "0.00"), "12.35");
        assert_eq!(fmt(Decimal::new(12344, 3), "0.00"), "12.34");
        assert_eq!(fmt(Decimal::new(9995, 3), "#,##0.00"), "10.00");
        assert_eq!(fmt(Decimal::new(999_995, 3), "#,##0.00"), "1,000.00");
        assert_eq!(fmt(Decimal::new(25, 1), "0"), "3");
    }

    #[test]
    fn test_optional_fraction_digits() {
        assert_eq!(fmt(Decimal::new(1230, 2), "0.0#"), "12.3");
        assert_eq!(fmt(Decimal::new(1234, 2), "0.0#"), "12.34");
        assert_eq!(fmt(Decimal::from(12), "0.##"), "12");
        assert_eq!(fmt(Decimal::new(5, 1), "#.00"), ".50");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(fmt(Decimal::from(-1234), "#,##0.00"), "-1,234.00");
        assert_eq!(fmt(Decimal::new(-1, 3), "0.00"), "0.00");
    }

    #[test]
    fn test_locale_separators() {
        let locale = LocaleSettings::default()
            .with_decimal_point(',')
            .with_thousands_separator('.');
        let pattern = parse_number_pattern("#,##0.00").unwrap();
        assert_eq!(
            format_decimal(Decimal::new(123456789, 2), &pattern, &locale),
            "1.234.567,89"
        );
    }

    #[test]
    fn test_invalid_locale_pattern() {
        let settings = LocaleSettings::default().with_currency_pattern("¤".to_string());
        let locale = Locale::custom("broken", settings);
        assert!(matches!(
            format_currency(Decimal::ONE, &locale),
            Err(Error::InvalidPattern(_))
        ));
    }
}
