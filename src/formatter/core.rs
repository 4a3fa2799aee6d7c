use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{LocaleSettings, NumberPattern};

/// Render the digit run of `value`, returning whether a minus sign is due
///
/// The value is rounded half away from zero to the pattern's fraction digits.
/// A value that rounds to zero never carries a sign.
pub(super) fn format_digits(
    value: Decimal,
    pattern: &NumberPattern,
    locale: &LocaleSettings,
) -> (bool, String) {
    let rounded = value.abs().round_dp_with_strategy(
        pattern.max_fraction_digits as u32,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let is_negative = value.is_sign_negative() && !rounded.is_zero();

    let plain = rounded.to_string();
    let (integer_str, fraction_str) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut result = group_integer(integer_str, pattern, locale);

    let fraction = fraction_digits(fraction_str, pattern);
    if !fraction.is_empty() {
        result.push(locale.decimal_point);
        result.push_str(&fraction);
    }

    (is_negative, result)
}

fn group_integer(integer_str: &str, pattern: &NumberPattern, locale: &LocaleSettings) -> String {
    let significant = integer_str.trim_start_matches('0');
    let padding = pattern.min_integer_digits.saturating_sub(significant.len());
    let int_digits: Vec<char> = std::iter::repeat_n('0', padding)
        .chain(significant.chars())
        .collect();

    if !pattern.grouping || int_digits.len() <= 3 {
        return int_digits.into_iter().collect();
    }

    let mut formatted: Vec<char> = Vec::with_capacity(int_digits.len() + (int_digits.len() - 1) / 3);
    for (i, digit) in int_digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            formatted.push(locale.thousands_separator);
        }
        formatted.push(*digit);
    }
    formatted.into_iter().rev().collect()
}

fn fraction_digits(fraction_str: &str, pattern: &NumberPattern) -> String {
    let mut fraction = fraction_str.to_string();
    while fraction.len() < pattern.min_fraction_digits {
        fraction.push('0');
    }
    while fraction.len() > pattern.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }
    fraction
}
