use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_pattern() {
    let result = parse_number_pattern("0.00").unwrap();
    assert!(result.prefix.is_empty());
    assert!(result.suffix.is_empty());
    assert!(!result.grouping);
    assert_eq!(result.min_integer_digits, 1);
    assert_eq!(result.min_fraction_digits, 2);
    assert_eq!(result.max_fraction_digits, 2);
}

#[test]
fn test_grouped_pattern() {
    let result = parse_number_pattern("#,##0.00").unwrap();
    assert!(result.grouping);
    assert_eq!(result.min_integer_digits, 1);
    assert_eq!(result.max_fraction_digits, 2);
}

#[test]
fn test_currency_prefix_and_suffix() {
    let prefix = parse_number_pattern("¤#,##0.00").unwrap();
    assert_eq!(prefix.prefix, vec![PatternToken::CurrencySymbol]);
    assert!(prefix.suffix.is_empty());

    let suffix = parse_number_pattern("#,##0.00 ¤").unwrap();
    assert!(suffix.prefix.is_empty());
    assert_eq!(
        suffix.suffix,
        vec![PatternToken::LiteralChar(' '), PatternToken::CurrencySymbol]
    );
}

#[test]
fn test_quoted_and_escaped_affixes() {
    let result = parse_number_pattern("\"Total: \"0\\%").unwrap();
    assert_eq!(
        result.prefix,
        vec![PatternToken::QuotedText("Total: ".to_string())]
    );
    assert_eq!(result.suffix, vec![PatternToken::LiteralChar('%')]);
}

#[test]
fn test_optional_fraction_placeholders() {
    let result = parse_number_pattern("0.0##").unwrap();
    assert_eq!(result.min_fraction_digits, 1);
    assert_eq!(result.max_fraction_digits, 3);

    let leading_point = parse_number_pattern(".00").unwrap();
    assert_eq!(leading_point.min_integer_digits, 0);
    assert_eq!(leading_point.min_fraction_digits, 2);
}

#[test]
fn test_comma_outside_digit_run_is_literal() {
    let result = parse_number_pattern("0,").unwrap();
    assert!(!result.grouping);
    assert_eq!(result.suffix, vec![PatternToken::LiteralChar(',')]);
}

#[test]
fn test_invalid_patterns() {
    assert!(parse_number_pattern("").is_err());
    assert!(parse_number_pattern("¤").is_err());
    assert!(parse_number_pattern(".").is_err());
    assert!(parse_number_pattern("0.0.0").is_err());
    assert!(parse_number_pattern("0 0").is_err());
    assert!(parse_number_pattern("0\"unterminated").is_err());
}

#[test]
fn test_field_grammars() {
    assert!(is_valid_name("Jeffrey Richter"));
    assert!(!is_valid_name("john"));
    assert!(is_valid_phone("+1 (425) 555-0100"));
    assert!(!is_valid_phone("5551234"));
}
