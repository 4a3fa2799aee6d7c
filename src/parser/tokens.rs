use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::error::ErrMode;
use winnow::token::{any, literal, none_of};
use winnow::{ModalResult, Parser};

use crate::types::PatternToken;

// Number placeholders
pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<PatternToken> {
    literal("0")
        .value(PatternToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<PatternToken> {
    literal("#")
        .value(PatternToken::DigitIfNeeded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternToken> {
    literal(".")
        .value(PatternToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_thousands_separator(input: &mut &str) -> ModalResult<PatternToken> {
    literal(",")
        .value(PatternToken::ThousandsSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_symbol(input: &mut &str) -> ModalResult<PatternToken> {
    literal("¤")
        .value(PatternToken::CurrencySymbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Text and special character parsers
pub fn parse_quoted_text(input: &mut &str) -> ModalResult<PatternToken> {
    let content_parser = repeat(0.., alt((preceded('\\', any), none_of(['"']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('"', content_parser, '"')
        .map(PatternToken::QuotedText)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_escaped_char_as_literal(input: &mut &str) -> ModalResult<PatternToken> {
    preceded('\\', any)
        .map(PatternToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Anything that is not a pattern symbol prints as itself
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<PatternToken> {
    none_of(['"', '\\', '0', '#', '.', ',', '¤'])
        .map(PatternToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a single token from a numeric pattern
pub fn parse_single_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_quoted_text,
        parse_escaped_char_as_literal,
        parse_currency_symbol,
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_decimal_point,
        parse_thousands_separator,
        parse_literal_passthrough,
    ))
    .parse_next(input)
}
