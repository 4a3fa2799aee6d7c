use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::parse_single_token;
use crate::types::{NumberPattern, PatternToken};

fn parse_pattern_tokens(input: &mut &str) -> ModalResult<Vec<PatternToken>> {
    repeat(0.., parse_single_token).parse_next(input)
}

/// Parse a numeric pattern such as `#,##0.00`, `¤#,##0.00` or `#,##0.00 ¤`
///
/// The digit run (placeholders, decimal point and thousands separators) may be
/// surrounded by literal text and currency symbols. A thousands separator
/// outside the digit run prints as a literal comma.
///
/// # Examples
/// ```
/// use customer_format::parser::parse_number_pattern;
///
/// let pattern = parse_number_pattern("#,##0.00 ¤").unwrap();
/// assert!(pattern.grouping);
/// assert_eq!(pattern.min_fraction_digits, 2);
/// ```
pub fn parse_number_pattern(input_str: &str) -> Result<NumberPattern, String> {
    let mut input = input_str;
    let tokens = parse_pattern_tokens
        .parse_next(&mut input)
        .map_err(|e| format!("Parse error: {e:?} at remaining input '{input}'"))?;

    if !input.is_empty() {
        return Err(format!("Unexpected trailing characters: '{input}'"));
    }

    let in_run = |t: &PatternToken| t.is_digit_placeholder() || *t == PatternToken::DecimalPoint;
    let (first, last) = match (tokens.iter().position(in_run), tokens.iter().rposition(in_run)) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(format!("Pattern '{input_str}' has no digit placeholders")),
    };

    if !tokens[first..=last].iter().any(PatternToken::is_digit_placeholder) {
        return Err(format!("Pattern '{input_str}' has no digit placeholders"));
    }

    let as_affix = |t: &PatternToken| match t {
        PatternToken::ThousandsSeparator => PatternToken::LiteralChar(','),
        other => other.clone(),
    };

    let mut pattern = NumberPattern {
        prefix: tokens[..first].iter().map(as_affix).collect(),
        suffix: tokens[last + 1..].iter().map(as_affix).collect(),
        ..NumberPattern::default()
    };

    let mut after_decimal = false;
    for token in &tokens[first..=last] {
        match token {
            PatternToken::DecimalPoint if after_decimal => {
                return Err(format!("Pattern '{input_str}' has more than one decimal point"));
            }
            PatternToken::DecimalPoint => after_decimal = true,
            PatternToken::ThousandsSeparator if !after_decimal => pattern.grouping = true,
            PatternToken::ThousandsSeparator => {}
            PatternToken::DigitOrZero if after_decimal => {
                pattern.min_fraction_digits += 1;
                pattern.max_fraction_digits += 1;
            }
            PatternToken::DigitIfNeeded if after_decimal => pattern.max_fraction_digits += 1,
            PatternToken::DigitOrZero => pattern.min_integer_digits += 1,
            PatternToken::DigitIfNeeded => {}
            other => {
                return Err(format!(
                    "Pattern '{input_str}' has literal {other:?} inside its digit run"
                ));
            }
        }
    }

    Ok(pattern)
}
