use crate::types::{LocaleSettings, PatternToken};

/// Append the literal tokens surrounding a digit run
pub(super) fn push_affix(result: &mut String, tokens: &[PatternToken], locale: &LocaleSettings) {
    for token in tokens {
        match token {
            PatternToken::CurrencySymbol => {
                result.push_str(&locale.currency_symbol);
            }
            PatternToken::LiteralChar(c) => {
                result.push(*c);
            }
            PatternToken::QuotedText(quoted_text) => {
                result.push_str(quoted_text);
            }
            PatternToken::ThousandsSeparator => {
                result.push(',');
            }
            _ => {
                // Placeholders never appear outside the digit run
            }
        }
    }
}
