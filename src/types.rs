//! Type definitions shared by the parser and the formatter
//!
//! This module defines the parsed representation of numeric patterns, the
//! locale settings consulted while rendering them, and the field layouts a
//! format code resolves to.

/// Represents a single token parsed from a numeric pattern such as `#,##0.00`
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    /// Number placeholder (0) that shows zero if no digit exists
    DigitOrZero,
    /// Number placeholder (#) that shows nothing if no digit exists
    DigitIfNeeded,
    /// Decimal point (.)
    DecimalPoint,
    /// Thousands separator (,)
    ThousandsSeparator,
    /// Currency symbol placeholder (¤)
    CurrencySymbol,
    /// Literal character to display directly
    LiteralChar(char),
    /// Quoted text, like "text"
    QuotedText(String),
}

impl PatternToken {
    /// Checks if the token is a digit placeholder
    pub fn is_digit_placeholder(&self) -> bool {
        matches!(self, PatternToken::DigitOrZero | PatternToken::DigitIfNeeded)
    }
}

/// A parsed numeric pattern, split around its digit run
///
/// Tokens before the first placeholder form the prefix, tokens after the last
/// placeholder form the suffix. Everything in between describes the number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberPattern {
    /// Literal and currency tokens printed before the number
    pub prefix: Vec<PatternToken>,
    /// Literal and currency tokens printed after the number
    pub suffix: Vec<PatternToken>,
    /// Whether the integer part is grouped by thousands
    pub grouping: bool,
    /// Number of `0` placeholders in the integer part
    pub min_integer_digits: usize,
    /// Number of `0` placeholders after the decimal point
    pub min_fraction_digits: usize,
    /// Total number of placeholders after the decimal point
    pub max_fraction_digits: usize,
}

/// Locale-specific settings used while rendering numbers
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Decimal separator
    pub decimal_point: char,
    /// Group separator inserted every three integer digits
    pub thousands_separator: char,
    /// Symbol substituted for `¤`
    pub currency_symbol: String,
    /// Pattern used for plain grouped numbers
    pub number_pattern: String,
    /// Pattern used for currency amounts
    pub currency_pattern: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_separator: ',',
            currency_symbol: "¤".to_string(),
            number_pattern: "#,##0.00".to_string(),
            currency_pattern: "¤#,##0.00".to_string(),
        }
    }
}

impl LocaleSettings {
    /// Replace the decimal separator
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Replace the group separator
    pub fn with_thousands_separator(mut self, thousands_separator: char) -> Self {
        self.thousands_separator = thousands_separator;
        self
    }

    /// Replace the symbol substituted for `¤`
    pub fn with_currency_symbol(mut self, currency_symbol: String) -> Self {
        self.currency_symbol = currency_symbol;
        self
    }

    /// Replace the pattern used for plain grouped numbers
    pub fn with_number_pattern(mut self, number_pattern: String) -> Self {
        self.number_pattern = number_pattern;
        self
    }

    /// Replace the pattern used for currency amounts
    pub fn with_currency_pattern(mut self, currency_pattern: String) -> Self {
        self.currency_pattern = currency_pattern;
        self
    }
}

/// How revenue is rendered inside a composed record string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueStyle {
    /// Grouped decimal using the locale number pattern
    Number,
    /// Currency amount using the locale currency pattern
    Currency,
    /// Digit-by-digit words
    Words,
}

/// How the contact phone is rendered inside a composed record string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneStyle {
    /// The phone exactly as stored
    AsStored,
    /// Digit-by-digit words
    Words,
}

/// The fields a format code selects, in output order (name, revenue, phone)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: bool,
    pub revenue: Option<RevenueStyle>,
    pub phone: Option<PhoneStyle>,
}

impl FieldLayout {
    pub const fn new(name: bool, revenue: Option<RevenueStyle>, phone: Option<PhoneStyle>) -> Self {
        Self {
            name,
            revenue,
            phone,
        }
    }
}
