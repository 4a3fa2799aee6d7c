use winnow::ascii::digit1;
use winnow::combinator::separated;
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

/// An uppercase letter followed by any number of letters, e.g. `Jeffrey`
fn capitalized_word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        one_of(|c: char| c.is_uppercase()),
        take_while(0.., |c: char| c.is_alphabetic()),
    )
        .take()
        .parse_next(input)
}

/// Capitalized words separated by single spaces
fn full_name(input: &mut &str) -> ModalResult<()> {
    separated(1.., capitalized_word, ' ').parse_next(input)
}

/// `+<digits> (<digits>) <digits>-<digits>`
fn phone_number(input: &mut &str) -> ModalResult<()> {
    ('+', digit1, " (", digit1, ") ", digit1, '-', digit1)
        .void()
        .parse_next(input)
}

/// Checks that `value` is one or more space-separated capitalized words
pub fn is_valid_name(value: &str) -> bool {
    full_name.parse(value).is_ok()
}

/// Checks that `value` has the `+1 (425) 555-0100` shape
pub fn is_valid_phone(value: &str) -> bool {
    phone_number.parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Jeffrey Richter"));
        assert!(is_valid_name("Cher"));
        assert!(is_valid_name("Jean Luc Picard"));
        assert!(is_valid_name("McDonald"));
        assert!(is_valid_name("Фёдор Достоевский"));

        assert!(!is_valid_name("john"));
        assert!(!is_valid_name("Jeffrey richter"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Jeffrey  Richter"));
        assert!(!is_valid_name(" Jeffrey"));
        assert!(!is_valid_name("Jeffrey "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("Anne-Marie"));
    }

    #[test]
    fn test_phones() {
        assert!(is_valid_phone("+1 (425) 555-0100"));
        assert!(is_valid_phone("+375 (29) 1234567-89"));

        assert!(!is_valid_phone("5551234"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("1 (425) 555-0100"));
        assert!(!is_valid_phone("+1 (425) 5550100"));
        assert!(!is_valid_phone("+1 (425)555-0100"));
        assert!(!is_valid_phone("+1 (425) 555-0100 "));
        assert!(!is_valid_phone("+1 () 555-0100"));
    }
}
