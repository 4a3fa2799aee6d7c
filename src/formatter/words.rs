const SPELLED_CHARS: &str = "0123456789-.";

const NUMBER_WORDS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "minus",
    "point",
];

/// Spell a string out character by character
///
/// Digits, `-` and `.` become words; every other character is dropped.
///
/// # Examples
/// ```
/// use customer_format::formatter::spell_out;
///
/// assert_eq!(spell_out("+1 (425) 555-0100"), "one four two five five five five minus zero one zero zero");
/// ```
pub fn spell_out(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| SPELLED_CHARS.find(c).map(|index| NUMBER_WORDS[index]))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_has_a_word() {
        assert_eq!(
            spell_out("0123456789-."),
            "zero one two three four five six seven eight nine minus point"
        );
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(spell_out("1234567"), "one two three four five six seven");
        assert_eq!(spell_out("-12.50"), "minus one two point five zero");
        assert_eq!(spell_out("(+) "), "");
        assert_eq!(spell_out(""), "");
        assert_eq!(spell_out(" 7 "), "seven");
    }
}
