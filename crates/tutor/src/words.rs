use regex::Regex;

/// Ordered word-operator substitution table.
///
/// Each entry maps a spoken phrase to its symbolic form. Order matters:
/// entries are applied first to last and matches are not re-scanned
/// after a substitution.
pub const WORD_OPERATORS: &[(&str, &str)] = &[
    (" times ", " * "),
    (" multiplied by ", " * "),
    (" divide ", " / "),
    (" divided by ", " / "),
    (" plus ", " + "),
    (" minus ", " - "),
    (" power ", " ^ "),
    (" squared", "^2"),
    (" cubed", "^3"),
];

/// Replace every occurrence of each table phrase with its symbol,
/// case-insensitively, in table order.
///
/// Returns the input unchanged when no phrase matches.
pub fn substitute_words(input: &str, table: &[(&str, &str)]) -> String {
    let mut out = input.to_string();
    for (phrase, symbol) in table {
        if let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(phrase))) {
            out = re.replace_all(&out, *symbol).into_owned();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_becomes_star() {
        assert_eq!(substitute_words("4 times 5", WORD_OPERATORS), "4 * 5");
    }

    #[test]
    fn divided_by_becomes_slash() {
        assert_eq!(substitute_words("10 divided by 2", WORD_OPERATORS), "10 / 2");
    }

    #[test]
    fn squared_and_cubed_append_exponents() {
        assert_eq!(substitute_words("4 squared", WORD_OPERATORS), "4^2");
        assert_eq!(substitute_words("3 cubed", WORD_OPERATORS), "3^3");
    }

    #[test]
    fn replacement_is_case_insensitive() {
        assert_eq!(substitute_words("4 TIMES 5", WORD_OPERATORS), "4 * 5");
    }

    #[test]
    fn no_match_returns_input_unchanged() {
        assert_eq!(substitute_words("banana", WORD_OPERATORS), "banana");
        assert_eq!(substitute_words("10 / 2", WORD_OPERATORS), "10 / 2");
    }

    #[test]
    fn divided_by_is_not_clobbered_by_divide() {
        // " divide " requires a trailing space, so it skips "divided by"
        assert_eq!(substitute_words("8 divide 4", WORD_OPERATORS), "8 / 4");
        assert_eq!(substitute_words("8 divided by 4", WORD_OPERATORS), "8 / 4");
    }
}
