use crate::classify::match_trigger;
use crate::words::substitute_words;

/// Isolate the candidate arithmetic expression from a normalized message.
///
/// Removes a single leading trigger phrase plus any following
/// whitespace, substitutes word operators from `table`, strips any
/// trailing run of `?`, and trims. The result never carries leading or
/// trailing whitespace.
pub fn extract_expression(message: &str, table: &[(&str, &str)]) -> String {
    let stripped = match_trigger(message)
        .and_then(|phrase| message.strip_prefix(phrase))
        .map(str::trim_start)
        .unwrap_or(message);
    let substituted = substitute_words(stripped, table);
    substituted.trim_end_matches('?').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WORD_OPERATORS;

    #[test]
    fn strips_trigger_and_question_mark() {
        assert_eq!(
            extract_expression("what is 10 divided by 2?", WORD_OPERATORS),
            "10 / 2"
        );
    }

    #[test]
    fn no_trigger_is_a_noop_strip() {
        assert_eq!(extract_expression("4 squared", WORD_OPERATORS), "4^2");
        assert_eq!(extract_expression("2+2", WORD_OPERATORS), "2+2");
    }

    #[test]
    fn trailing_question_run_is_removed() {
        assert_eq!(extract_expression("compute 3*3???", WORD_OPERATORS), "3*3");
    }

    #[test]
    fn renormalizing_is_idempotent() {
        let once = extract_expression("what is 10 divided by 2?", WORD_OPERATORS);
        let twice = substitute_words(&once, WORD_OPERATORS).trim().to_string();
        assert_eq!(once, twice);
    }
}
