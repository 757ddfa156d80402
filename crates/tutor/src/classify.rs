/// Phrases that mark the start of an arithmetic query.
pub const TRIGGER_PHRASES: &[&str] = &[
    "what is",
    "calculate",
    "solve",
    "evaluate",
    "how much is",
    "compute",
];

// Characters that suggest arithmetic content (digits are checked separately).
const MATH_CHARS: &[char] = &[
    'π', '.', '+', '-', '*', '/', '^', '%', '(', ')', '×', '÷', '√',
];

/// Return the trigger phrase the message starts with, if any.
///
/// The phrase must end at a word boundary, so "computed result" does
/// not count as a "compute" trigger. Expects a normalized (lowercased)
/// message.
pub fn match_trigger(message: &str) -> Option<&'static str> {
    TRIGGER_PHRASES
        .iter()
        .copied()
        .find(|phrase| match message.strip_prefix(phrase) {
            Some(rest) => !rest.chars().next().map_or(false, |c| c.is_alphanumeric()),
            None => false,
        })
}

/// Decide whether a normalized message is plausibly an arithmetic query.
///
/// The message must contain at least one math-looking character, and
/// either start with a trigger phrase or contain a digit. The second
/// half of the test keeps prose with stray punctuation ("it's a nice
/// day.") out while still admitting bare expressions like "2+2".
pub fn looks_like_math(message: &str) -> bool {
    let has_digit = message.chars().any(|c| c.is_ascii_digit());
    let has_math_char = has_digit || message.contains(MATH_CHARS);
    has_math_char && (match_trigger(message).is_some() || has_digit)
}
