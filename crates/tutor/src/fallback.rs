use rand::seq::SliceRandom;
use rand::Rng;

/// Generic tutoring openers used when no topical answer applies.
pub const OPENERS: [&str; 5] = [
    "Let's break that down step by step!",
    "Interesting question — think of it like this:",
    "Hmm, try to visualize it this way:",
    "That’s a great question! Let me explain clearly.",
    "Let’s solve this together:",
];

/// Fixed answer for messages mentioning Pythagoras.
pub const PYTHAGORAS: &str =
    "Pythagoras' theorem says a² + b² = c² — it connects the sides of a right triangle!";

/// Fixed answer for messages mentioning derivatives.
pub const DERIVATIVE: &str =
    "The derivative of xⁿ is n×xⁿ⁻¹ — it’s how you find a slope at a point!";

/// Fixed answer for messages mentioning integrals.
pub const INTEGRAL: &str =
    "An integral is like adding up tiny slices to find the total area under a curve.";

/// Produce a tutoring-style reply for a message that is not arithmetic.
///
/// Topical keywords are checked in precedence order on the normalized
/// message; otherwise one of the five openers is chosen uniformly from
/// the supplied random source and the verbatim original message is
/// quoted back.
pub fn fallback_reply<R: Rng>(normalized: &str, original: &str, rng: &mut R) -> String {
    if normalized.contains("pythagoras") {
        return PYTHAGORAS.to_string();
    }
    if normalized.contains("derivative") {
        return DERIVATIVE.to_string();
    }
    if normalized.contains("integral") {
        return INTEGRAL.to_string();
    }
    let opener = OPENERS.choose(rng).copied().unwrap_or(OPENERS[0]);
    format!(
        "{} So you're asking about \"{}\"? Here's how to think about it...",
        opener, original
    )
}
