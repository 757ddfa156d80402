use regex::Regex;

use crate::eval;

/// A computed answer together with its one-line worked explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Explained {
    /// Final numeric answer, already formatted for display.
    pub answer: String,
    /// One-line natural-language account of how it was obtained.
    pub explanation: String,
}

/// The six binary operators the fast path can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `%`
    Rem,
}

impl BinOp {
    /// Map an operator symbol to its variant.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }

    /// Apply the arithmetic primitive for this operator.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
            Self::Rem => a % b,
        }
    }

    /// Operator-specific worked explanation for `a OP b = r`.
    pub fn explain(self, a: f64, b: f64, r: f64) -> String {
        match self {
            Self::Mul => format!("Multiply {} by {}: {} × {} = {}.", a, b, a, b, r),
            Self::Div => format!("Divide {} by {}: {} ÷ {} = {}.", a, b, a, b, r),
            Self::Add => format!("Add {} and {}: {} + {} = {}.", a, b, a, b, r),
            Self::Sub => format!("Subtract {} from {}: {} - {} = {}.", b, a, a, b, r),
            Self::Pow => format!("{} to the power of {} = {}.", a, b, r),
            Self::Rem => format!("Result: {}", r),
        }
    }
}

// Canonicalize visually similar operator glyphs before matching.
fn canonicalize_glyphs(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/").replace('—', "-")
}

/// Parse a strict `a OP b` expression: one optionally-signed decimal
/// number, one operator symbol, one more number, nothing else.
pub fn parse_binary(expr: &str) -> Option<(f64, BinOp, f64)> {
    let re = Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)\s*([+\-*/^%])\s*([+-]?\d+(?:\.\d+)?)\s*$")
        .ok()?;
    let caps = re.captures(expr)?;
    let a: f64 = caps.get(1)?.as_str().parse().ok()?;
    let op = BinOp::from_symbol(caps.get(2)?.as_str())?;
    let b: f64 = caps.get(3)?.as_str().parse().ok()?;
    Some((a, op, b))
}

/// Fast path: compute a single binary operation with a tailored
/// explanation, or fall back to evaluating the whole expression with a
/// generic one. `None` means the expression could not be computed at
/// all and the caller should make its own second attempt.
pub fn explain_simple(expr: &str) -> Option<Explained> {
    let normalized = canonicalize_glyphs(expr);
    if let Some((a, op, b)) = parse_binary(&normalized) {
        let result = op.apply(a, b);
        if !result.is_finite() {
            return None;
        }
        return Some(Explained {
            answer: format!("{}", result),
            explanation: op.explain(a, b, result),
        });
    }
    let value = eval::evaluate(&normalized).ok()?;
    Some(Explained {
        answer: format!("{}", value),
        explanation: format!("I evaluated {} = {}.", expr, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn each_operator_has_its_template() {
        let cases = [
            ("3*4", "Multiply 3 by 4: 3 × 4 = 12."),
            ("10/2", "Divide 10 by 2: 10 ÷ 2 = 5."),
            ("1+2", "Add 1 and 2: 1 + 2 = 3."),
            ("5-2", "Subtract 2 from 5: 5 - 2 = 3."),
            ("4^2", "4 to the power of 2 = 16."),
            ("10%3", "Result: 1"),
        ];
        for (expr, expected) in cases {
            let found = explain_simple(expr).unwrap();
            assert_eq!(found.explanation, expected, "expr {}", expr);
        }
    }

    #[test]
    fn glyph_variants_take_the_fast_path() {
        assert_eq!(
            explain_simple("3×4").unwrap().explanation,
            "Multiply 3 by 4: 3 × 4 = 12."
        );
        assert_eq!(
            explain_simple("10÷2").unwrap().explanation,
            "Divide 10 by 2: 10 ÷ 2 = 5."
        );
    }

    #[test]
    fn signed_and_decimal_operands_parse() {
        let (a, op, b) = parse_binary("-1.5 * +2").unwrap();
        assert_eq!((a, b), (-1.5, 2.0));
        assert_eq!(op, BinOp::Mul);
    }

    #[test]
    fn multi_operator_expressions_get_the_generic_explanation() {
        let found = explain_simple("2+3*4").unwrap();
        assert_eq!(found.answer, "14");
        assert_eq!(found.explanation, "I evaluated 2+3*4 = 14.");
    }

    #[test]
    fn non_binary_shapes_are_rejected_by_the_pattern() {
        assert!(parse_binary("2+3*4").is_none());
        assert!(parse_binary("(2)+3").is_none());
        assert!(parse_binary("2 +").is_none());
    }

    #[test]
    fn uncomputable_input_falls_through() {
        assert!(explain_simple("2 +").is_none());
        assert!(explain_simple("banana").is_none());
    }

    #[test]
    fn division_by_zero_falls_through() {
        assert!(explain_simple("1/0").is_none());
    }

    proptest! {
        #[test]
        fn strict_binary_shapes_always_take_the_fast_path(
            a in -9999i64..9999,
            b in 1i64..9999,
            op in prop::sample::select(vec!['+', '-', '*', '/']),
        ) {
            let expr = format!("{} {} {}", a, op, b);
            let found = explain_simple(&expr).expect("fast path must match");
            let expected = match op {
                '+' => a as f64 + b as f64,
                '-' => a as f64 - b as f64,
                '*' => a as f64 * b as f64,
                _ => a as f64 / b as f64,
            };
            prop_assert_eq!(found.answer, format!("{}", expected));
        }
    }
}
