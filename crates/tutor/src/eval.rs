use thiserror::Error;

/// Error type for the expression evaluator adapter.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The expression could not be parsed or evaluated.
    #[error("invalid expression: {0}")]
    Invalid(#[from] meval::Error),
    /// Evaluation produced NaN or an infinity.
    #[error("non-finite result")]
    NonFinite,
}

/// Evaluate an arithmetic expression string.
///
/// Thin adapter over `meval`: maps the `π` glyph to the evaluator's
/// `pi` constant and rejects non-finite results, so callers only ever
/// see a usable number or an error.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let prepared = expr.replace('π', "pi");
    let value = meval::eval_str(&prepared)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(evaluate("2+2*3").unwrap(), 8.0);
        assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
    }

    #[test]
    fn supports_power_and_modulo() {
        assert_eq!(evaluate("2^10").unwrap(), 1024.0);
        assert_eq!(evaluate("10 % 3").unwrap(), 1.0);
    }

    #[test]
    fn pi_glyph_is_understood() {
        let v = evaluate("2*π").unwrap();
        assert!((v - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(evaluate("2 +").is_err());
        assert!(evaluate("hello").is_err());
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert!(matches!(evaluate("1/0"), Err(EvalError::NonFinite)));
    }
}
