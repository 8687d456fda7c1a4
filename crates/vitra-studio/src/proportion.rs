//! Rule of three: `a / b = c / x`, so `x = b * c / a`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProportionError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("A cannot be zero (division by zero)")]
    DivisionByZero,
    #[error("result is not a finite number")]
    InvalidResult,
}

/// Solves for `x`. Any empty input means "not enough data yet" and yields `Ok(None)`.
pub fn solve(a: &str, b: &str, c: &str) -> Result<Option<f64>, ProportionError> {
    let (a, b, c) = (a.trim(), b.trim(), c.trim());
    if a.is_empty() || b.is_empty() || c.is_empty() {
        return Ok(None);
    }

    let (a, b, c) = (number(a)?, number(b)?, number(c)?);
    if a == 0.0 {
        return Err(ProportionError::DivisionByZero);
    }

    let x = b * c / a;
    if !x.is_finite() {
        return Err(ProportionError::InvalidResult);
    }
    Ok(Some(x))
}

fn number(s: &str) -> Result<f64, ProportionError> {
    match s.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(ProportionError::InvalidNumber(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_rule_of_three() {
        assert_eq!(solve("2", "4", "3"), Ok(Some(6.0)));
        assert_eq!(solve(" 0.5 ", "1", "-2"), Ok(Some(-4.0)));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(solve("", "4", "3"), Ok(None));
        assert_eq!(solve("2", "  ", "3"), Ok(None));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(solve("two", "4", "3"), Err(ProportionError::InvalidNumber("two".into())));
        assert_eq!(solve("NaN", "4", "3"), Err(ProportionError::InvalidNumber("NaN".into())));
    }

    #[test]
    fn rejects_zero_divisor() {
        assert_eq!(solve("0", "4", "3"), Err(ProportionError::DivisionByZero));
        assert_eq!(solve("-0", "4", "3"), Err(ProportionError::DivisionByZero));
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(solve("1e-300", "1e300", "1e300"), Err(ProportionError::InvalidResult));
        assert_eq!(solve("1", "inf", "1"), Err(ProportionError::InvalidResult));
    }
}
