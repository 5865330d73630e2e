
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A numeric literal which does not fit the literal grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed number {literal:?}")]
pub struct ParseNumberError {
  pub literal: String,
}

/// Parses a numeric literal. The accepted grammar is an optional
/// leading `-`, followed by either digits with an optional decimal
/// point and fraction, or a decimal point followed by at least one
/// digit. Exponents, `+` signs, `inf` and `nan` are all rejected, as
/// are literals too large to be represented as a finite `f64`.
pub fn parse_number(literal: &str) -> Result<f64, ParseNumberError> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap());
  let err = || ParseNumberError { literal: literal.to_owned() };
  if !RE.is_match(literal) {
    return Err(err());
  }
  let value = literal.parse::<f64>().map_err(|_| err())?;
  if !value.is_finite() {
    return Err(err());
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_integers() {
    assert_eq!(parse_number("0"), Ok(0.0));
    assert_eq!(parse_number("42"), Ok(42.0));
    assert_eq!(parse_number("-17"), Ok(-17.0));
  }

  #[test]
  fn test_decimals() {
    assert_eq!(parse_number("3.25"), Ok(3.25));
    assert_eq!(parse_number("-0.5"), Ok(-0.5));
    assert_eq!(parse_number("5."), Ok(5.0));
    assert_eq!(parse_number(".5"), Ok(0.5));
    assert_eq!(parse_number("-.5"), Ok(-0.5));
  }

  #[test]
  fn test_rejected_literals() {
    for literal in ["", "-", ".", "-.", "1.2.3", "--1", "+1", "1e5", "inf", "NaN", " 1"] {
      assert_eq!(
        parse_number(literal),
        Err(ParseNumberError { literal: literal.to_owned() }),
        "literal {literal:?} should be rejected",
      );
    }
  }

  #[test]
  fn test_overflowing_literal() {
    let literal = "9".repeat(400);
    assert_eq!(parse_number(&literal), Err(ParseNumberError { literal: literal.clone() }));
    let literal = format!("-{}.5", "1".repeat(320));
    assert_eq!(parse_number(&literal), Err(ParseNumberError { literal: literal.clone() }));
    assert_eq!(parse_number(&"9".repeat(300)), Ok(1e300));
  }

  #[test]
  fn test_error_message() {
    let err = parse_number("-").unwrap_err();
    assert_eq!(err.to_string(), "malformed number \"-\"");
  }
}
