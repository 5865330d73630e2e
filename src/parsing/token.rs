
use super::operator::Operator;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
  /// A numeric literal. Negative only when the minus sign was
  /// unambiguously a sign rather than a subtraction.
  Number(f64),
  /// A binary operator.
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl Token {
  pub fn is_number(&self) -> bool {
    matches!(self, Token::Number(_))
  }

  pub fn is_operator(&self) -> bool {
    matches!(self, Token::Operator(_))
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{}", n),
      Token::Operator(op) => write!(f, "{}", op),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}

/// Writes a token sequence back out as a compact infix string, with
/// no separators. For any sequence produced by the tokenizer, the
/// result tokenizes back to the same sequence.
pub fn serialize(tokens: &[Token]) -> String {
  tokens.iter().join("")
}

/// Writes a (usually postfix) token sequence with a single space
/// between tokens, which keeps adjacent numbers distinguishable.
pub fn serialize_spaced(tokens: &[Token]) -> String {
  tokens.iter().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(Token::Number(3.0).to_string(), "3");
    assert_eq!(Token::Number(-2.5).to_string(), "-2.5");
    assert_eq!(Token::Number(0.1).to_string(), "0.1");
    assert_eq!(Token::Operator(Operator::Pow).to_string(), "^");
    assert_eq!(Token::LeftParen.to_string(), "(");
    assert_eq!(Token::RightParen.to_string(), ")");
  }

  #[test]
  fn test_serialize() {
    let tokens = vec![
      Token::LeftParen,
      Token::Number(5.0),
      Token::Operator(Operator::Sub),
      Token::Number(-3.0),
      Token::RightParen,
      Token::Operator(Operator::Mul),
      Token::Number(0.5),
    ];
    assert_eq!(serialize(&tokens), "(5--3)*0.5");
    assert_eq!(serialize(&[]), "");
  }

  #[test]
  fn test_serialize_spaced() {
    let tokens = vec![
      Token::Number(2.0),
      Token::Number(3.0),
      Token::Operator(Operator::Add),
    ];
    assert_eq!(serialize_spaced(&tokens), "2 3 +");
  }

  #[test]
  fn test_predicates() {
    assert!(Token::Number(1.0).is_number());
    assert!(!Token::LeftParen.is_number());
    assert!(Token::Operator(Operator::Add).is_operator());
    assert!(!Token::RightParen.is_operator());
  }
}
