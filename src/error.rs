
use crate::parsing::number::ParseNumberError;
use crate::parsing::source::SourceOffset;
use crate::parsing::token::Token;
use crate::stack::StackError;

use thiserror::Error;

/// Any failure of the expression pipeline. Every error aborts the
/// current evaluation; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
  #[error("format error: {0}")]
  Format(#[from] FormatError),
  #[error("evaluation error: {0}")]
  Eval(#[from] EvalError),
}

/// The raw text could not be turned into a well-formed token
/// sequence.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FormatError {
  #[error("unidentified character {character:?} at position {position}")]
  UnidentifiedCharacter {
    character: char,
    position: SourceOffset,
  },
  #[error("{0}")]
  MalformedNumber(#[from] ParseNumberError),
  #[error("duplicate decimal point at position {0}")]
  DuplicateDecimalPoint(SourceOffset),
  #[error("expression too long ({length} characters, limit is {limit})")]
  TooLong {
    length: usize,
    limit: usize,
  },
  #[error("unbalanced parentheses")]
  UnbalancedParentheses,
  #[error("misplaced token {token} (token {index})")]
  MisplacedToken {
    token: Token,
    index: usize,
  },
  #[error("unexpected end of expression")]
  UnexpectedEnd,
}

/// The postfix sequence could not be reduced to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("stack underflow")]
  StackUnderflow,
  #[error("malformed expression")]
  MalformedExpression,
}

impl ExpressionError {
  pub fn is_format_error(&self) -> bool {
    matches!(self, ExpressionError::Format(_))
  }

  pub fn is_eval_error(&self) -> bool {
    matches!(self, ExpressionError::Eval(_))
  }
}

impl From<StackError> for EvalError {
  fn from(err: StackError) -> Self {
    match err {
      StackError::NotEnoughElements { .. } => EvalError::StackUnderflow,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    let err = FormatError::UnidentifiedCharacter { character: 'a', position: SourceOffset(2) };
    assert_eq!(err.to_string(), "unidentified character 'a' at position 2");
    assert_eq!(EvalError::StackUnderflow.to_string(), "stack underflow");
    assert_eq!(EvalError::MalformedExpression.to_string(), "malformed expression");
  }

  #[test]
  fn test_expression_error_prefixes() {
    let err = ExpressionError::from(FormatError::UnbalancedParentheses);
    assert!(err.is_format_error());
    assert_eq!(err.to_string(), "format error: unbalanced parentheses");

    let err = ExpressionError::from(EvalError::StackUnderflow);
    assert!(err.is_eval_error());
    assert_eq!(err.to_string(), "evaluation error: stack underflow");
  }

  #[test]
  fn test_stack_error_is_underflow() {
    let err = StackError::NotEnoughElements { expected: 1, actual: 0 };
    assert_eq!(EvalError::from(err), EvalError::StackUnderflow);
  }
}
