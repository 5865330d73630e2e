
//! Stack machine reducing a postfix token sequence to a single
//! value.

use crate::error::EvalError;
use crate::parsing::token::Token;
use crate::stack::Stack;

/// Evaluates a postfix token sequence.
///
/// Each operator pops its right operand, then its left operand, and
/// pushes the result. Running out of operands is
/// [`EvalError::StackUnderflow`]; ending with anything other than
/// exactly one value (or meeting a parenthesis, which postfix order
/// never contains) is [`EvalError::MalformedExpression`].
pub fn evaluate(postfix: Vec<Token>) -> Result<f64, EvalError> {
  let mut stack: Stack<f64> = Stack::new();
  for token in postfix {
    match token {
      Token::Number(n) => {
        stack.push(n);
      }
      Token::Operator(op) => {
        let second = stack.pop()?;
        let first = stack.pop()?;
        stack.push(op.apply(first, second));
      }
      Token::LeftParen | Token::RightParen => {
        return Err(EvalError::MalformedExpression);
      }
    }
  }
  if stack.len() != 1 {
    return Err(EvalError::MalformedExpression);
  }
  Ok(stack.pop()?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::Operator;

  use approx::assert_abs_diff_eq;

  fn num(n: f64) -> Token {
    Token::Number(n)
  }

  fn op(op: Operator) -> Token {
    Token::Operator(op)
  }

  #[test]
  fn test_single_value() {
    assert_eq!(evaluate(vec![num(4.5)]), Ok(4.5));
  }

  #[test]
  fn test_operand_order() {
    assert_eq!(evaluate(vec![num(8.0), num(3.0), op(Operator::Sub)]), Ok(5.0));
    assert_eq!(evaluate(vec![num(8.0), num(2.0), op(Operator::Div)]), Ok(4.0));
    assert_eq!(evaluate(vec![num(2.0), num(3.0), op(Operator::Pow)]), Ok(8.0));
  }

  #[test]
  fn test_nested() {
    // 2 3 2 ^ ^ == 2 ^ (3 ^ 2)
    let postfix = vec![num(2.0), num(3.0), num(2.0), op(Operator::Pow), op(Operator::Pow)];
    assert_eq!(evaluate(postfix), Ok(512.0));
    // 1.5 2 * 0.1 +
    let postfix = vec![num(1.5), num(2.0), op(Operator::Mul), num(0.1), op(Operator::Add)];
    assert_abs_diff_eq!(evaluate(postfix).unwrap(), 3.1, epsilon = 1e-12);
  }

  #[test]
  fn test_fractional_power() {
    let postfix = vec![num(2.0), num(0.5), op(Operator::Pow)];
    assert_abs_diff_eq!(evaluate(postfix).unwrap(), std::f64::consts::SQRT_2, epsilon = 1e-12);
  }

  #[test]
  fn test_stack_underflow() {
    assert_eq!(evaluate(vec![op(Operator::Add)]), Err(EvalError::StackUnderflow));
    assert_eq!(evaluate(vec![num(1.0), op(Operator::Add)]), Err(EvalError::StackUnderflow));
    assert_eq!(
      evaluate(vec![num(2.0), num(3.0), op(Operator::Add), op(Operator::Add)]),
      Err(EvalError::StackUnderflow),
    );
  }

  #[test]
  fn test_empty_is_malformed() {
    assert_eq!(evaluate(vec![]), Err(EvalError::MalformedExpression));
  }

  #[test]
  fn test_leftover_values_are_malformed() {
    assert_eq!(evaluate(vec![num(2.0), num(3.0)]), Err(EvalError::MalformedExpression));
  }

  #[test]
  fn test_parenthesis_is_malformed() {
    assert_eq!(
      evaluate(vec![Token::LeftParen, num(1.0)]),
      Err(EvalError::MalformedExpression),
    );
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(evaluate(vec![num(1.0), num(0.0), op(Operator::Div)]), Ok(f64::INFINITY));
    assert!(evaluate(vec![num(0.0), num(0.0), op(Operator::Div)]).unwrap().is_nan());
  }
}
