
use super::operator::Operator;
use super::token::Token;
use crate::error::FormatError;
use crate::stack::Stack;

use tracing::warn;

/// An entry on the operator stack. Opening parentheses sit on the
/// stack as barriers that no operator pops past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpStackValue {
  Operator(Operator),
  LeftParen,
}

/// Reorders an infix token sequence into postfix order with the
/// shunting yard algorithm.
///
/// This never fails. Unbalanced parentheses are repaired on a best
/// effort basis: a `)` with no matching `(` drains the operator stack,
/// and a `(` that is never closed is dropped at the end. The output
/// never contains parentheses. Callers wanting strict validation
/// should run [`check_balanced`] first.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
  let mut output = Vec::with_capacity(tokens.len());
  let mut operator_stack: Stack<OpStackValue> = Stack::new();
  for token in tokens {
    match token {
      Token::Number(_) => {
        output.push(token);
      }
      Token::Operator(op) => {
        // Pop operators until we hit one that binds less tightly (or a
        // parenthesis).
        while let Some(OpStackValue::Operator(top)) = operator_stack.pop_if(|value| {
          matches!(value, OpStackValue::Operator(top) if compare_precedence(*top, op))
        }) {
          output.push(Token::Operator(top));
        }
        operator_stack.push(OpStackValue::Operator(op));
      }
      Token::LeftParen => {
        operator_stack.push(OpStackValue::LeftParen);
      }
      Token::RightParen => {
        close_group(&mut operator_stack, &mut output);
      }
    }
  }

  // Pop and emit remaining operators.
  for value in operator_stack.drain_top_down() {
    match value {
      OpStackValue::Operator(op) => output.push(Token::Operator(op)),
      OpStackValue::LeftParen => warn!("discarding unclosed opening parenthesis"),
    }
  }
  output
}

/// Checks that every `)` closes an earlier `(` and that every `(` is
/// closed.
pub fn check_balanced(tokens: &[Token]) -> Result<(), FormatError> {
  let mut depth: usize = 0;
  for token in tokens {
    match token {
      Token::LeftParen => depth += 1,
      Token::RightParen => {
        depth = depth.checked_sub(1).ok_or(FormatError::UnbalancedParentheses)?;
      }
      Token::Number(_) | Token::Operator(_) => {}
    }
  }
  if depth == 0 {
    Ok(())
  } else {
    Err(FormatError::UnbalancedParentheses)
  }
}

/// Returns true if `stack_op`, sitting on the operator stack, must be
/// emitted before `current_op` is pushed.
fn compare_precedence(stack_op: Operator, current_op: Operator) -> bool {
  let assoc = current_op.associativity();
  (assoc.is_left_assoc() && current_op.precedence() <= stack_op.precedence()) ||
    (assoc.is_right_assoc() && current_op.precedence() < stack_op.precedence())
}

fn close_group(operator_stack: &mut Stack<OpStackValue>, output: &mut Vec<Token>) {
  loop {
    match operator_stack.pop() {
      Ok(OpStackValue::Operator(op)) => output.push(Token::Operator(op)),
      Ok(OpStackValue::LeftParen) => return,
      Err(_) => {
        warn!("closing parenthesis without a matching opening parenthesis");
        return;
      }
    }
  }
}
