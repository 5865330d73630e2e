
//! Infix arithmetic expression engine.
//!
//! An expression passes through three stages, each usable on its own:
//! [`tokenize`](parsing::tokenizer::tokenize) turns text into tokens,
//! [`to_postfix`](parsing::shunting_yard::to_postfix) reorders them
//! with the shunting yard algorithm, and
//! [`evaluate`](evaluator::evaluate) reduces the postfix sequence to a
//! number. [`evaluate_expression`] runs the whole pipeline.

pub mod command;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod parsing;
pub mod stack;

use crate::config::EngineConfig;
use crate::error::ExpressionError;
use crate::parsing::shunting_yard::{check_balanced, to_postfix};
use crate::parsing::token::{serialize_spaced, Token};
use crate::parsing::tokenizer::tokenize_with;

use tracing::debug;

/// Evaluates `raw` with the default, permissive configuration.
/// Whitespace must already have been removed.
pub fn evaluate_expression(raw: &str) -> Result<f64, ExpressionError> {
  evaluate_expression_with(raw, &EngineConfig::default())
}

/// Evaluates `raw` under `config`. Every call owns its own buffers, so
/// this is safe to call from several threads at once.
pub fn evaluate_expression_with(raw: &str, config: &EngineConfig) -> Result<f64, ExpressionError> {
  let postfix = compile(raw, config)?;
  let value = evaluator::evaluate(postfix)?;
  debug!(expression = raw, value, "evaluated expression");
  Ok(value)
}

/// Runs the tokenizer and converter, returning the postfix sequence
/// that [`evaluator::evaluate`] would consume.
pub fn compile(raw: &str, config: &EngineConfig) -> Result<Vec<Token>, ExpressionError> {
  let tokens = tokenize_with(raw, config)?;
  debug!(expression = raw, tokens = tokens.len(), "tokenized expression");
  if config.strict {
    check_balanced(&tokens)?;
  }
  let postfix = to_postfix(tokens);
  debug!(postfix = %serialize_spaced(&postfix), "converted to postfix");
  Ok(postfix)
}
