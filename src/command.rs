
//! Text adapter for chat front ends. A chat integration hands every
//! incoming message to [`CommandParser::respond`] and posts whatever
//! comes back; network concerns stay on the integration's side.

use crate::config::EngineConfig;
use crate::evaluate_expression_with;

use tracing::debug;

pub const DEFAULT_PREFIX: &str = "!calc";

/// Recognizes calculator commands such as `!calc 2 + 2` and produces
/// reply text for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParser {
  prefix: String,
}

impl CommandParser {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into() }
  }

  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  /// Returns the expression part of `message`, with the command prefix
  /// and all whitespace removed. Returns `None` if the message is not
  /// a calculator command. The prefix must be followed by whitespace
  /// or the end of the message, so `!calculate` is not `!calc`.
  pub fn extract(&self, message: &str) -> Option<String> {
    let rest = message.trim_start().strip_prefix(self.prefix.as_str())?;
    if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
      return None;
    }
    Some(rest.chars().filter(|c| !c.is_whitespace()).collect())
  }

  /// Evaluates the command in `message`, if any, and formats the
  /// reply: the value on success, otherwise the error message.
  pub fn respond(&self, message: &str, config: &EngineConfig) -> Option<String> {
    let expression = self.extract(message)?;
    if expression.is_empty() {
      return Some(self.usage());
    }
    let reply = match evaluate_expression_with(&expression, config) {
      Ok(value) => format_value(value),
      Err(err) => err.to_string(),
    };
    debug!(expression = %expression, reply = %reply, "answered calculator command");
    Some(reply)
  }

  pub fn usage(&self) -> String {
    format!("usage: {} <expression>", self.prefix)
  }
}

impl Default for CommandParser {
  fn default() -> Self {
    Self::new(DEFAULT_PREFIX)
  }
}

/// Reply text for a successful evaluation: `f64`'s `Display`, shared by
/// chat replies and the command line.
pub fn format_value(value: f64) -> String {
  value.to_string()
}
