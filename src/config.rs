
use serde::Deserialize;
use thiserror::Error;

use std::env;

/// Environment variable enabling strict mode.
pub const STRICT_ENV_VAR: &str = "YARD_STRICT";
/// Environment variable overriding the input length limit.
pub const MAX_INPUT_LEN_ENV_VAR: &str = "YARD_MAX_INPUT_LEN";

pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Knobs for a single evaluation. The default configuration is
/// permissive, which accepts everything the historical calculator
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
  /// When set, silent repairs become errors: a second decimal point
  /// in a literal, unbalanced parentheses, and operands or operators
  /// in the wrong place are all rejected with a `FormatError`.
  pub strict: bool,
  /// Longest accepted expression, in characters.
  pub max_input_len: usize,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("invalid value {value:?} for {var}")]
  InvalidEnvValue {
    var: &'static str,
    value: String,
  },
  #[error("invalid configuration: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn strict() -> Self {
    Self::default().with_strict(true)
  }

  pub fn with_strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
    self.max_input_len = max_input_len;
    self
  }

  /// Parses a configuration from a JSON object. Missing fields take
  /// their default values.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }

  /// The default configuration, overridden by `YARD_STRICT` and
  /// `YARD_MAX_INPUT_LEN` where those are set.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| env::var(var).ok())
  }

  fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where F: Fn(&'static str) -> Option<String> {
    let mut config = Self::default();
    if let Some(value) = lookup(STRICT_ENV_VAR) {
      let strict = parse_flag(&value);
      config.strict = strict.ok_or(ConfigError::InvalidEnvValue { var: STRICT_ENV_VAR, value })?;
    }
    if let Some(value) = lookup(MAX_INPUT_LEN_ENV_VAR) {
      let max_input_len: Option<usize> = value.trim().parse().ok();
      config.max_input_len =
        max_input_len.ok_or(ConfigError::InvalidEnvValue { var: MAX_INPUT_LEN_ENV_VAR, value })?;
    }
    Ok(config)
  }
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      strict: false,
      max_input_len: DEFAULT_MAX_INPUT_LEN,
    }
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" | "" => Some(false),
    _ => None,
  }
}
