
//! Character-level scanner turning raw expression text into
//! [`Token`]s.

use super::number::parse_number;
use super::operator::Operator;
use super::source::SourceOffset;
use super::token::Token;
use crate::config::EngineConfig;
use crate::error::FormatError;

/// Scanner state for a single tokenize call. Operators and
/// parentheses are emitted as soon as they are seen; only numeric
/// literals are accumulated across characters.
#[derive(Debug, Clone, Default)]
struct TokenizerState {
  tokens: Vec<Token>,
  literal: String,
  literal_has_point: bool,
  strict: bool,
}

/// Tokenizes `input` with the default (permissive) configuration.
pub fn tokenize(input: &str) -> Result<Vec<Token>, FormatError> {
  tokenize_with(input, &EngineConfig::default())
}

/// Tokenizes `input`. Whitespace is expected to have been stripped by
/// the caller and is reported like any other unknown character.
pub fn tokenize_with(input: &str, config: &EngineConfig) -> Result<Vec<Token>, FormatError> {
  let length = input.chars().count();
  if length > config.max_input_len {
    return Err(FormatError::TooLong { length, limit: config.max_input_len });
  }

  let mut state = TokenizerState::new(config.strict);
  for (index, ch) in input.chars().enumerate() {
    state.read_char(ch, SourceOffset(index))?;
  }
  let tokens = state.finish()?;

  if config.strict {
    check_alternation(&tokens)?;
  }
  Ok(tokens)
}

/// Verifies that operands and operators alternate correctly: no two
/// adjacent numbers, no two adjacent operators, no operator directly
/// inside a parenthesis, and no empty expression or group.
pub fn check_alternation(tokens: &[Token]) -> Result<(), FormatError> {
  let mut expecting_operand = true;
  for (index, token) in tokens.iter().enumerate() {
    let accepted = match token {
      Token::Number(_) | Token::LeftParen => expecting_operand,
      Token::Operator(_) | Token::RightParen => !expecting_operand,
    };
    if !accepted {
      return Err(FormatError::MisplacedToken { token: *token, index });
    }
    expecting_operand = matches!(token, Token::Operator(_) | Token::LeftParen);
  }
  if expecting_operand {
    return Err(FormatError::UnexpectedEnd);
  }
  Ok(())
}

impl TokenizerState {
  fn new(strict: bool) -> Self {
    Self { strict, ..Self::default() }
  }

  fn read_char(&mut self, ch: char, position: SourceOffset) -> Result<(), FormatError> {
    match ch {
      '0'..='9' => {
        self.literal.push(ch);
      }
      '.' => {
        if !self.literal_has_point {
          self.literal.push('.');
          self.literal_has_point = true;
        } else if self.strict {
          return Err(FormatError::DuplicateDecimalPoint(position));
        }
        // Permissive mode drops the extra point: "1.2.3" reads as 1.23.
      }
      '-' if self.expects_sign() => {
        self.literal.push('-');
      }
      '(' => {
        self.flush_literal()?;
        self.tokens.push(Token::LeftParen);
      }
      ')' => {
        self.flush_literal()?;
        self.tokens.push(Token::RightParen);
      }
      _ => {
        let op = Operator::from_symbol(ch)
          .ok_or(FormatError::UnidentifiedCharacter { character: ch, position })?;
        self.flush_literal()?;
        self.tokens.push(Token::Operator(op));
      }
    }
    Ok(())
  }

  /// A minus sign is a sign (rather than subtraction) when no operand
  /// has been completed since the last operator or opening
  /// parenthesis, and no literal is in progress.
  fn expects_sign(&self) -> bool {
    self.literal.is_empty() &&
      matches!(self.tokens.last(), None | Some(Token::Operator(_)) | Some(Token::LeftParen))
  }

  fn flush_literal(&mut self) -> Result<(), FormatError> {
    if self.literal.is_empty() {
      return Ok(());
    }
    let value = parse_number(&self.literal)?;
    self.tokens.push(Token::Number(value));
    self.literal.clear();
    self.literal_has_point = false;
    Ok(())
  }

  fn finish(mut self) -> Result<Vec<Token>, FormatError> {
    self.flush_literal()?;
    Ok(self.tokens)
  }
}
