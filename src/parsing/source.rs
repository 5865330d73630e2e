
use std::fmt::{self, Display, Formatter};

/// Character (not byte) position in the raw expression. Only used
/// for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_offset_display() {
    assert_eq!(SourceOffset(12).to_string(), "12");
    assert_eq!(SourceOffset::default().to_string(), "0");
  }
}
