
use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// One of the five binary arithmetic operators understood by the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Sub,
  Mul,
  Div,
  Pow,
}

/// Static properties of an operator: how tightly it binds and which
/// way it groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
  operator: Operator,
  assoc: Associativity,
  prec: Precedence,
}

/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

/// The associativity of an operator, which decides grouping between
/// operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// `a - b - c` is `(a - b) - c`.
  Left,
  /// `a ^ b ^ c` is `a ^ (b ^ c)`.
  Right,
}

/// The operator table, keyed by symbol. This is the only place
/// precedence and associativity are defined.
static OPERATOR_TABLE: phf::Map<char, OperatorInfo> = phf_map! {
  '+' => OperatorInfo::new(Operator::Add, Associativity::Left, Precedence::new(2)),
  '-' => OperatorInfo::new(Operator::Sub, Associativity::Left, Precedence::new(2)),
  '*' => OperatorInfo::new(Operator::Mul, Associativity::Left, Precedence::new(3)),
  '/' => OperatorInfo::new(Operator::Div, Associativity::Left, Precedence::new(3)),
  '^' => OperatorInfo::new(Operator::Pow, Associativity::Right, Precedence::new(4)),
};

impl Operator {
  pub const ALL: [Operator; 5] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Pow,
  ];

  /// Looks up the operator spelled by `symbol`, if any.
  pub fn from_symbol(symbol: char) -> Option<Operator> {
    OPERATOR_TABLE.get(&symbol).map(|info| info.operator)
  }

  pub fn symbol(self) -> char {
    match self {
      Operator::Add => '+',
      Operator::Sub => '-',
      Operator::Mul => '*',
      Operator::Div => '/',
      Operator::Pow => '^',
    }
  }

  pub fn info(self) -> &'static OperatorInfo {
    // expect: Every variant's symbol is a key in the table (see
    // test_table_covers_all_operators).
    OPERATOR_TABLE.get(&self.symbol()).expect("operator missing from table")
  }

  pub fn precedence(self) -> Precedence {
    self.info().prec
  }

  pub fn associativity(self) -> Associativity {
    self.info().assoc
  }

  /// Applies the operator to its two operands, in source order. All
  /// arithmetic is IEEE 754, so division by zero yields an infinity
  /// or NaN rather than failing.
  pub fn apply(self, left: f64, right: f64) -> f64 {
    match self {
      Operator::Add => left + right,
      Operator::Sub => left - right,
      Operator::Mul => left * right,
      Operator::Div => left / right,
      Operator::Pow => left.powf(right),
    }
  }
}

impl OperatorInfo {
  const fn new(operator: Operator, assoc: Associativity, prec: Precedence) -> Self {
    Self { operator, assoc, prec }
  }

  pub fn operator(&self) -> Operator {
    self.operator
  }
}

impl Associativity {
  pub const fn is_left_assoc(self) -> bool {
    matches!(self, Associativity::Left)
  }

  pub const fn is_right_assoc(self) -> bool {
    matches!(self, Associativity::Right)
  }
}

impl Precedence {
  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }

  pub const fn get(self) -> u8 {
    self.0
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
