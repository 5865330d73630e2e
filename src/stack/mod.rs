
//! Last-in, first-out stack shared by the converter (operators) and
//! the evaluator (values).

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
