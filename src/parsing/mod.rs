
//! Turning raw expression text into postfix token sequences.

pub mod number;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;
