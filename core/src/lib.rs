//! Core of the lispy calculator.
//!
//! A line of text flows through three stages:
//!
//! 1. [`parser`] turns text into a tagged [`parser::ParseTree`].
//! 2. [`read`] lowers the tree into a [`Value`].
//! 3. [`evaluate`] reduces the value to a number or an error value.
//!
//! [`format`] prints any value back as text.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod values;

pub use evaluator::evaluate;
pub use reader::read;
pub use values::{LispError, Value, format};
