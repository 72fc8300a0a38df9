//! Accumulator-based calculator evaluator.
//!
//! The [`CalculatorBrain`] keeps a running accumulator and applies operations
//! from a fixed registry of constants, unary functions, binary functions and
//! `=`. Binary operations are deferred until the next binary operator or `=`,
//! so chains evaluate strictly left to right. Every input is recorded in a
//! [`Program`] that can be exported and replayed later.

mod brain;
mod error;
mod format;
mod operation;
mod program;

pub use brain::{CalculatorBrain, State};
pub use error::Error;
pub use format::format_number;
pub use operation::{lookup, symbols, BinaryFn, Operation, UnaryFn};
pub use program::{Program, ProgramEntry};

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;
