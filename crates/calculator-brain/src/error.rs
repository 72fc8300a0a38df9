//! Error types for the calculator brain.

use thiserror::Error;

/// Errors that can occur outside of evaluation proper.
///
/// Evaluation itself never fails: unknown symbols and malformed program
/// entries are ignored. Only converting a program to and from text can go
/// wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// The program text was not valid JSON, or could not be written as JSON.
    #[error("invalid program JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An operand has no JSON representation.
    #[error("operand {index} is {value}, which cannot be written as JSON")]
    NonFiniteOperand { index: usize, value: f64 },
}
