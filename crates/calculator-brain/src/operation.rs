//! The fixed registry of operations keyed by their keypad symbol.

use std::collections::HashMap;
use std::f64::consts::{E, PI};

use once_cell::sync::Lazy;

/// A function of the accumulator.
pub type UnaryFn = fn(f64) -> f64;

/// A function of a pending first operand and the accumulator.
pub type BinaryFn = fn(f64, f64) -> f64;

/// What a symbol does to the accumulator.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replace the accumulator with a fixed value.
    Constant(f64),
    /// Apply a function to the accumulator.
    Unary(UnaryFn),
    /// Defer a function until its second operand is known.
    Binary(BinaryFn),
    /// Resolve the pending binary operation, if any.
    Equals,
}

static OPERATIONS: Lazy<HashMap<&'static str, Operation>> = Lazy::new(|| {
    HashMap::from([
        ("π", Operation::Constant(PI)),
        ("e", Operation::Constant(E)),
        ("√", Operation::Unary(f64::sqrt)),
        ("±", Operation::Unary(|x| -x)),
        ("cos", Operation::Unary(f64::cos)),
        ("x", Operation::Binary(|a, b| a * b)),
        ("÷", Operation::Binary(|a, b| a / b)),
        ("+", Operation::Binary(|a, b| a + b)),
        ("−", Operation::Binary(|a, b| a - b)),
        ("=", Operation::Equals),
    ])
});

/// Look up the operation registered for `symbol`.
pub fn lookup(symbol: &str) -> Option<Operation> {
    OPERATIONS.get(symbol).copied()
}

/// All registered symbols, in no particular order.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    OPERATIONS.keys().copied()
}
