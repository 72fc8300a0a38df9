//! The evaluator: accumulator, pending binary operation and program log.

use crate::format::format_number;
use crate::operation::{lookup, BinaryFn, Operation};
use crate::program::{Program, ProgramEntry};

/// Whether a binary operation is waiting for its second operand.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// Nothing pending.
    Idle,
    /// A binary operator was pressed and will be applied to the accumulator
    /// by the next binary operator or `=`.
    PendingBinary {
        /// The operator symbol that opened the pending operation.
        symbol: String,
        /// The accumulator value when the operator was pressed.
        first_operand: f64,
    },
}

impl State {
    /// Check if a binary operation is waiting for its second operand.
    pub fn is_pending(&self) -> bool {
        matches!(self, State::PendingBinary { .. })
    }
}

#[derive(Debug, Clone)]
struct PendingBinaryOperation {
    function: BinaryFn,
    first_operand: f64,
    symbol: String,
    /// Description of everything up to and including the operator, e.g. `3 +`.
    prefix: String,
}

/// An accumulator-based calculator.
///
/// There is no precedence: each binary operator collapses the previous
/// pending one before opening its own, so `3 + 4 x 5 =` is `35`.
#[derive(Debug, Clone)]
pub struct CalculatorBrain {
    accumulator: f64,
    pending: Option<PendingBinaryOperation>,
    program: Program,
    /// Description of the term currently held in the accumulator.
    term: String,
    /// Set by a binary operator until the next operand, constant or unary.
    awaiting_term: bool,
    /// Set once an operand or a registered symbol has been applied.
    entered: bool,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: None,
            program: Program::new(),
            term: format_number(0.0),
            awaiting_term: false,
            entered: false,
        }
    }

    /// Set the accumulator to `operand`.
    pub fn set_operand(&mut self, operand: f64) {
        tracing::trace!(operand, "set operand");
        self.accumulator = operand;
        self.term = format_number(operand);
        self.awaiting_term = false;
        self.entered = true;
        self.program.push(ProgramEntry::Operand(operand));
    }

    /// Apply the operation registered for `symbol`.
    ///
    /// Unknown symbols are recorded in the program but otherwise ignored.
    pub fn perform_operation(&mut self, symbol: &str) {
        self.program.push(ProgramEntry::Operator(symbol.to_string()));

        let Some(operation) = lookup(symbol) else {
            tracing::debug!(symbol, "ignoring unknown operation");
            return;
        };
        self.entered = true;

        match operation {
            Operation::Constant(value) => {
                self.accumulator = value;
                self.term = symbol.to_string();
                self.awaiting_term = false;
            }
            Operation::Unary(function) => {
                self.accumulator = function(self.accumulator);
                self.term = format!("{}({})", symbol, self.term);
                self.awaiting_term = false;
            }
            Operation::Binary(function) => {
                self.execute_pending_binary_operation();
                self.pending = Some(PendingBinaryOperation {
                    function,
                    first_operand: self.accumulator,
                    symbol: symbol.to_string(),
                    prefix: format!("{} {}", self.term, symbol),
                });
                self.awaiting_term = true;
            }
            Operation::Equals => self.execute_pending_binary_operation(),
        }
        tracing::trace!(symbol, accumulator = self.accumulator, "performed operation");
    }

    fn execute_pending_binary_operation(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = (pending.function)(pending.first_operand, self.accumulator);
            self.term = format!("{} {}", pending.prefix, self.term);
            self.awaiting_term = false;
        }
    }

    /// The current accumulator value.
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    pub fn state(&self) -> State {
        match &self.pending {
            Some(pending) => State::PendingBinary {
                symbol: pending.symbol.clone(),
                first_operand: pending.first_operand,
            },
            None => State::Idle,
        }
    }

    /// True while a binary operation awaits its second operand.
    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    /// Text of the expression entered so far, e.g. `3 + √(9)`.
    ///
    /// Empty when nothing has been entered.
    pub fn description(&self) -> String {
        if !self.entered {
            return String::new();
        }
        match &self.pending {
            Some(pending) if self.awaiting_term => pending.prefix.clone(),
            Some(pending) => format!("{} {}", pending.prefix, self.term),
            None => self.term.clone(),
        }
    }

    /// Every input since the last reset, in order.
    pub fn program(&self) -> Program {
        self.program.clone()
    }

    /// Reset, then replay `program` entry by entry.
    pub fn set_program(&mut self, program: Program) {
        self.reset();
        tracing::debug!(entries = program.len(), "restoring program");
        for entry in program {
            match entry {
                ProgramEntry::Operand(operand) => self.set_operand(operand),
                ProgramEntry::Operator(symbol) => self.perform_operation(&symbol),
            }
        }
    }

    /// Return to the initial state: accumulator zero, nothing pending, empty program.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.program.clear();
        self.term = format_number(0.0);
        self.awaiting_term = false;
        self.entered = false;
    }
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn run(inputs: &[ProgramEntry]) -> CalculatorBrain {
        let mut brain = CalculatorBrain::new();
        brain.set_program(Program::from(inputs.to_vec()));
        brain
    }

    fn num(n: f64) -> ProgramEntry {
        ProgramEntry::Operand(n)
    }

    fn op(s: &str) -> ProgramEntry {
        ProgramEntry::Operator(s.to_string())
    }

    #[test]
    fn test_new_brain() {
        let brain = CalculatorBrain::new();
        assert_eq!(brain.result(), 0.0);
        assert_eq!(brain.state(), State::Idle);
        assert!(brain.program().is_empty());
        assert_eq!(brain.description(), "");
    }

    #[test]
    fn test_set_operand() {
        let mut brain = CalculatorBrain::new();
        brain.set_operand(42.0);
        assert_eq!(brain.result(), 42.0);
        assert_eq!(brain.program().entries(), &[num(42.0)]);
    }

    #[test]
    fn test_unknown_symbol_is_logged_but_ignored() {
        let mut brain = CalculatorBrain::new();
        brain.set_operand(7.0);
        brain.perform_operation("sin");
        assert_eq!(brain.result(), 7.0);
        assert_eq!(brain.state(), State::Idle);
        assert_eq!(brain.program().entries(), &[num(7.0), op("sin")]);
    }

    #[test]
    fn test_result_is_idempotent() {
        let brain = run(&[num(2.0), op("+"), num(3.0), op("=")]);
        assert_eq!(brain.result(), 5.0);
        assert_eq!(brain.result(), 5.0);
    }

    #[test]
    fn test_left_to_right_chaining() {
        let brain = run(&[num(3.0), op("+"), num(4.0), op("x"), num(5.0), op("=")]);
        assert_eq!(brain.result(), 35.0);
        assert_eq!(brain.state(), State::Idle);
    }

    #[test]
    fn test_binary_operator_collapses_pending() {
        let brain = run(&[num(3.0), op("+"), num(4.0), op("x")]);
        assert_eq!(brain.result(), 7.0);
        assert_eq!(
            brain.state(),
            State::PendingBinary {
                symbol: "x".to_string(),
                first_operand: 7.0,
            }
        );
    }

    #[test]
    fn test_constant_ignores_prior_state() {
        let brain = run(&[num(12.0), op("√"), op("π")]);
        assert_eq!(brain.result(), PI);
    }

    #[test]
    fn test_unary_then_equals() {
        let mut brain = run(&[num(9.0), op("√")]);
        assert_eq!(brain.result(), 3.0);
        brain.perform_operation("=");
        assert_eq!(brain.result(), 3.0);
    }

    #[test]
    fn test_unary_keeps_pending() {
        let brain = run(&[num(7.0), op("+"), num(9.0), op("√")]);
        assert_eq!(brain.result(), 3.0);
        assert!(brain.state().is_pending());
    }

    #[test]
    fn test_equals_clears_pending() {
        let mut brain = run(&[num(3.0), op("+"), num(4.0), op("=")]);
        assert_eq!(brain.result(), 7.0);
        brain.perform_operation("=");
        assert_eq!(brain.result(), 7.0);
        assert_eq!(brain.state(), State::Idle);
    }

    #[test]
    fn test_equals_without_second_operand_reuses_accumulator() {
        let brain = run(&[num(3.0), op("+"), op("=")]);
        assert_eq!(brain.result(), 6.0);
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let brain = run(&[num(1.0), op("÷"), num(0.0), op("=")]);
        assert_eq!(brain.result(), f64::INFINITY);

        let brain = run(&[num(0.0), op("÷"), num(0.0), op("=")]);
        assert!(brain.result().is_nan());
    }

    #[test]
    fn test_program_round_trip() {
        let mut brain = run(&[num(3.0), op("+"), num(4.0), op("x"), op("e"), op("=")]);
        let before = brain.result();
        let program = brain.program();

        brain.reset();
        assert_eq!(brain.result(), 0.0);

        brain.set_program(program.clone());
        assert_eq!(brain.result(), before);
        assert_eq!(brain.program(), program);
    }

    #[test]
    fn test_set_program_replaces_state() {
        let mut brain = run(&[num(5.0), op("+")]);
        brain.set_program(Program::from(vec![num(2.0), op("±")]));
        assert_eq!(brain.result(), -2.0);
        assert_eq!(brain.state(), State::Idle);
        assert_eq!(brain.program().len(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut brain = run(&[num(3.0), op("+"), num(4.0)]);
        brain.reset();
        assert_eq!(brain.result(), 0.0);
        assert!(brain.program().is_empty());
        assert_eq!(brain.state(), State::Idle);
        assert_eq!(brain.description(), "");
    }

    #[test]
    fn test_description_while_typing_expression() {
        let mut brain = CalculatorBrain::new();
        brain.set_operand(7.0);
        assert_eq!(brain.description(), "7");
        assert!(!brain.is_partial_result());

        brain.perform_operation("+");
        assert_eq!(brain.description(), "7 +");
        assert!(brain.is_partial_result());

        brain.set_operand(9.0);
        assert_eq!(brain.description(), "7 + 9");

        brain.perform_operation("√");
        assert_eq!(brain.description(), "7 + √(9)");

        brain.perform_operation("=");
        assert_eq!(brain.description(), "7 + √(9)");
        assert!(!brain.is_partial_result());
        assert_eq!(brain.result(), 10.0);
    }

    #[test]
    fn test_description_of_chains() {
        let brain = run(&[num(3.0), op("+"), num(4.0), op("x"), num(5.0), op("=")]);
        assert_eq!(brain.description(), "3 + 4 x 5");

        let brain = run(&[num(7.0), op("+"), op("√")]);
        assert_eq!(brain.description(), "7 + √(7)");

        let brain = run(&[num(3.0), op("+"), op("=")]);
        assert_eq!(brain.description(), "3 + 3");
    }

    #[test]
    fn test_description_of_whole_expression_under_unary() {
        let brain = run(&[num(7.0), op("+"), num(9.0), op("="), op("√")]);
        assert_eq!(brain.description(), "√(7 + 9)");
        assert_eq!(brain.result(), 4.0);
    }

    #[test]
    fn test_description_ignores_unknown_symbols() {
        let mut brain = CalculatorBrain::new();
        brain.perform_operation("tan");
        assert_eq!(brain.description(), "");
        assert_eq!(brain.program().len(), 1);

        brain.set_operand(2.0);
        brain.perform_operation("tan");
        assert_eq!(brain.description(), "2");
    }

    #[test]
    fn test_description_of_constants() {
        let brain = run(&[op("π"), op("x"), num(2.0), op("=")]);
        assert_eq!(brain.description(), "π x 2");
    }
}
