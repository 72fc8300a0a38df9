/// Headless keypad driving the calculator brain
///
/// Mirrors a calculator's button panel: digit keys build up the number on
/// the display, operator keys hand that number to the brain and show the
/// result, and a single save slot can capture and restore the program.

use calculator_brain::{format_number, CalculatorBrain, Program};

use crate::error::{CliError, Result};

/// ASCII spellings accepted for symbols the brain registers in Unicode.
const ALIASES: &[(&str, &str)] = &[
    ("*", "x"),
    ("/", "÷"),
    ("-", "−"),
    ("pi", "π"),
    ("sqrt", "√"),
    ("neg", "±"),
];

/// Translate an ASCII alias to the brain's symbol, passing anything else through.
pub fn canonical_symbol(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(key)
}

fn is_number_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[derive(Debug, Clone)]
pub struct Keypad {
    brain: CalculatorBrain,
    display: String,
    user_is_typing: bool,
    saved_program: Option<Program>,
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            brain: CalculatorBrain::new(),
            display: format_number(0.0),
            user_is_typing: false,
            saved_program: None,
        }
    }

    /// The brain behind the keys.
    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_typing(&self) -> bool {
        self.user_is_typing
    }

    /// Parse the display as a number.
    pub fn display_value(&self) -> Result<f64> {
        self.display
            .parse::<f64>()
            .map_err(|source| CliError::InvalidDisplay {
                text: self.display.clone(),
                source,
            })
    }

    fn show_result(&mut self) {
        self.display = format_number(self.brain.result());
    }

    /// Press a digit or the decimal point.
    pub fn touch_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            tracing::debug!(%digit, "ignoring non-digit key");
            return;
        }

        if self.user_is_typing {
            if digit == '.' && self.display.contains('.') {
                return;
            }
            self.display.push(digit);
        } else {
            self.display = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.user_is_typing = true;
        }
    }

    /// Press an operator key.
    ///
    /// A number being typed is committed to the brain first.
    pub fn perform_operation(&mut self, symbol: &str) -> Result<()> {
        if self.user_is_typing {
            let operand = self.display_value()?;
            self.brain.set_operand(operand);
            self.user_is_typing = false;
        }
        self.brain.perform_operation(symbol);
        self.show_result();
        Ok(())
    }

    /// Remember the brain's current program in the save slot.
    pub fn save(&mut self) {
        self.saved_program = Some(self.brain.program());
    }

    /// Replay the saved program, if there is one.
    pub fn restore(&mut self) {
        if let Some(program) = self.saved_program.clone() {
            self.load_program(program);
        }
    }

    /// Replace the brain's program and show its result.
    pub fn load_program(&mut self, program: Program) {
        self.brain.set_program(program);
        self.user_is_typing = false;
        self.show_result();
    }

    pub fn clear(&mut self) {
        self.brain.reset();
        self.user_is_typing = false;
        self.show_result();
    }

    /// The brain's description with a trailing `...` or `=`.
    pub fn description_line(&self) -> String {
        let description = self.brain.description();
        if description.is_empty() {
            description
        } else if self.brain.is_partial_result() {
            format!("{} ...", description)
        } else {
            format!("{} =", description)
        }
    }

    /// Press a key by name.
    ///
    /// Numbers are typed digit by digit; `save`, `restore` and `clear` work
    /// the slot and the brain; anything else is an operator.
    pub fn press(&mut self, key: &str) -> Result<()> {
        match key {
            "save" => self.save(),
            "restore" => self.restore(),
            "clear" => self.clear(),
            _ if is_number_key(key) => key.chars().for_each(|c| self.touch_digit(c)),
            _ => self.perform_operation(canonical_symbol(key))?,
        }
        Ok(())
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
