/// Session plumbing for the `calc` binary
///
/// Loads a saved program, feeds keys into the keypad, and writes the
/// program back out when asked to.

use std::fs;
use std::path::{Path, PathBuf};

use calculator_brain::Program;

use crate::error::{CliError, Result};
use crate::keypad::Keypad;

/// Options controlling a calculator session
#[derive(Debug, Clone, Default)]
pub struct CalcOptions {
    /// Program file replayed before any key is pressed
    pub restore: Option<PathBuf>,
    /// Program file written when the session finishes
    pub save: Option<PathBuf>,
    /// Print the program log as JSON when the session finishes
    pub print_program: bool,
    /// Print the description line with every display update
    pub verbose: bool,
}

impl CalcOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(mut self, path: impl Into<PathBuf>) -> Self {
        self.restore = Some(path.into());
        self
    }

    pub fn save(mut self, path: impl Into<PathBuf>) -> Self {
        self.save = Some(path.into());
        self
    }

    pub fn print_program(mut self, print_program: bool) -> Self {
        self.print_program = print_program;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Read a program from a JSON file.
pub fn load_program_file(path: &Path) -> Result<Program> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Program::from_json_str(&text).map_err(|source| CliError::Program {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a program to a JSON file, creating parent directories as needed.
pub fn save_program_file(path: &Path, program: &Program) -> Result<()> {
    let text = program.to_json_string().map_err(|source| CliError::Program {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }
    }
    fs::write(path, text).map_err(|e| CliError::io(path, e))
}

/// A keypad plus the options it was opened with
pub struct Session {
    options: CalcOptions,
    keypad: Keypad,
}

impl Session {
    /// Open a session, replaying the restore file if one was given.
    pub fn open(options: CalcOptions) -> Result<Self> {
        let mut keypad = Keypad::new();
        if let Some(path) = &options.restore {
            let program = load_program_file(path)?;
            tracing::info!(path = %path.display(), entries = program.len(), "restored program");
            keypad.load_program(program);
        }
        Ok(Self { options, keypad })
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Press each key in order, stopping at the first failure.
    pub fn press_all<'a, I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            self.keypad.press(key)?;
        }
        Ok(())
    }

    /// The lines to show after an update: the display, then the
    /// description when running verbose.
    pub fn status(&self) -> Vec<String> {
        let mut lines = vec![self.keypad.display().to_string()];
        if self.options.verbose {
            let description = self.keypad.description_line();
            if !description.is_empty() {
                lines.push(description);
            }
        }
        lines
    }

    /// Write the save file if requested and return the program JSON if it
    /// should be printed.
    pub fn finish(&self) -> Result<Option<String>> {
        let program = self.keypad.brain().program();

        if let Some(path) = &self.options.save {
            save_program_file(path, &program)?;
            tracing::info!(path = %path.display(), entries = program.len(), "saved program");
        }

        if !self.options.print_program {
            return Ok(None);
        }
        Ok(Some(program.to_json_string()?))
    }
}
