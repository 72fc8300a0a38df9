/// Calculator front end
///
/// A headless keypad that feeds digits and operator keys into the
/// calculator brain, plus the session plumbing behind the `calc` binary.

pub mod error;
pub mod keypad;
pub mod session;

pub use error::{CliError, Result};
pub use keypad::Keypad;
pub use session::{CalcOptions, Session};
