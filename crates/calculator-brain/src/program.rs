//! The program log: every operand and operator fed into the brain, in order.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;
use crate::format::format_number;

/// A single recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramEntry {
    /// A value passed to `set_operand`.
    Operand(f64),
    /// A symbol passed to `perform_operation`, registered or not.
    Operator(String),
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramEntry::Operand(value) => write!(f, "{}", format_number(*value)),
            ProgramEntry::Operator(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// An ordered, replayable log of inputs.
///
/// Serializes as a JSON array mixing numbers and strings, e.g.
/// `[3.0, "+", 4.0, "="]`. Deserialization is tolerant: elements that are
/// neither numbers nor strings are dropped, and anything other than an array
/// decodes to an empty program.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Program {
    entries: Vec<ProgramEntry>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded inputs, oldest first.
    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }

    /// Number of recorded inputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: ProgramEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Build a program from an arbitrary JSON value, skipping anything that
    /// is not a number or a string.
    pub fn from_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Array(items) = value else {
            tracing::debug!("program is not an array, treating as empty");
            return Self::new();
        };

        let entries = items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::Number(n) => n.as_f64().map(ProgramEntry::Operand),
                serde_json::Value::String(s) => Some(ProgramEntry::Operator(s)),
                other => {
                    tracing::debug!(entry = %other, "skipping malformed program entry");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    /// Decode a program from JSON text.
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// Encode the program as JSON text.
    ///
    /// JSON has no spelling for infinities or NaN, so a program holding a
    /// non-finite operand cannot be encoded without changing its replay.
    pub fn to_json_string(&self) -> crate::Result<String> {
        let non_finite = self
            .entries
            .iter()
            .enumerate()
            .find_map(|(index, entry)| match entry {
                ProgramEntry::Operand(value) if !value.is_finite() => Some((index, *value)),
                _ => None,
            });
        if let Some((index, value)) = non_finite {
            return Err(Error::NonFiniteOperand { index, value });
        }
        Ok(serde_json::to_string(self)?)
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

impl From<Vec<ProgramEntry>> for Program {
    fn from(entries: Vec<ProgramEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ProgramEntry> for Program {
    fn from_iter<I: IntoIterator<Item = ProgramEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = ProgramEntry;
    type IntoIter = std::vec::IntoIter<ProgramEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
