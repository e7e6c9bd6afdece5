//! CPF identifier normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CPF reduced to its digit characters.
///
/// Formatting such as `123.456.789-00` is stripped; order is preserved and no
/// length or check-digit validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Normalize raw user input by dropping every non-digit character.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
