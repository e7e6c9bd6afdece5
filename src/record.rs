//! Lookup result types.
//!
//! The remote service's schema is not fixed, so its response is kept as an
//! opaque [`Payload`] and only `DADOS.nome` is ever inspected. Synthetic
//! results use the typed [`Record`], which serializes to the same envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed status flag carried by every synthetic record.
pub const STATUS_REGULAR: &str = "REGULAR";

/// Raw JSON document returned by the remote service, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `DADOS.nome` string, if present and non-empty.
    pub fn holder_name(&self) -> Option<&str> {
        self.0
            .get("DADOS")
            .filter(|d| d.is_object())
            .and_then(|d| d.get("nome"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Person fields of a synthetic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    pub nome: String,
    pub cpf: String,
    /// Birth date as `DD/MM/YYYY`.
    pub nascimento: String,
    pub situacao: String,
}

/// Synthetic identity record: `{ "DADOS": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "DADOS")]
    pub dados: PersonData,
}

impl Record {
    pub fn to_value(&self) -> Value {
        // String-only struct; serialization cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Which path produced a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Remote,
    Fallback,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Remote => "remote",
            LookupSource::Fallback => "fallback",
        }
    }
}

/// Result of a lookup. Serializes as the bare payload or record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Remote(Payload),
    Fallback(Record),
}

impl LookupOutcome {
    pub fn source(&self) -> LookupSource {
        match self {
            LookupOutcome::Remote(_) => LookupSource::Remote,
            LookupOutcome::Fallback(_) => LookupSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LookupOutcome::Fallback(_))
    }

    /// Holder name from whichever path produced the result.
    pub fn name(&self) -> Option<&str> {
        match self {
            LookupOutcome::Remote(payload) => payload.holder_name(),
            LookupOutcome::Fallback(record) => Some(&record.dados.nome),
        }
    }

    /// JSON document handed back to the caller.
    pub fn into_value(self) -> Value {
        match self {
            LookupOutcome::Remote(payload) => payload.into_value(),
            LookupOutcome::Fallback(record) => record.to_value(),
        }
    }
}
