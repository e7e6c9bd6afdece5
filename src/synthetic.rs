//! Deterministic synthetic identity data.
//!
//! Used when the remote service cannot produce a usable answer. Every value is
//! derived from the CPF digits alone, so the same CPF always yields the same
//! record.

use crate::record::{PersonData, Record, STATUS_REGULAR};

/// Candidate holder names, indexed by the last two CPF digits mod 12.
pub const NAMES: [&str; 12] = [
    "João Silva Santos",
    "Maria Oliveira Costa",
    "Pedro Souza Lima",
    "Ana Paula Ferreira",
    "Carlos Eduardo Alves",
    "Fernanda Santos Rocha",
    "Ricardo Pereira Dias",
    "Juliana Costa Martins",
    "Bruno Almeida Silva",
    "Camila Rodrigues Nunes",
    "Rafael Santos Barbosa",
    "Larissa Oliveira Cruz",
];

/// Static product reference data. Not used by the lookup path.
pub const PRODUCTS: [&str; 8] = [
    "Kit 12 caixas organizadoras + brinde",
    "Conjunto de panelas antiaderentes",
    "Smartphone Samsung Galaxy A54",
    "Fone de ouvido Bluetooth",
    "Carregador portátil 10000mAh",
    "Camiseta básica algodão",
    "Tênis esportivo Nike",
    "Relógio digital smartwatch",
];

const BASE_YEAR: u64 = 1960;

/// Build the synthetic record for `id`. Never fails.
pub fn generate_fallback(id: &str) -> Record {
    let nome = select_name(id).to_string();

    tracing::debug!(cpf = %id, name = %nome, "Generated fallback record");

    Record {
        dados: PersonData {
            nome,
            cpf: id.to_string(),
            nascimento: birth_date(id),
            situacao: STATUS_REGULAR.to_string(),
        },
    }
}

/// Pick a catalog name from the last two characters of `id`.
pub fn select_name(id: &str) -> &'static str {
    let len = id.chars().count();
    let tail = char_slice(id, len.saturating_sub(2), len);
    let index = (leading_number(&tail) % NAMES.len() as u64) as usize;
    NAMES[index]
}

/// Derive a `DD/MM/YYYY` birth date from the first six characters of `id`.
///
/// Pure arithmetic: no calendar validation, day never exceeds 28.
pub fn birth_date(id: &str) -> String {
    let year = BASE_YEAR + leading_number(&char_slice(id, 0, 2)) % 40;
    let month = leading_number(&char_slice(id, 2, 4)) % 12 + 1;
    let day = leading_number(&char_slice(id, 4, 6)) % 28 + 1;
    format!("{:02}/{:02}/{}", day, month, year)
}

/// Characters `start..end` of `s`, clipped to its length.
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Parse the leading ASCII digits of `s` as base 10.
///
/// A substring without a leading digit (empty, or starting with anything
/// else) counts as 0. Inputs here are at most two characters, so overflow
/// cannot occur.
fn leading_number(s: &str) -> u64 {
    s.chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, |acc, d| acc * 10 + u64::from(d))
}
