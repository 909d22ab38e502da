//! Lenient coercion for values typed into an editing surface.
//!
//! A half-edited row may hold `null`, an empty string, or text that is not a
//! number yet. None of those should stop totals from being computed, so they
//! all read as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Coerces a loosely typed JSON value into a `Decimal`.
///
/// Numbers and numeric strings are parsed exactly, scientific notation
/// included. Everything else becomes zero.
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

/// `deserialize_with` adapter applying [`coerce_decimal`].
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

/// `deserialize_with` adapter for free-text fields that may arrive as numbers.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
