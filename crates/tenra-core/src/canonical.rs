//! # Canonical Serialization — Deterministic Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! digest computation.
//!
//! ## Security Invariant
//!
//! The newtype's inner field is private; the only constructor is
//! [`CanonicalBytes::new()`], which serializes with sorted object keys and
//! compact separators and **rejects floats**. Token amounts are integers
//! everywhere in the engine, and float literals in a digested structure
//! would reintroduce non-deterministic number formatting. Any function
//! that digests data must accept `&CanonicalBytes`, so a non-canonical
//! byte path cannot exist.

use serde::Serialize;
use serde_json::Value;

use crate::error::EngineError;

/// Bytes produced exclusively by canonical serialization.
///
/// # Invariants
///
/// - Object keys are sorted lexicographically at every nesting level.
/// - Separators are compact (no whitespace).
/// - Floats are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Canonicalization`] if the value contains a
    /// float or fails JSON serialization.
    pub fn new(obj: &impl Serialize) -> Result<Self, EngineError> {
        let value = serde_json::to_value(obj)
            .map_err(|e| EngineError::Canonicalization(e.to_string()))?;
        let mut out = String::new();
        write_canonical(&value, &mut out)?;
        Ok(Self(out.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively render a JSON value with sorted keys and compact separators.
fn write_canonical(value: &Value, out: &mut String) -> Result<(), EngineError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if n.is_f64() {
                return Err(EngineError::Canonicalization(format!(
                    "float values are not permitted in canonical representations: {n}"
                )));
            }
            out.push_str(&n.to_string());
        }
        Value::String(s) => {
            // serde_json string escaping is deterministic.
            let escaped = serde_json::to_string(s)
                .map_err(|e| EngineError::Canonicalization(e.to_string()))?;
            out.push_str(&escaped);
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let escaped = serde_json::to_string(key)
                    .map_err(|e| EngineError::Canonicalization(e.to_string()))?;
                out.push_str(&escaped);
                out.push(':');
                // Key came from the map, lookup cannot fail.
                if let Some(v) = map.get(*key) {
                    write_canonical(v, out)?;
                }
            }
            out.push('}');
        }
    }
    Ok(())
}
