//! Canonical hashing of engine values
//!
//! Computes a deterministic SHA-256 digest of any serializable engine
//! value via canonical JSON (recursively sorted object keys). Two
//! consumers holding the same `CostRecord` or `DerivedMetrics` can compare
//! digests to prove they are rendering identical data; the determinism
//! tests use it to pin down byte-identical repeated output.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from digest computation
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("value serialization failed: {0}")]
    Serialization(String),
}

/// Compute the canonical SHA-256 digest of a serializable value.
///
/// Serializes to JSON with all object keys recursively sorted, so the
/// digest does not depend on struct field declaration order or on the
/// consumer's map types.
///
/// # Example
///
/// ```rust
/// use eurostudy_core_rs::{canonical_digest, UserConfig};
///
/// let a = canonical_digest(&UserConfig::default()).unwrap();
/// let b = canonical_digest(&UserConfig::default()).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64); // lowercase hex of a 256-bit hash
/// ```
pub fn canonical_digest<T: Serialize>(value: &T) -> Result<String, DigestError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(value)
        .map_err(|e| DigestError::Serialization(e.to_string()))?;

    // Recursively sort all object keys for a canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical = canonicalize(value);
    let json = serde_json::to_string(&canonical)
        .map_err(|e| DigestError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_ignores_field_declaration_order() {
        #[derive(Serialize)]
        struct Ab {
            a: u32,
            b: u32,
        }
        #[derive(Serialize)]
        struct Ba {
            b: u32,
            a: u32,
        }

        let ab = canonical_digest(&Ab { a: 1, b: 2 }).unwrap();
        let ba = canonical_digest(&Ba { b: 2, a: 1 }).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_digest_differs_for_different_values() {
        let one = canonical_digest(&1u32).unwrap();
        let two = canonical_digest(&2u32).unwrap();
        assert_ne!(one, two);
    }
}
