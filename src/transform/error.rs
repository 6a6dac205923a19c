//! Transformation decoding errors.

use thiserror::Error;

/// Error returned when a mapping cannot be decoded into a particular
/// transformation variant.
///
/// These errors are local to one mapping and one variant. The registry
/// treats any of them as "try the next variant" and never surfaces them
/// from extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required key is absent from the mapping.
    #[error("missing key '{key}'")]
    MissingKey { key: &'static str },
    /// A key holds a value of the wrong shape.
    #[error("key '{key}' should hold a {expected}, found {found}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A numeric key holds `NaN` or an infinity.
    #[error("key '{key}' holds a non-finite number")]
    NonFinite { key: &'static str },
    /// The `type` tag names a sub-variant this transformation doesn't know.
    #[error("unknown {kind} type '{value}'")]
    UnknownType { kind: &'static str, value: String },
    /// The mapping carries a `kind` discriminant for a different variant.
    #[error("mapping is tagged '{found}', expected '{expected}'")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let err = DecodeError::MissingKey { key: "size" };
        assert_eq!(err.to_string(), "missing key 'size'");
    }

    #[test]
    fn test_wrong_type_display() {
        let err = DecodeError::WrongType {
            key: "size",
            expected: "number",
            found: "string",
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("number"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = DecodeError::NonFinite { key: "size" };
        assert_eq!(err.to_string(), "key 'size' holds a non-finite number");
    }

    #[test]
    fn test_kind_mismatch_display() {
        let err = DecodeError::KindMismatch {
            expected: "tab",
            found: "tracking".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mapping is tagged 'tracking', expected 'tab'"
        );
    }
}
