//! Plist-compatible values and the attribute bag that carries them.
//!
//! [`StyleAttributes`] is the bag of styling attributes attached to a run of
//! text. Its values are [`PlistValue`]s: strings, numbers, booleans, arrays
//! and nested dictionaries. Nothing else can be stored, which keeps every
//! bag trivially persistable through serde.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// An insertion-ordered map of attribute names to plist-compatible values.
///
/// Equality ignores key order: two bags are equal when they hold the same
/// keys with structurally equal values.
pub type StyleAttributes = IndexMap<String, PlistValue>;

/// A dynamic plist-compatible value.
///
/// Equality is structural and numeric values compare by exact magnitude, so
/// `Integer(2)` equals `Real(2.0)` but `Integer(2^53 + 1)` equals no real.
/// `NaN` equals `NaN`, which keeps equality reflexive for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlistValue {
    Bool(bool),
    Integer(i64),
    /// Non-finite reals serialize as strings (`"NaN"`, `"inf"`, `"-inf"`),
    /// since formats like JSON have no number for them.
    #[serde(serialize_with = "serialize_real")]
    Real(f64),
    String(String),
    Array(Vec<PlistValue>),
    Dictionary(StyleAttributes),
}

impl PlistValue {
    /// Returns the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or real.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PlistValue::Integer(i) => Some(*i as f64),
            PlistValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlistValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            PlistValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&StyleAttributes> {
        match self {
            PlistValue::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Returns `false` if this value is, or contains, a `NaN` or infinite real.
    ///
    /// serde_json writes such reals as `null`, which no longer reads back
    /// as a `PlistValue`.
    pub fn is_finite(&self) -> bool {
        match self {
            PlistValue::Real(r) => r.is_finite(),
            PlistValue::Array(items) => items.iter().all(PlistValue::is_finite),
            PlistValue::Dictionary(dict) => dict.values().all(PlistValue::is_finite),
            _ => true,
        }
    }

    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PlistValue::Bool(_) => "bool",
            PlistValue::Integer(_) => "integer",
            PlistValue::Real(_) => "real",
            PlistValue::String(_) => "string",
            PlistValue::Array(_) => "array",
            PlistValue::Dictionary(_) => "dictionary",
        }
    }
}

impl PartialEq for PlistValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PlistValue::Bool(a), PlistValue::Bool(b)) => a == b,
            (PlistValue::Integer(a), PlistValue::Integer(b)) => a == b,
            (PlistValue::Real(a), PlistValue::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (PlistValue::Integer(a), PlistValue::Real(b))
            | (PlistValue::Real(b), PlistValue::Integer(a)) => integer_equals_real(*a, *b),
            (PlistValue::String(a), PlistValue::String(b)) => a == b,
            (PlistValue::Array(a), PlistValue::Array(b)) => a == b,
            (PlistValue::Dictionary(a), PlistValue::Dictionary(b)) => a == b,
            _ => false,
        }
    }
}

fn serialize_real<S: Serializer>(r: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if r.is_finite() {
        serializer.serialize_f64(*r)
    } else {
        serializer.collect_str(r)
    }
}

/// Exact comparison: the real must be integral and inside the `i64` range.
fn integer_equals_real(i: i64, r: f64) -> bool {
    // 2^63 is exactly representable; every i64 lies in [-2^63, 2^63).
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    r.fract() == 0.0 && (-LIMIT..LIMIT).contains(&r) && r as i64 == i
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        PlistValue::String(s.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(s: String) -> Self {
        PlistValue::String(s)
    }
}

impl From<i64> for PlistValue {
    fn from(i: i64) -> Self {
        PlistValue::Integer(i)
    }
}

impl From<i32> for PlistValue {
    fn from(i: i32) -> Self {
        PlistValue::Integer(i64::from(i))
    }
}

impl From<f64> for PlistValue {
    fn from(r: f64) -> Self {
        PlistValue::Real(r)
    }
}

impl From<bool> for PlistValue {
    fn from(b: bool) -> Self {
        PlistValue::Bool(b)
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(items: Vec<PlistValue>) -> Self {
        PlistValue::Array(items)
    }
}

impl From<StyleAttributes> for PlistValue {
    fn from(dict: StyleAttributes) -> Self {
        PlistValue::Dictionary(dict)
    }
}
