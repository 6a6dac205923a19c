//! Style transformations and their plist codec.
//!
//! A transformation captures one adaptive styling decision so it can be
//! stored inside a [`StyleAttributes`] bag and replayed later:
//!
//! - [`AdaptiveStyle`]: font scaling rules
//! - [`Tracking`]: letter spacing
//! - [`Tab`]: tab stop spacing
//!
//! Every variant implements [`EmbeddedTransformation`], which converts to and
//! from a plist-compatible mapping. The closed [`Transformation`] enum wraps
//! all of them.
//!
//! # Mapping layout
//!
//! Encoded mappings carry a `kind` discriminant naming the variant
//! (`"adaptive"`, `"tracking"` or `"tab"`), a `type` tag naming the
//! sub-variant, and whatever state the sub-variant needs (usually `size`).
//!
//! ```text
//! { "kind": "tracking", "type": "adobe-tracking", "size": 300.0 }
//! ```
//!
//! Mappings written before the discriminant existed have no `kind`. Each
//! variant still decodes those from the `type` tag alone.

mod adaptive;
mod error;
mod tab;
mod tracking;

pub use adaptive::{AdaptiveStyle, ScalingFamily};
pub use error::DecodeError;
pub use tab::Tab;
pub use tracking::Tracking;

use crate::value::{PlistValue, StyleAttributes};

/// Keys shared by the mappings of all variants.
pub mod keys {
    /// Variant discriminant.
    pub const KIND: &str = "kind";
    /// Sub-variant tag.
    pub const TYPE: &str = "type";
    /// Numeric magnitude (points, ems, spaces).
    pub const SIZE: &str = "size";
}

/// Discriminant of a [`Transformation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    Adaptive,
    Tracking,
    Tab,
}

impl TransformationKind {
    /// All kinds, in the order the standard registry consults them.
    pub const ALL: [TransformationKind; 3] = [
        TransformationKind::Adaptive,
        TransformationKind::Tracking,
        TransformationKind::Tab,
    ];

    /// The value written under the `kind` key.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformationKind::Adaptive => "adaptive",
            TransformationKind::Tracking => "tracking",
            TransformationKind::Tab => "tab",
        }
    }

    /// Parses a `kind` tag. Returns `None` for tags from unknown variants.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "adaptive" => Some(TransformationKind::Adaptive),
            "tracking" => Some(TransformationKind::Tracking),
            "tab" => Some(TransformationKind::Tab),
            _ => None,
        }
    }

    /// Decodes `dict` as this kind's variant.
    pub fn decode(self, dict: &StyleAttributes) -> Result<Transformation, DecodeError> {
        match self {
            TransformationKind::Adaptive => {
                AdaptiveStyle::from_attributes(dict).map(Transformation::Adaptive)
            }
            TransformationKind::Tracking => {
                Tracking::from_attributes(dict).map(Transformation::Tracking)
            }
            TransformationKind::Tab => Tab::from_attributes(dict).map(Transformation::Tab),
        }
    }
}

impl std::fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can be embedded in a [`StyleAttributes`] bag.
///
/// `from_attributes` must invert `to_attributes`:
/// `T::from_attributes(&t.to_attributes()) == Ok(t)`.
pub trait EmbeddedTransformation: Sized + PartialEq {
    /// The variant this value belongs to.
    fn kind(&self) -> TransformationKind;

    /// Returns a plist-compatible mapping of all state needed to rebuild `self`.
    fn to_attributes(&self) -> StyleAttributes;

    /// Rebuilds a value from a mapping produced by [`to_attributes`](Self::to_attributes).
    fn from_attributes(dict: &StyleAttributes) -> Result<Self, DecodeError>;

    fn into_transformation(self) -> Transformation;

    /// Narrows a decoded transformation to this type, if it is one.
    fn from_transformation(transformation: Transformation) -> Option<Self>;
}

/// Any known transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Adaptive(AdaptiveStyle),
    Tracking(Tracking),
    Tab(Tab),
}

impl EmbeddedTransformation for Transformation {
    fn kind(&self) -> TransformationKind {
        match self {
            Transformation::Adaptive(_) => TransformationKind::Adaptive,
            Transformation::Tracking(_) => TransformationKind::Tracking,
            Transformation::Tab(_) => TransformationKind::Tab,
        }
    }

    fn to_attributes(&self) -> StyleAttributes {
        match self {
            Transformation::Adaptive(t) => t.to_attributes(),
            Transformation::Tracking(t) => t.to_attributes(),
            Transformation::Tab(t) => t.to_attributes(),
        }
    }

    /// Dispatches on the `kind` tag, or tries every kind in
    /// [`TransformationKind::ALL`] order for untagged mappings.
    fn from_attributes(dict: &StyleAttributes) -> Result<Self, DecodeError> {
        if let Some(tag) = read_kind(dict)? {
            return match TransformationKind::from_tag(tag) {
                Some(kind) => kind.decode(dict),
                None => Err(DecodeError::UnknownType {
                    kind: keys::KIND,
                    value: tag.to_string(),
                }),
            };
        }
        let mut last_err = DecodeError::MissingKey { key: keys::TYPE };
        for kind in TransformationKind::ALL {
            match kind.decode(dict) {
                Ok(t) => return Ok(t),
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }

    fn into_transformation(self) -> Transformation {
        self
    }

    fn from_transformation(transformation: Transformation) -> Option<Self> {
        Some(transformation)
    }
}

impl From<AdaptiveStyle> for Transformation {
    fn from(t: AdaptiveStyle) -> Self {
        Transformation::Adaptive(t)
    }
}

impl From<Tracking> for Transformation {
    fn from(t: Tracking) -> Self {
        Transformation::Tracking(t)
    }
}

impl From<Tab> for Transformation {
    fn from(t: Tab) -> Self {
        Transformation::Tab(t)
    }
}

/// Starts a mapping with the `kind` and `type` tags filled in.
pub(crate) fn tagged(kind: TransformationKind, type_tag: &str) -> StyleAttributes {
    let mut dict = StyleAttributes::new();
    dict.insert(keys::KIND.to_string(), kind.as_str().into());
    dict.insert(keys::TYPE.to_string(), type_tag.into());
    dict
}

/// Reads the optional `kind` tag.
pub(crate) fn read_kind(dict: &StyleAttributes) -> Result<Option<&str>, DecodeError> {
    match dict.get(keys::KIND) {
        None => Ok(None),
        Some(PlistValue::String(tag)) => Ok(Some(tag.as_str())),
        Some(other) => Err(DecodeError::WrongType {
            key: keys::KIND,
            expected: "string",
            found: other.type_name(),
        }),
    }
}

/// Rejects mappings tagged for another variant. Untagged mappings pass.
pub(crate) fn expect_kind(
    dict: &StyleAttributes,
    expected: TransformationKind,
) -> Result<(), DecodeError> {
    match read_kind(dict)? {
        Some(tag) if tag != expected.as_str() => Err(DecodeError::KindMismatch {
            expected: expected.as_str(),
            found: tag.to_string(),
        }),
        _ => Ok(()),
    }
}

pub(crate) fn read_str<'a>(
    dict: &'a StyleAttributes,
    key: &'static str,
) -> Result<&'a str, DecodeError> {
    let value = dict.get(key).ok_or(DecodeError::MissingKey { key })?;
    value.as_str().ok_or(DecodeError::WrongType {
        key,
        expected: "string",
        found: value.type_name(),
    })
}

/// Reads a finite number. `NaN` and infinities are rejected.
pub(crate) fn read_number(dict: &StyleAttributes, key: &'static str) -> Result<f64, DecodeError> {
    let value = dict.get(key).ok_or(DecodeError::MissingKey { key })?;
    let number = value.as_f64().ok_or(DecodeError::WrongType {
        key,
        expected: "number",
        found: value.type_name(),
    })?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(DecodeError::NonFinite { key })
    }
}
