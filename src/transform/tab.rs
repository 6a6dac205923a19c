//! Tab stop spacing.

use super::{
    expect_kind, keys, read_number, read_str, tagged, DecodeError, EmbeddedTransformation,
    Transformation, TransformationKind,
};
use crate::value::StyleAttributes;

const SPACES: &str = "spaces";
const HEAD_INDENT: &str = "headIndent";

/// How far a tab advances the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    /// A tab stop this many space widths after the preceding text.
    Spaces(f64),
    /// A tab stop aligned to the paragraph head indent plus this many points.
    HeadIndent(f64),
}

impl EmbeddedTransformation for Tab {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Tab
    }

    fn to_attributes(&self) -> StyleAttributes {
        let (type_tag, size) = match self {
            Tab::Spaces(size) => (SPACES, *size),
            Tab::HeadIndent(size) => (HEAD_INDENT, *size),
        };
        let mut dict = tagged(TransformationKind::Tab, type_tag);
        dict.insert(keys::SIZE.to_string(), size.into());
        dict
    }

    fn from_attributes(dict: &StyleAttributes) -> Result<Self, DecodeError> {
        expect_kind(dict, TransformationKind::Tab)?;
        let build: fn(f64) -> Tab = match read_str(dict, keys::TYPE)? {
            SPACES => Tab::Spaces,
            HEAD_INDENT => Tab::HeadIndent,
            other => {
                return Err(DecodeError::UnknownType {
                    kind: "tab",
                    value: other.to_string(),
                })
            }
        };
        Ok(build(read_number(dict, keys::SIZE)?))
    }

    fn into_transformation(self) -> Transformation {
        Transformation::Tab(self)
    }

    fn from_transformation(transformation: Transformation) -> Option<Self> {
        match transformation {
            Transformation::Tab(t) => Some(t),
            _ => None,
        }
    }
}
