//! Letter tracking.

use super::{
    expect_kind, keys, read_number, read_str, tagged, DecodeError, EmbeddedTransformation,
    Transformation, TransformationKind,
};
use crate::value::StyleAttributes;

const POINT: &str = "point-tracking";
const ADOBE: &str = "adobe-tracking";

/// Spacing added between characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tracking {
    /// Fixed spacing in points.
    Point(f64),
    /// Adobe tracking units: thousandths of an em, so the spacing scales
    /// with the point size of the font it's applied to.
    Adobe(f64),
}

impl Tracking {
    /// Resolves the tracking to a kerning value in points for `point_size`.
    pub fn kerning(&self, point_size: f64) -> f64 {
        match self {
            Tracking::Point(points) => *points,
            Tracking::Adobe(units) => point_size * units / 1000.0,
        }
    }
}

impl EmbeddedTransformation for Tracking {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Tracking
    }

    fn to_attributes(&self) -> StyleAttributes {
        let (type_tag, size) = match self {
            Tracking::Point(size) => (POINT, *size),
            Tracking::Adobe(size) => (ADOBE, *size),
        };
        let mut dict = tagged(TransformationKind::Tracking, type_tag);
        dict.insert(keys::SIZE.to_string(), size.into());
        dict
    }

    fn from_attributes(dict: &StyleAttributes) -> Result<Self, DecodeError> {
        expect_kind(dict, TransformationKind::Tracking)?;
        let build: fn(f64) -> Tracking = match read_str(dict, keys::TYPE)? {
            POINT => Tracking::Point,
            ADOBE => Tracking::Adobe,
            other => {
                return Err(DecodeError::UnknownType {
                    kind: "tracking",
                    value: other.to_string(),
                })
            }
        };
        Ok(build(read_number(dict, keys::SIZE)?))
    }

    fn into_transformation(self) -> Transformation {
        Transformation::Tracking(self)
    }

    fn from_transformation(transformation: Transformation) -> Option<Self> {
        match transformation {
            Transformation::Tracking(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PlistValue;

    #[test]
    fn test_adobe_tracking_layout() {
        let dict = Tracking::Adobe(300.0).to_attributes();
        assert_eq!(dict["kind"], PlistValue::from("tracking"));
        assert_eq!(dict["type"], PlistValue::from("adobe-tracking"));
        assert_eq!(dict["size"], PlistValue::Real(300.0));
    }

    #[test]
    fn test_round_trip() {
        for t in [Tracking::Point(2.0), Tracking::Adobe(-50.0)] {
            assert_eq!(Tracking::from_attributes(&t.to_attributes()), Ok(t));
        }
    }

    #[test]
    fn test_decodes_legacy_untagged_mapping() {
        let mut dict = StyleAttributes::new();
        dict.insert("type".to_string(), "adobe-tracking".into());
        dict.insert("size".to_string(), 250.into());
        assert_eq!(Tracking::from_attributes(&dict), Ok(Tracking::Adobe(250.0)));
    }

    #[test]
    fn test_rejects_other_kind() {
        let mut dict = Tracking::Point(1.0).to_attributes();
        dict.insert("kind".to_string(), "tab".into());
        assert!(matches!(
            Tracking::from_attributes(&dict),
            Err(DecodeError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_size() {
        let mut dict = Tracking::Point(1.0).to_attributes();
        dict.shift_remove("size");
        assert_eq!(
            Tracking::from_attributes(&dict),
            Err(DecodeError::MissingKey { key: "size" })
        );
    }

    #[test]
    fn test_kerning() {
        assert_eq!(Tracking::Point(1.5).kerning(20.0), 1.5);
        assert_eq!(Tracking::Adobe(500.0).kerning(20.0), 10.0);
    }
}
