//! Adaptive font scaling rules.

use super::{
    expect_kind, keys, read_number, read_str, tagged, DecodeError, EmbeddedTransformation,
    Transformation, TransformationKind,
};
use crate::value::StyleAttributes;

const CONTROL: &str = "control";
const BODY: &str = "body";
const PREFERRED: &str = "preferred";
const ABOVE: &str = "above";
const BELOW: &str = "below";
const FONT_METRICS: &str = "fontMetrics";

const FAMILY: &str = "family";
const TEXT_STYLE: &str = "textStyle";

/// The scaling curve a bounded adaptive style follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingFamily {
    Control,
    Body,
    Preferred,
}

impl ScalingFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalingFamily::Control => CONTROL,
            ScalingFamily::Body => BODY,
            ScalingFamily::Preferred => PREFERRED,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            CONTROL => Some(ScalingFamily::Control),
            BODY => Some(ScalingFamily::Body),
            PREFERRED => Some(ScalingFamily::Preferred),
            _ => None,
        }
    }
}

/// How a font responds to the user's preferred content size.
#[derive(Debug, Clone, PartialEq)]
pub enum AdaptiveStyle {
    /// Scale like system controls.
    Control,
    /// Scale like body text, including the accessibility sizes.
    Body,
    /// Use the preferred font for the text style already in the attributes.
    Preferred,
    /// Scale with `family`, but only once the font is at least `size` points.
    Above { size: f64, family: ScalingFamily },
    /// Scale with `family`, but only while the font is at most `size` points.
    Below { size: f64, family: ScalingFamily },
    /// Scale with the platform font metrics of a named text style.
    FontMetrics { text_style: String },
}

impl EmbeddedTransformation for AdaptiveStyle {
    fn kind(&self) -> TransformationKind {
        TransformationKind::Adaptive
    }

    fn to_attributes(&self) -> StyleAttributes {
        let kind = TransformationKind::Adaptive;
        match self {
            AdaptiveStyle::Control => tagged(kind, CONTROL),
            AdaptiveStyle::Body => tagged(kind, BODY),
            AdaptiveStyle::Preferred => tagged(kind, PREFERRED),
            AdaptiveStyle::Above { size, family } | AdaptiveStyle::Below { size, family } => {
                let type_tag = if matches!(self, AdaptiveStyle::Above { .. }) {
                    ABOVE
                } else {
                    BELOW
                };
                let mut dict = tagged(kind, type_tag);
                dict.insert(keys::SIZE.to_string(), (*size).into());
                dict.insert(FAMILY.to_string(), family.as_str().into());
                dict
            }
            AdaptiveStyle::FontMetrics { text_style } => {
                let mut dict = tagged(kind, FONT_METRICS);
                dict.insert(TEXT_STYLE.to_string(), text_style.as_str().into());
                dict
            }
        }
    }

    fn from_attributes(dict: &StyleAttributes) -> Result<Self, DecodeError> {
        expect_kind(dict, TransformationKind::Adaptive)?;
        match read_str(dict, keys::TYPE)? {
            CONTROL => Ok(AdaptiveStyle::Control),
            BODY => Ok(AdaptiveStyle::Body),
            PREFERRED => Ok(AdaptiveStyle::Preferred),
            ABOVE => {
                let (size, family) = read_bound(dict)?;
                Ok(AdaptiveStyle::Above { size, family })
            }
            BELOW => {
                let (size, family) = read_bound(dict)?;
                Ok(AdaptiveStyle::Below { size, family })
            }
            FONT_METRICS => Ok(AdaptiveStyle::FontMetrics {
                text_style: read_str(dict, TEXT_STYLE)?.to_string(),
            }),
            other => Err(DecodeError::UnknownType {
                kind: "adaptive",
                value: other.to_string(),
            }),
        }
    }

    fn into_transformation(self) -> Transformation {
        Transformation::Adaptive(self)
    }

    fn from_transformation(transformation: Transformation) -> Option<Self> {
        match transformation {
            Transformation::Adaptive(t) => Some(t),
            _ => None,
        }
    }
}

fn read_bound(dict: &StyleAttributes) -> Result<(f64, ScalingFamily), DecodeError> {
    let size = read_number(dict, keys::SIZE)?;
    let tag = read_str(dict, FAMILY)?;
    let family = ScalingFamily::from_tag(tag).ok_or_else(|| DecodeError::UnknownType {
        kind: FAMILY,
        value: tag.to_string(),
    })?;
    Ok((size, family))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PlistValue;

    fn all_styles() -> Vec<AdaptiveStyle> {
        vec![
            AdaptiveStyle::Control,
            AdaptiveStyle::Body,
            AdaptiveStyle::Preferred,
            AdaptiveStyle::Above {
                size: 20.0,
                family: ScalingFamily::Body,
            },
            AdaptiveStyle::Below {
                size: 12.0,
                family: ScalingFamily::Control,
            },
            AdaptiveStyle::FontMetrics {
                text_style: "title1".to_string(),
            },
        ]
    }

    #[test]
    fn test_round_trip_every_style() {
        for style in all_styles() {
            let dict = style.to_attributes();
            assert_eq!(AdaptiveStyle::from_attributes(&dict), Ok(style));
        }
    }

    #[test]
    fn test_bounded_layout() {
        let dict = AdaptiveStyle::Below {
            size: 12.0,
            family: ScalingFamily::Preferred,
        }
        .to_attributes();
        assert_eq!(dict["type"], PlistValue::from("below"));
        assert!(matches!(dict["size"], PlistValue::Real(size) if size == 12.0));
        assert_eq!(dict["family"], PlistValue::from("preferred"));
    }

    #[test]
    fn test_unit_styles_carry_only_tags() {
        let dict = AdaptiveStyle::Body.to_attributes();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains_key("kind"));
        assert!(dict.contains_key("type"));
    }

    #[test]
    fn test_rejects_unknown_family() {
        let mut dict = AdaptiveStyle::Above {
            size: 20.0,
            family: ScalingFamily::Body,
        }
        .to_attributes();
        dict.insert("family".to_string(), "headline".into());
        assert_eq!(
            AdaptiveStyle::from_attributes(&dict),
            Err(DecodeError::UnknownType {
                kind: "family",
                value: "headline".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_tab_mapping() {
        let mut dict = StyleAttributes::new();
        dict.insert("type".to_string(), "spaces".into());
        dict.insert("size".to_string(), 4.into());
        assert!(matches!(
            AdaptiveStyle::from_attributes(&dict),
            Err(DecodeError::UnknownType { kind: "adaptive", .. })
        ));
    }
}
