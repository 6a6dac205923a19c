//! Embedding transformations in attribute bags and extracting them again.
//!
//! Encoded transformations live in a single array under
//! [`TRANSFORMATIONS_ATTRIBUTE`]. The array never holds two structurally
//! equal entries and keeps insertion order.
//!
//! - [`embed`] returns a copy of a bag with one more transformation.
//! - [`transformations`] recovers the transformations of one type using the
//!   standard registry. Use [`transformations_with`] to decode with a
//!   custom set of kinds.
//!
//! Extraction never fails. Entries that can't be decoded, including ones
//! written by newer versions with kinds this crate doesn't know, are
//! skipped and left in place.

mod registry;

pub use registry::TransformationRegistry;

use tracing::{debug, trace};

use crate::transform::EmbeddedTransformation;
use crate::value::{PlistValue, StyleAttributes};

/// Attribute key holding the embedded transformations.
pub const TRANSFORMATIONS_ATTRIBUTE: &str = "RestyleTransformations";

/// Returns a copy of `attrs` with `transformation` appended to its
/// embedded transformations.
///
/// The list is left unchanged when an entry is already present that is
/// structurally equal to the new one, or that decodes to an equal value
/// (an untagged entry from an older layout, say). A transformation holding
/// a `NaN` or infinite magnitude isn't embedded either, since no
/// persisted form of it reads back. `attrs` itself is never modified.
///
/// # Example
///
/// ```rust
/// use restyle::{embed, transformations, StyleAttributes, Tracking};
///
/// let once = embed(&Tracking::Point(2.0), &StyleAttributes::new());
/// let twice = embed(&Tracking::Point(2.0), &once);
///
/// assert_eq!(transformations::<Tracking>(&twice), vec![Tracking::Point(2.0)]);
/// ```
pub fn embed<T: EmbeddedTransformation>(
    transformation: &T,
    attrs: &StyleAttributes,
) -> StyleAttributes {
    let encoded = PlistValue::Dictionary(transformation.to_attributes());
    if !encoded.is_finite() {
        debug!(
            kind = %transformation.kind(),
            "not embedding transformation with a non-finite magnitude"
        );
        return attrs.clone();
    }

    let mut entries = embedded_entries(attrs).to_vec();
    let already_embedded = entries.iter().any(|entry| {
        *entry == encoded
            || entry
                .as_dictionary()
                .and_then(|dict| T::from_attributes(dict).ok())
                .map_or(false, |existing| existing == *transformation)
    });
    if already_embedded {
        trace!(kind = %transformation.kind(), "transformation already embedded");
    } else {
        entries.push(encoded);
    }

    let mut result = attrs.clone();
    result.insert(
        TRANSFORMATIONS_ATTRIBUTE.to_string(),
        PlistValue::Array(entries),
    );
    result
}

/// Extracts every embedded transformation of type `T` using the standard registry.
pub fn transformations<T: EmbeddedTransformation>(attrs: &StyleAttributes) -> Vec<T> {
    transformations_with(TransformationRegistry::standard(), attrs)
}

/// Extracts every embedded transformation of type `T` that `registry` recognizes.
pub fn transformations_with<T: EmbeddedTransformation>(
    registry: &TransformationRegistry,
    attrs: &StyleAttributes,
) -> Vec<T> {
    registry.transformations(attrs)
}

/// Returns a copy of `attrs` without any embedded transformations.
pub fn remove_transformations(attrs: &StyleAttributes) -> StyleAttributes {
    let mut result = attrs.clone();
    result.shift_remove(TRANSFORMATIONS_ATTRIBUTE);
    result
}

/// The raw embedded entries. A missing or non-array value reads as empty.
pub(crate) fn embedded_entries(attrs: &StyleAttributes) -> &[PlistValue] {
    attrs
        .get(TRANSFORMATIONS_ATTRIBUTE)
        .and_then(PlistValue::as_array)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Tab, Tracking, TransformationKind};

    #[test]
    fn test_embed_into_empty_bag() {
        let attrs = embed(&Tab::Spaces(4.0), &StyleAttributes::new());
        let entries = embedded_entries(&attrs);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            PlistValue::Dictionary(Tab::Spaces(4.0).to_attributes())
        );
    }

    #[test]
    fn test_embed_keeps_other_attributes_in_place() {
        let mut attrs = StyleAttributes::new();
        attrs.insert("font".to_string(), "Avenir".into());
        attrs.insert(TRANSFORMATIONS_ATTRIBUTE.to_string(), PlistValue::Array(vec![]));
        attrs.insert("size".to_string(), 17.into());

        let result = embed(&Tracking::Adobe(100.0), &attrs);
        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["font", TRANSFORMATIONS_ATTRIBUTE, "size"]);
    }

    #[test]
    fn test_embed_replaces_non_array_value() {
        let mut attrs = StyleAttributes::new();
        attrs.insert(TRANSFORMATIONS_ATTRIBUTE.to_string(), "garbage".into());

        let result = embed(&Tab::HeadIndent(8.0), &attrs);
        assert_eq!(embedded_entries(&result).len(), 1);
    }

    #[test]
    fn test_embed_keeps_foreign_entries() {
        let mut attrs = StyleAttributes::new();
        attrs.insert(
            TRANSFORMATIONS_ATTRIBUTE.to_string(),
            PlistValue::Array(vec!["not a dictionary".into()]),
        );

        let result = embed(&Tab::Spaces(2.0), &attrs);
        let entries = embedded_entries(&result);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], PlistValue::from("not a dictionary"));
    }

    #[test]
    fn test_embed_dedups_against_legacy_entry() {
        let mut legacy = StyleAttributes::new();
        legacy.insert("type".to_string(), "adobe-tracking".into());
        legacy.insert("size".to_string(), 300.into());
        let mut attrs = StyleAttributes::new();
        attrs.insert(
            TRANSFORMATIONS_ATTRIBUTE.to_string(),
            PlistValue::Array(vec![legacy.clone().into()]),
        );

        let result = embed(&Tracking::Adobe(300.0), &attrs);
        assert_eq!(embedded_entries(&result), &[PlistValue::from(legacy)]);
        assert_eq!(transformations::<Tracking>(&result), vec![Tracking::Adobe(300.0)]);

        let result = embed(&Tracking::Adobe(301.0), &result);
        assert_eq!(embedded_entries(&result).len(), 2);
    }

    #[test]
    fn test_embed_skips_non_finite_magnitudes() {
        let attrs = embed(&Tab::Spaces(4.0), &StyleAttributes::new());
        let mut result = attrs.clone();
        for _ in 0..5 {
            result = embed(&Tracking::Point(f64::NAN), &result);
            result = embed(&Tab::HeadIndent(f64::INFINITY), &result);
        }
        assert_eq!(result, attrs);
    }

    #[test]
    fn test_transformations_with_uses_given_registry() {
        let attrs = embed(&Tab::Spaces(4.0), &StyleAttributes::new());
        let attrs = embed(&Tracking::Point(1.0), &attrs);

        let tracking_only = TransformationRegistry::empty().register(TransformationKind::Tracking);
        assert!(transformations_with::<Tab>(&tracking_only, &attrs).is_empty());
        assert_eq!(
            transformations_with::<Tracking>(&tracking_only, &attrs),
            vec![Tracking::Point(1.0)]
        );
    }

    #[test]
    fn test_remove_transformations() {
        let mut attrs = StyleAttributes::new();
        attrs.insert("font".to_string(), "Avenir".into());
        let embedded = embed(&Tab::Spaces(4.0), &attrs);

        let stripped = remove_transformations(&embedded);
        assert_eq!(stripped, attrs);
        assert!(transformations::<Tab>(&stripped).is_empty());
    }

    #[test]
    fn test_missing_key_reads_as_empty() {
        assert!(embedded_entries(&StyleAttributes::new()).is_empty());
    }
}
