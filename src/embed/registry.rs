//! Registry of transformation kinds consulted while decoding.
//!
//! Mappings tagged with a `kind` discriminant decode through that kind
//! alone. Untagged mappings, written before the discriminant existed, are
//! tried against each registered kind in registration order and the first
//! one that parses wins. Two kinds whose `type` tags overlap would make that
//! fallback ambiguous, so the built-in variants keep their tags disjoint.
//!
//! A registry is a plain value. Build it once at startup and share it by
//! reference; nothing mutates it afterwards.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::transform::{read_kind, EmbeddedTransformation, Transformation, TransformationKind};
use crate::value::StyleAttributes;

use super::embedded_entries;

static STANDARD: Lazy<TransformationRegistry> = Lazy::new(|| {
    TransformationKind::ALL
        .into_iter()
        .fold(TransformationRegistry::empty(), TransformationRegistry::register)
});

/// An ordered set of transformation kinds.
///
/// # Example
///
/// ```rust
/// use restyle::{embed, Tab, Tracking, TransformationKind, TransformationRegistry, StyleAttributes};
///
/// let attrs = embed(&Tracking::Adobe(300.0), &StyleAttributes::new());
/// let attrs = embed(&Tab::Spaces(4.0), &attrs);
///
/// let tabs_only = TransformationRegistry::empty().register(TransformationKind::Tab);
/// assert!(tabs_only.transformations::<Tracking>(&attrs).is_empty());
/// assert_eq!(tabs_only.transformations::<Tab>(&attrs), vec![Tab::Spaces(4.0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationRegistry {
    kinds: Vec<TransformationKind>,
}

impl TransformationRegistry {
    /// Creates a registry that recognizes nothing.
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// The registry of all built-in kinds: adaptive, tracking, tab.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Appends a kind, returning the updated registry for chaining.
    ///
    /// Registering a kind twice keeps its first position.
    pub fn register(mut self, kind: TransformationKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Registered kinds in decode order.
    pub fn kinds(&self) -> &[TransformationKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: TransformationKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Decodes a mapping into whichever registered kind it encodes.
    pub fn decode(&self, dict: &StyleAttributes) -> Option<Transformation> {
        self.decode_as(dict)
    }

    /// Decodes a mapping into a `T`.
    ///
    /// For untagged mappings the search continues past kinds that parse
    /// the mapping but don't produce a `T`.
    pub fn decode_as<T: EmbeddedTransformation>(&self, dict: &StyleAttributes) -> Option<T> {
        match read_kind(dict) {
            Ok(Some(tag)) => {
                let kind = match TransformationKind::from_tag(tag) {
                    Some(kind) if self.contains(kind) => kind,
                    _ => {
                        debug!(kind = tag, "skipping transformation of unregistered kind");
                        return None;
                    }
                };
                match kind.decode(dict) {
                    Ok(t) => T::from_transformation(t),
                    Err(err) => {
                        debug!(%kind, error = %err, "skipping malformed transformation");
                        None
                    }
                }
            }
            Ok(None) => self.kinds.iter().find_map(|kind| match kind.decode(dict) {
                Ok(t) => T::from_transformation(t),
                Err(err) => {
                    trace!(%kind, error = %err, "untagged mapping is not this kind");
                    None
                }
            }),
            Err(err) => {
                debug!(error = %err, "skipping transformation with invalid kind tag");
                None
            }
        }
    }

    /// Extracts every embedded transformation of type `T`, in stored order.
    ///
    /// Entries that aren't dictionaries, don't decode, or decode to some
    /// other type are left out.
    pub fn transformations<T: EmbeddedTransformation>(&self, attrs: &StyleAttributes) -> Vec<T> {
        embedded_entries(attrs)
            .iter()
            .filter_map(|entry| match entry.as_dictionary() {
                Some(dict) => self.decode_as::<T>(dict),
                None => {
                    debug!(
                        found = entry.type_name(),
                        "skipping embedded entry that is not a dictionary"
                    );
                    None
                }
            })
            .collect()
    }

    /// Extracts every embedded transformation this registry recognizes.
    pub fn all_transformations(&self, attrs: &StyleAttributes) -> Vec<Transformation> {
        self.transformations(attrs)
    }
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::standard().clone()
    }
}
