//! # Restyle - Replayable Style Transformations
//!
//! `restyle` stores adaptive styling decisions inside the attribute bag of a
//! styled text run, so they can be persisted with the text and replayed
//! later. The typical case is re-deriving fonts after the user changes their
//! preferred content size: the style that was applied is gone, but the
//! transformations embedded in the attributes say how to rebuild it.
//!
//! Everything stored is plist-compatible ([`PlistValue`]), so a bag survives
//! any serde format unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use restyle::{embed, transformations, AdaptiveStyle, StyleAttributes, Tab, Tracking};
//!
//! let mut attrs = StyleAttributes::new();
//! attrs.insert("font".to_string(), "Avenir-Book".into());
//!
//! let attrs = embed(&AdaptiveStyle::Body, &attrs);
//! let attrs = embed(&Tracking::Adobe(300.0), &attrs);
//! let attrs = embed(&Tab::Spaces(4.0), &attrs);
//!
//! assert_eq!(transformations::<Tracking>(&attrs), vec![Tracking::Adobe(300.0)]);
//! assert_eq!(transformations::<AdaptiveStyle>(&attrs), vec![AdaptiveStyle::Body]);
//! ```
//!
//! ## Decoding
//!
//! Each encoded transformation carries a `kind` discriminant and decodes
//! through that variant directly. Untagged mappings are tried against every
//! kind of a [`TransformationRegistry`] in order.
//! [`TransformationRegistry::standard`] knows all built-in kinds; build a
//! narrower one with [`TransformationRegistry::empty`] and
//! [`TransformationRegistry::register`].
//!
//! ## Logging
//!
//! Skipped entries and deduplicated embeds emit [`tracing`] events at
//! `debug` and `trace` level. No subscriber is installed.

pub mod embed;
pub mod transform;
pub mod value;

pub use embed::{
    embed, remove_transformations, transformations, transformations_with, TransformationRegistry,
    TRANSFORMATIONS_ATTRIBUTE,
};
pub use transform::{
    AdaptiveStyle, DecodeError, EmbeddedTransformation, ScalingFamily, Tab, Tracking,
    Transformation, TransformationKind,
};
pub use value::{PlistValue, StyleAttributes};
