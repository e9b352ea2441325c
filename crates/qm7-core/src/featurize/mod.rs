//! Atom Featurizer for QM7 views
//!
//! Turn split molecular views into per-atom embeddings for a downstream model.
//!
//! Every embedding starts with the atomic number and coordinates, followed by
//! the switched-on atomic properties, and then either:
//! - the atom's Coulomb row against the rest of its view, or
//! - zero padding up to a fixed width.
//!
//! Padding atoms (atomic number `0.0`) always get an all-zero embedding.
mod embeddings;
mod view_features;

pub use self::embeddings::ViewEmbeddings;
pub use self::view_features::{featurize_views, ViewFeatures};
