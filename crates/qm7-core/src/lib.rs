//! # qm7-core
//!
//! Per-atom feature embeddings for QM7 molecular views.
//!
//! __qm7-core__ provides functionality for:
//! * Splitting flat per-view arrays into `[Z, x, y, z]` atomic pieces
//! * Looking up chemical properties (electronegativity, mass, valence) by atomic number
//! * Computing pairwise Coulomb interaction terms within a view
//! * Assembling fixed-layout embeddings per atom, per view, per molecule
//!
//! The main entry point is the [`AtomViews`] struct which holds split views and
//! featurizes them through the [`ViewFeatures`] trait.
//!
//! ```
//! use ndarray::Array3;
//! use qm7_core::{AtomViews, EmbeddingConfig, ViewFeatures};
//!
//! // one molecule, one view: carbon at the origin, oxygen 1 unit along x
//! let views = Array3::from_shape_vec((1, 1, 8), vec![6.0, 0.0, 0.0, 0.0, 8.0, 1.0, 0.0, 0.0]).unwrap();
//! let atoms = AtomViews::from_flat(views.view(), 4).unwrap();
//! let features = atoms.featurize(&EmbeddingConfig::default()).unwrap();
//! assert_eq!(features.embeddings.dim(), (1, 1, 2, 8));
//! ```
mod config;
mod coulomb;
mod error;
mod featurize;
mod info;
mod views;

pub use self::config::{
    EmbeddingConfig, EmbeddingLayout, PropertySwitches, UnknownElementPolicy,
    DEFAULT_EMBEDDING_SIZE, DEFAULT_PIECE_SIZE,
};
pub use self::coulomb::{coulomb_interaction, coulomb_interactions};
pub use self::error::{FeaturizeError, Result};
pub use self::featurize::{featurize_views, ViewEmbeddings, ViewFeatures};
pub use self::info::{AtomicProperties, AtomicProperty, Element};
pub use self::views::{flatten_views, split_views, AtomViews};
