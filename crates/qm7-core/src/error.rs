//! Error types for view featurization.
//!
//! Shape and configuration problems are reported as soon as they are seen;
//! nothing here is retried. Coincident atoms are not an error and never
//! surface through this type.

use thiserror::Error;

/// Errors raised while splitting views or assembling embeddings.
#[derive(Debug, Error)]
pub enum FeaturizeError {
    /// The flat per-view width does not split into whole atomic pieces.
    #[error("view size {view_size} is not divisible by piece size {piece_size}")]
    IndivisibleView { view_size: usize, piece_size: usize },

    /// Atomic pieces must hold an atomic number and three coordinates.
    #[error("atomic piece size {piece_size} is too small: at least 4 values (Z, x, y, z) are required")]
    MissingCoordinates { piece_size: usize },

    /// The fixed embedding width cannot hold the selected features.
    #[error("embedding size {embedding_size} is too small for selected features (requires at least {required})")]
    EmbeddingTooSmall {
        embedding_size: usize,
        required: usize,
    },

    /// An atomic number with no entry in the element table.
    #[error("unknown atomic number {atomic_number} (molecule {molecule}, view {view}, atom {atom})")]
    UnknownAtomicNumber {
        atomic_number: f32,
        molecule: usize,
        view: usize,
        atom: usize,
    },

    /// Interaction tensor does not line up with the atom tensor.
    #[error("interaction tensor has shape {found:?}, expected {expected:?}")]
    InteractionShape {
        expected: [usize; 4],
        found: [usize; 4],
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("invalid embedding config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeaturizeError>;
