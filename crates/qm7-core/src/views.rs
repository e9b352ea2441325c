//! Molecular views split into per-atom pieces.
//!
//! Raw QM7 views arrive as `[molecule, view, flat_feature]`, where each run
//! of `piece_size` values describes one atom as `[Z, x, y, z]`. Molecules with
//! fewer atoms than the widest one are padded with atoms whose atomic number
//! is `0.0`.
use crate::error::{FeaturizeError, Result};
use ndarray::{Array3, Array4, ArrayView1, ArrayView3, ArrayView4};

/// Split flat views into atomic pieces.
///
/// Returns `[molecule, view, flat_feature / piece_size, piece_size]`. This is a
/// reshape only; values keep their row-major order.
pub fn split_views(views: ArrayView3<f32>, piece_size: usize) -> Result<Array4<f32>> {
    let (molecules, n_views, view_size) = views.dim();
    if piece_size == 0 || view_size % piece_size != 0 {
        return Err(FeaturizeError::IndivisibleView {
            view_size,
            piece_size,
        });
    }
    let atoms = view_size / piece_size;
    log::debug!(
        "splitting {molecules}x{n_views} views of width {view_size} into {atoms} atoms of {piece_size}"
    );
    let data: Vec<f32> = views.iter().copied().collect();
    Ok(Array4::from_shape_vec(
        (molecules, n_views, atoms, piece_size),
        data,
    )?)
}

/// Inverse of [`split_views`]: merge the last two axes back together.
pub fn flatten_views(atoms: ArrayView4<f32>) -> Array3<f32> {
    let (molecules, n_views, n_atoms, piece_size) = atoms.dim();
    Array3::from_shape_fn((molecules, n_views, n_atoms * piece_size), |(m, v, k)| {
        atoms[[m, v, k / piece_size, k % piece_size]]
    })
}

/// Split views as `[molecule, view, atom, piece]` with at least `[Z, x, y, z]`
/// in every piece.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomViews {
    atoms: Array4<f32>,
}

impl AtomViews {
    /// Wrap an already split tensor.
    pub fn new(atoms: Array4<f32>) -> Result<Self> {
        let piece_size = atoms.dim().3;
        if piece_size < 4 {
            return Err(FeaturizeError::MissingCoordinates { piece_size });
        }
        Ok(Self { atoms })
    }

    /// Split raw `[molecule, view, flat_feature]` views, see [`split_views`].
    pub fn from_flat(views: ArrayView3<f32>, piece_size: usize) -> Result<Self> {
        Self::new(split_views(views, piece_size)?)
    }

    pub fn num_molecules(&self) -> usize {
        self.atoms.dim().0
    }

    pub fn num_views(&self) -> usize {
        self.atoms.dim().1
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.dim().2
    }

    pub fn piece_size(&self) -> usize {
        self.atoms.dim().3
    }

    /// `[Z, x, y, z, ..]` for a single atom.
    pub fn atom(&self, molecule: usize, view: usize, atom: usize) -> ArrayView1<'_, f32> {
        self.atoms.slice(ndarray::s![molecule, view, atom, ..])
    }

    pub fn as_array(&self) -> ArrayView4<'_, f32> {
        self.atoms.view()
    }

    pub fn into_array(self) -> Array4<f32> {
        self.atoms
    }

    pub fn flatten(&self) -> Array3<f32> {
        flatten_views(self.atoms.view())
    }
}
