//! Pairwise Coulomb terms between the atoms of a view.
use crate::error::{FeaturizeError, Result};
use itertools::iproduct;
use ndarray::{Array4, ArrayView4};

/// Coulomb interaction `q_i * q_j / |r_i - r_j|` between two point charges.
///
/// Coincident positions (including an atom paired with itself) give `0.0`
/// instead of a division by zero.
pub fn coulomb_interaction(
    nuclear_charge_i: f32,
    nuclear_charge_j: f32,
    coord_i: &[f32; 3],
    coord_j: &[f32; 3],
) -> f32 {
    let dx = coord_i[0] - coord_j[0];
    let dy = coord_i[1] - coord_j[1];
    let dz = coord_i[2] - coord_j[2];
    let distance = (dx * dx + dy * dy + dz * dz).sqrt();
    if distance == 0.0 {
        return 0.0;
    }
    nuclear_charge_i * nuclear_charge_j / distance
}

/// Coulomb interaction of every atom with every other atom in the same view.
///
/// `atoms` is `[molecule, view, atom, piece]` with `[Z, x, y, z]` leading each
/// piece. The result is `[molecule, view, atom_i, atoms - 1]`: column `c` of
/// row `i` holds the interaction with the `c`-th atom `j != i`, counting `j`
/// upwards from 0. Padding atoms (`Z == 0.0`) are not skipped and fill their
/// columns with zeros.
pub fn coulomb_interactions(atoms: ArrayView4<f32>) -> Result<Array4<f32>> {
    let (molecules, views, n_atoms, piece_size) = atoms.dim();
    if piece_size < 4 {
        return Err(FeaturizeError::MissingCoordinates { piece_size });
    }
    let width = n_atoms.saturating_sub(1);
    log::debug!("coulomb interactions for {molecules}x{views} views of {n_atoms} atoms");

    let mut interaction = Array4::<f32>::zeros((molecules, views, n_atoms, width));
    for (mol, view) in iproduct!(0..molecules, 0..views) {
        let charges: Vec<f32> = (0..n_atoms).map(|a| atoms[[mol, view, a, 0]]).collect();
        let coords: Vec<[f32; 3]> = (0..n_atoms)
            .map(|a| {
                [
                    atoms[[mol, view, a, 1]],
                    atoms[[mol, view, a, 2]],
                    atoms[[mol, view, a, 3]],
                ]
            })
            .collect();

        for i in 0..n_atoms {
            let others = (0..n_atoms).filter(|&j| j != i);
            for (col, j) in others.enumerate() {
                interaction[[mol, view, i, col]] =
                    coulomb_interaction(charges[i], charges[j], &coords[i], &coords[j]);
            }
        }
    }
    Ok(interaction)
}
