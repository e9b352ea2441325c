use super::embeddings::{feature_names, ViewEmbeddings};
use crate::config::{EmbeddingConfig, EmbeddingLayout, UnknownElementPolicy};
use crate::coulomb;
use crate::error::{FeaturizeError, Result};
use crate::info::{AtomicProperty, Element};
use crate::views::AtomViews;
use itertools::iproduct;
use ndarray::{s, Array4, ArrayView1, ArrayView3, ArrayViewMut1};

/// View->embedding utilities for model input.
pub trait ViewFeatures {
    /// Coulomb row of every atom against the other atoms of its view
    fn coulomb_interactions(&self) -> Result<Array4<f32>>;

    /// `[Z, x, y, z, properties.., coulomb row]` per atom
    fn embed_with_interactions(
        &self,
        interactions: &Array4<f32>,
        config: &EmbeddingConfig,
    ) -> Result<Array4<f32>>;

    /// `[Z, x, y, z, properties..]` per atom, zero padded to `config.embedding_size`
    fn embed_padded(&self, config: &EmbeddingConfig) -> Result<Array4<f32>>;

    /// Build the embeddings selected by `config.layout`
    fn featurize(&self, config: &EmbeddingConfig) -> Result<ViewEmbeddings>;
}

impl ViewFeatures for AtomViews {
    fn coulomb_interactions(&self) -> Result<Array4<f32>> {
        coulomb::coulomb_interactions(self.as_array())
    }

    fn embed_with_interactions(
        &self,
        interactions: &Array4<f32>,
        config: &EmbeddingConfig,
    ) -> Result<Array4<f32>> {
        let (molecules, views, n_atoms) = (self.num_molecules(), self.num_views(), self.num_atoms());
        let expected = [molecules, views, n_atoms, n_atoms.saturating_sub(1)];
        let (a, b, c, d) = interactions.dim();
        let found = [a, b, c, d];
        if found != expected {
            return Err(FeaturizeError::InteractionShape { expected, found });
        }

        let properties = config.switches.selected();
        let width = config.base_width() + expected[3];
        let policy = config.policy_for(EmbeddingLayout::WithInteractions);
        log::debug!("embedding {molecules}x{views}x{n_atoms} atoms with interactions, width {width}");

        let mut embeddings = Array4::<f32>::zeros((molecules, views, n_atoms, width));
        for (mol, view, atom) in iproduct!(0..molecules, 0..views, 0..n_atoms) {
            let piece = self.atom(mol, view, atom);
            // padding atoms stay all-zero
            if piece[0] == 0.0 {
                continue;
            }
            let element = resolve_element(piece[0], policy, mol, view, atom)?;
            let mut row = embeddings.slice_mut(s![mol, view, atom, ..]);
            let filled = write_atom_features(&mut row, piece, element, &properties);
            row.slice_mut(s![filled..])
                .assign(&interactions.slice(s![mol, view, atom, ..]));
        }
        Ok(embeddings)
    }

    fn embed_padded(&self, config: &EmbeddingConfig) -> Result<Array4<f32>> {
        let properties = config.switches.selected();
        let required = config.base_width();
        let embedding_size = config.embedding_size;
        if required > embedding_size {
            return Err(FeaturizeError::EmbeddingTooSmall {
                embedding_size,
                required,
            });
        }

        let (molecules, views, n_atoms) = (self.num_molecules(), self.num_views(), self.num_atoms());
        let policy = config.policy_for(EmbeddingLayout::Padded);
        log::debug!("embedding {molecules}x{views}x{n_atoms} atoms padded to {embedding_size}");

        let mut embeddings = Array4::<f32>::zeros((molecules, views, n_atoms, embedding_size));
        for (mol, view, atom) in iproduct!(0..molecules, 0..views, 0..n_atoms) {
            let piece = self.atom(mol, view, atom);
            if piece[0] == 0.0 {
                continue;
            }
            let element = resolve_element(piece[0], policy, mol, view, atom)?;
            let mut row = embeddings.slice_mut(s![mol, view, atom, ..]);
            write_atom_features(&mut row, piece, element, &properties);
        }
        Ok(embeddings)
    }

    fn featurize(&self, config: &EmbeddingConfig) -> Result<ViewEmbeddings> {
        let (embeddings, interactions) = match config.layout {
            EmbeddingLayout::WithInteractions => {
                let interactions = self.coulomb_interactions()?;
                let embeddings = self.embed_with_interactions(&interactions, config)?;
                (embeddings, Some(interactions))
            }
            EmbeddingLayout::Padded => (self.embed_padded(config)?, None),
        };
        Ok(ViewEmbeddings {
            embeddings,
            interactions,
            layout: config.layout,
            feature_names: feature_names(config, config.layout, self.num_atoms()),
        })
    }
}

/// Split raw `[molecule, view, flat_feature]` views and featurize them.
pub fn featurize_views(views: ArrayView3<f32>, config: &EmbeddingConfig) -> Result<ViewEmbeddings> {
    AtomViews::from_flat(views, config.piece_size)?.featurize(config)
}

fn resolve_element(
    atomic_number: f32,
    policy: UnknownElementPolicy,
    molecule: usize,
    view: usize,
    atom: usize,
) -> Result<Element> {
    match (Element::from_atomic_number(atomic_number), policy) {
        (Some(element), _) => Ok(element),
        (None, UnknownElementPolicy::Hydrogen) => {
            log::warn!(
                "unknown atomic number {atomic_number} (molecule {molecule}, view {view}, atom {atom}); using hydrogen properties"
            );
            Ok(Element::H)
        }
        (None, UnknownElementPolicy::Reject) => Err(FeaturizeError::UnknownAtomicNumber {
            atomic_number,
            molecule,
            view,
            atom,
        }),
    }
}

/// Write `[Z, x, y, z, properties..]` to the front of `row` and return the
/// number of slots written.
fn write_atom_features(
    row: &mut ArrayViewMut1<f32>,
    piece: ArrayView1<f32>,
    element: Element,
    properties: &[AtomicProperty],
) -> usize {
    row.slice_mut(s![..4]).assign(&piece.slice(s![..4]));
    let table = element.properties();
    for (slot, property) in properties.iter().enumerate() {
        row[4 + slot] = table.get(*property);
    }
    4 + properties.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertySwitches;
    use ndarray::{array, Array3};

    fn two_atoms() -> AtomViews {
        AtomViews::new(array![[[[6.0f32, 0.0, 0.0, 0.0], [8.0, 1.0, 0.0, 0.0]]]]).unwrap()
    }

    fn padded_config() -> EmbeddingConfig {
        EmbeddingConfig::builder()
            .layout(EmbeddingLayout::Padded)
            .build()
    }

    #[test]
    fn test_padded_carbon() {
        let embeddings = two_atoms().embed_padded(&padded_config()).unwrap();
        assert_eq!(embeddings.dim(), (1, 1, 2, 16));
        let mut expected = vec![6.0, 0.0, 0.0, 0.0, 2.55, 12.01, 4.0];
        expected.resize(16, 0.0);
        assert_eq!(embeddings.slice(s![0, 0, 0, ..]).to_vec(), expected);
    }

    #[test]
    fn test_padded_too_small() {
        let config = EmbeddingConfig::builder().embedding_size(6).build();
        let err = two_atoms().embed_padded(&config).unwrap_err();
        assert!(matches!(
            err,
            FeaturizeError::EmbeddingTooSmall {
                embedding_size: 6,
                required: 7
            }
        ));
        // fewer properties fit
        let config = EmbeddingConfig::builder()
            .embedding_size(6)
            .switches(PropertySwitches::all().set(AtomicProperty::AtomicMass, false))
            .build();
        assert_eq!(two_atoms().embed_padded(&config).unwrap().dim().3, 6);
    }

    #[test]
    fn test_padded_checks_size_before_atoms() {
        // an unknown element under Reject would fail per atom; the size check wins
        let atoms = AtomViews::new(array![[[[99.0f32, 0.0, 0.0, 0.0]]]]).unwrap();
        let config = EmbeddingConfig::builder()
            .embedding_size(2)
            .unknown_element(UnknownElementPolicy::Reject)
            .build();
        assert!(matches!(
            atoms.embed_padded(&config).unwrap_err(),
            FeaturizeError::EmbeddingTooSmall { .. }
        ));
    }

    #[test]
    fn test_padded_unknown_defaults_to_hydrogen() {
        let atoms = AtomViews::new(array![[[[17.0f32, 1.0, 2.0, 3.0]]]]).unwrap();
        let embeddings = atoms.embed_padded(&padded_config()).unwrap();
        assert_eq!(
            embeddings.slice(s![0, 0, 0, ..7]).to_vec(),
            vec![17.0, 1.0, 2.0, 3.0, 2.20, 1.008, 1.0]
        );
    }

    #[test]
    fn test_interactions_unknown_is_rejected() {
        let atoms = AtomViews::new(array![[[[6.0f32, 0.0, 0.0, 0.0], [17.0, 1.0, 0.0, 0.0]]]])
            .unwrap();
        let interactions = atoms.coulomb_interactions().unwrap();
        let err = atoms
            .embed_with_interactions(&interactions, &EmbeddingConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FeaturizeError::UnknownAtomicNumber {
                molecule: 0,
                view: 0,
                atom: 1,
                ..
            }
        ));
        // the policy can be overridden
        let config = EmbeddingConfig::builder()
            .unknown_element(UnknownElementPolicy::Hydrogen)
            .build();
        assert!(atoms.embed_with_interactions(&interactions, &config).is_ok());
    }

    #[test]
    fn test_with_interactions_layout() {
        let atoms = two_atoms();
        let interactions = atoms.coulomb_interactions().unwrap();
        let embeddings = atoms
            .embed_with_interactions(&interactions, &EmbeddingConfig::default())
            .unwrap();
        assert_eq!(embeddings.dim(), (1, 1, 2, 8));
        assert_eq!(
            embeddings.slice(s![0, 0, 1, ..]).to_vec(),
            vec![8.0, 1.0, 0.0, 0.0, 3.44, 15.999, 6.0, 48.0]
        );
    }

    #[test]
    fn test_interaction_shape_mismatch() {
        let atoms = two_atoms();
        let wrong = Array4::<f32>::zeros((1, 1, 2, 22));
        let err = atoms
            .embed_with_interactions(&wrong, &EmbeddingConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FeaturizeError::InteractionShape {
                expected: [1, 1, 2, 1],
                found: [1, 1, 2, 22]
            }
        ));
    }

    #[test]
    fn test_padding_atoms_are_zero() {
        let atoms = AtomViews::new(array![[[
            [1.0f32, 0.5, 0.5, 0.5],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 7.0, 7.0, 7.0]
        ]]])
        .unwrap();
        let switches = PropertySwitches::all().set(AtomicProperty::Electronegativity, false);
        let config = EmbeddingConfig::builder().switches(switches).build();

        let interactions = atoms.coulomb_interactions().unwrap();
        let with = atoms.embed_with_interactions(&interactions, &config).unwrap();
        assert_eq!(with.dim().3, 1 + 3 + 2 + 2);
        for atom in 1..3 {
            assert!(with.slice(s![0, 0, atom, ..]).iter().all(|&v| v == 0.0));
        }

        let padded = atoms.embed_padded(&config).unwrap();
        assert_eq!(padded.dim().3, 16);
        for atom in 1..3 {
            assert!(padded.slice(s![0, 0, atom, ..]).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_no_properties() {
        let config = EmbeddingConfig::builder()
            .switches(PropertySwitches::none())
            .build();
        let atoms = two_atoms();
        let interactions = atoms.coulomb_interactions().unwrap();
        let embeddings = atoms.embed_with_interactions(&interactions, &config).unwrap();
        assert_eq!(
            embeddings.slice(s![0, 0, 0, ..]).to_vec(),
            vec![6.0, 0.0, 0.0, 0.0, 48.0]
        );
    }

    #[test]
    fn test_featurize_views() {
        let views = Array3::from_shape_vec((1, 1, 8), vec![6.0f32, 0.0, 0.0, 0.0, 8.0, 1.0, 0.0, 0.0])
            .unwrap();
        let result = featurize_views(views.view(), &EmbeddingConfig::default()).unwrap();
        assert_eq!(result.layout, EmbeddingLayout::WithInteractions);
        assert_eq!(result.feature_names.len(), result.embedding_size());
        assert_eq!(result.get_interactions().unwrap()[[0, 0, 0, 0]], 48.0);

        let result = featurize_views(views.view(), &padded_config()).unwrap();
        assert!(result.interactions.is_none());
        assert_eq!(result.feature_names.len(), 16);
        assert_eq!(result.get_embeddings().dim(), (1, 1, 2, 16));
    }

    #[test]
    fn test_featurize_views_indivisible() {
        let views = Array3::<f32>::zeros((1, 1, 10));
        assert!(matches!(
            featurize_views(views.view(), &EmbeddingConfig::default()).unwrap_err(),
            FeaturizeError::IndivisibleView { .. }
        ));
    }
}
