use crate::config::{EmbeddingConfig, EmbeddingLayout};
use candle_core::{Device, Result as CandleResult, Tensor};
use ndarray::Array4;

/// Per-atom embeddings for a batch of molecular views.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEmbeddings {
    /// embeddings by atom [molecule, view, atom, feature]
    pub embeddings: Array4<f32>,
    /// coulomb rows [molecule, view, atom, atoms - 1]; `WithInteractions` only
    pub interactions: Option<Array4<f32>>,
    /// layout used to build `embeddings`
    pub layout: EmbeddingLayout,
    /// one name per feature slot
    pub feature_names: Vec<String>,
}

impl ViewEmbeddings {
    pub fn get_embeddings(&self) -> &Array4<f32> {
        &self.embeddings
    }

    pub fn get_interactions(&self) -> Option<&Array4<f32>> {
        self.interactions.as_ref()
    }

    pub fn embedding_size(&self) -> usize {
        self.embeddings.dim().3
    }

    /// Copy the embeddings into a `[molecule, view, atom, feature]` Tensor.
    pub fn to_tensor(&self, device: &Device) -> CandleResult<Tensor> {
        let data: Vec<f32> = self.embeddings.iter().copied().collect();
        Tensor::from_vec(data, self.embeddings.dim(), device)
    }
}

/// Names for each slot of an embedding:
/// `atomic_number, x, y, z, <properties..>` then `coulomb_<c>` or `pad_<k>`.
pub(crate) fn feature_names(
    config: &EmbeddingConfig,
    layout: EmbeddingLayout,
    n_atoms: usize,
) -> Vec<String> {
    let mut names: Vec<String> = ["atomic_number", "x", "y", "z"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend(config.switches.selected().iter().map(|p| p.to_string()));
    match layout {
        EmbeddingLayout::WithInteractions => {
            names.extend((0..n_atoms.saturating_sub(1)).map(|c| format!("coulomb_{c}")));
        }
        EmbeddingLayout::Padded => {
            let padding = config.embedding_size.saturating_sub(names.len());
            names.extend((0..padding).map(|k| format!("pad_{k}")));
        }
    }
    names
}
