//! Embedding configuration.
//!
//! [`EmbeddingConfig`] can be built in code with its builder or read from JSON:
//!
//! ```
//! use qm7_core::{EmbeddingConfig, EmbeddingLayout};
//!
//! let config = EmbeddingConfig::from_json(
//!     r#"{ "layout": "padded", "embedding_size": 12, "switches": { "atomic_mass": false } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.layout, EmbeddingLayout::Padded);
//! assert_eq!(config.switches.selected().len(), 2);
//! ```
use crate::error::Result;
use crate::info::AtomicProperty;
use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Atomic number + x/y/z
pub const DEFAULT_PIECE_SIZE: usize = 4;
pub const DEFAULT_EMBEDDING_SIZE: usize = 16;

fn on() -> bool {
    true
}

/// Which atomic properties are appended to each embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySwitches {
    #[serde(default = "on")]
    pub electronegativity: bool,
    #[serde(default = "on")]
    pub atomic_mass: bool,
    #[serde(default = "on")]
    pub valence_electrons: bool,
}

impl Default for PropertySwitches {
    fn default() -> Self {
        Self::all()
    }
}

impl PropertySwitches {
    pub fn all() -> Self {
        Self {
            electronegativity: true,
            atomic_mass: true,
            valence_electrons: true,
        }
    }

    pub fn none() -> Self {
        Self {
            electronegativity: false,
            atomic_mass: false,
            valence_electrons: false,
        }
    }

    pub fn is_on(&self, property: AtomicProperty) -> bool {
        match property {
            AtomicProperty::Electronegativity => self.electronegativity,
            AtomicProperty::AtomicMass => self.atomic_mass,
            AtomicProperty::ValenceElectrons => self.valence_electrons,
        }
    }

    pub fn set(mut self, property: AtomicProperty, value: bool) -> Self {
        match property {
            AtomicProperty::Electronegativity => self.electronegativity = value,
            AtomicProperty::AtomicMass => self.atomic_mass = value,
            AtomicProperty::ValenceElectrons => self.valence_electrons = value,
        }
        self
    }

    /// Switched-on properties in embedding order.
    pub fn selected(&self) -> Vec<AtomicProperty> {
        AtomicProperty::iter().filter(|p| self.is_on(*p)).collect()
    }
}

/// What to do with an atomic number that is not in the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownElementPolicy {
    /// Fail with [`FeaturizeError::UnknownAtomicNumber`](crate::FeaturizeError::UnknownAtomicNumber).
    Reject,
    /// Use hydrogen's properties and keep going.
    Hydrogen,
}

/// Embedding layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingLayout {
    /// `[Z, x, y, z, properties.., coulomb row]`, width `4 + props + atoms - 1`
    #[default]
    WithInteractions,
    /// `[Z, x, y, z, properties.., 0..]`, width `embedding_size`
    Padded,
}

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingConfig {
    #[builder(default = DEFAULT_PIECE_SIZE)]
    #[serde(default = "default_piece_size")]
    pub piece_size: usize,

    #[builder(default)]
    #[serde(default)]
    pub switches: PropertySwitches,

    /// Only used by [`EmbeddingLayout::Padded`].
    #[builder(default = DEFAULT_EMBEDDING_SIZE)]
    #[serde(default = "default_embedding_size")]
    pub embedding_size: usize,

    #[builder(default)]
    #[serde(default)]
    pub layout: EmbeddingLayout,

    /// Unset means each layout keeps its own default: `WithInteractions`
    /// rejects unknown atomic numbers, `Padded` falls back to hydrogen.
    #[serde(default)]
    pub unknown_element: Option<UnknownElementPolicy>,
}

fn default_piece_size() -> usize {
    DEFAULT_PIECE_SIZE
}

fn default_embedding_size() -> usize {
    DEFAULT_EMBEDDING_SIZE
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EmbeddingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Width of the atomic number, coordinates and switched-on properties.
    pub fn base_width(&self) -> usize {
        1 + 3 + self.switches.selected().len()
    }

    pub(crate) fn policy_for(&self, layout: EmbeddingLayout) -> UnknownElementPolicy {
        self.unknown_element.unwrap_or(match layout {
            EmbeddingLayout::WithInteractions => UnknownElementPolicy::Reject,
            EmbeddingLayout::Padded => UnknownElementPolicy::Hydrogen,
        })
    }
}
