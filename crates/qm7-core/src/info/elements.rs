//! # Elements
//!
//! Static chemistry for the elements found in QM7 molecules.
//!
//! - [`Element`] maps atomic numbers to element symbols.
//! - [`AtomicProperties`] holds the per-element scalars that can be
//!   switched into an embedding.
//! - [`AtomicProperty`] names those scalars, in embedding order.
//!
use strum::{Display, EnumIter, EnumString};

/// Elements with an entry in the property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    S,
}

/// Scalar properties of a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicProperties {
    /// Pauling electronegativity
    pub electronegativity: f32,
    /// standard atomic mass in u
    pub atomic_mass: f32,
    pub valence_electrons: u8,
}

/// Property selectors. Iteration order is the order properties are laid out
/// in an embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum AtomicProperty {
    Electronegativity,
    AtomicMass,
    ValenceElectrons,
}

impl AtomicProperties {
    pub fn get(&self, property: AtomicProperty) -> f32 {
        match property {
            AtomicProperty::Electronegativity => self.electronegativity,
            AtomicProperty::AtomicMass => self.atomic_mass,
            AtomicProperty::ValenceElectrons => self.valence_electrons as f32,
        }
    }
}

impl Element {
    /// Look up an element from a (floating point) atomic number.
    ///
    /// The value is rounded to the nearest integer first so that e.g. `5.9999`
    /// read back from a float array still resolves to carbon. Padding (`0.0`),
    /// non-finite values and elements outside the table give `None`.
    pub fn from_atomic_number(atomic_number: f32) -> Option<Self> {
        if !atomic_number.is_finite() {
            return None;
        }
        match atomic_number.round() as i64 {
            1 => Some(Self::H),
            6 => Some(Self::C),
            7 => Some(Self::N),
            8 => Some(Self::O),
            9 => Some(Self::F),
            16 => Some(Self::S),
            _ => None,
        }
    }

    pub const fn atomic_number(&self) -> u8 {
        match self {
            Self::H => 1,
            Self::C => 6,
            Self::N => 7,
            Self::O => 8,
            Self::F => 9,
            Self::S => 16,
        }
    }

    #[rustfmt::skip]
    pub const fn properties(&self) -> AtomicProperties {
        //                                       electroneg.  mass    valence
        let (electronegativity, atomic_mass, valence_electrons) = match self {
            Self::H => (2.20, 1.008,  1),
            Self::C => (2.55, 12.01,  4),
            Self::N => (3.04, 14.007, 5),
            Self::O => (3.44, 15.999, 6),
            Self::F => (3.98, 18.998, 7),
            Self::S => (2.58, 32.06,  6),
        };
        AtomicProperties { electronegativity, atomic_mass, valence_electrons }
    }
}
