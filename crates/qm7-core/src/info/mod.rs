mod elements;

pub use self::elements::{AtomicProperties, AtomicProperty, Element};
