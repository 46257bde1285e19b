//! Capability traits used to query fluid properties.

mod base;
mod properties;

pub use base::ThermoModel;
pub use properties::*;
