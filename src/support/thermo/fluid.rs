//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Property models declare which fluid they
//! describe through [`ThermoModel::Fluid`](super::capability::ThermoModel::Fluid).

mod air;

pub use air::Air;
