//! Transport-property capabilities.
//!
//! These are total functions of the state: evaluating a correlation outside
//! its valid range yields a non-finite or non-physical quantity, not an error.

use uom::si::f64::{DynamicViscosity, ThermalConductivity};

use crate::support::thermo::State;

use super::ThermoModel;

pub trait HasDynamicViscosity: ThermoModel {
    /// Returns the dynamic viscosity for the given state.
    fn dynamic_viscosity(&self, state: &State<Self::Fluid>) -> DynamicViscosity;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    fn thermal_conductivity(&self, state: &State<Self::Fluid>) -> ThermalConductivity;
}
