//! Power-law thermal conductivity.
//!
//! Scales a reference conductivity with temperature:
//!
//! ```text
//! k(T) = k_ref * (T / T_ref)^n
//! ```
//!
//! For air near atmospheric pressure `n = 0.76` is a reasonable fit over the
//! lower atmosphere. The result is undefined for `T <= 0 K`; not checked.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    f64::{ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        State,
        capability::{HasThermalConductivity, ThermoModel},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PowerLawParametersError {
    #[error("invalid reference conductivity: {k_ref:?}")]
    ReferenceConductivity { k_ref: ThermalConductivity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid exponent: {exponent}")]
    Exponent { exponent: f64 },
}

/// Constants for the [`PowerLawConductivity`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawParameters {
    pub reference_conductivity: ThermalConductivity,
    pub reference_temperature: ThermodynamicTemperature,
    pub exponent: f64,
}

/// Fluid constants required by the [`PowerLawConductivity`] model.
pub trait PowerLawConductivityFluid {
    /// Returns the reference constants for use with [`PowerLawConductivity`].
    fn parameters() -> PowerLawParameters;
}

/// Power-law thermal conductivity for `Fluid`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawConductivity<Fluid> {
    k_ref: ThermalConductivity,
    t_ref: ThermodynamicTemperature,
    exponent: f64,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for PowerLawConductivity<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: PowerLawConductivityFluid> PowerLawConductivity<Fluid> {
    /// Creates a model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerLawParametersError`] if any constant is not strictly positive.
    pub fn new() -> Result<Self, PowerLawParametersError> {
        Self::with_parameters(Fluid::parameters())
    }
}

impl<Fluid> PowerLawConductivity<Fluid> {
    /// Creates a model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`PowerLawParametersError`] if any constant is not strictly positive.
    pub fn with_parameters(
        parameters: PowerLawParameters,
    ) -> Result<Self, PowerLawParametersError> {
        let k_ref = parameters.reference_conductivity;
        if StrictlyPositive::check(&k_ref.get::<watt_per_meter_kelvin>()).is_err() {
            return Err(PowerLawParametersError::ReferenceConductivity { k_ref });
        }

        let t_ref = parameters.reference_temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(PowerLawParametersError::ReferenceTemperature { t_ref });
        }

        let exponent = parameters.exponent;
        if StrictlyPositive::check(&exponent).is_err() {
            return Err(PowerLawParametersError::Exponent { exponent });
        }

        Ok(Self {
            k_ref,
            t_ref,
            exponent,
            _marker: PhantomData,
        })
    }

    /// Returns the thermal conductivity at `temperature`.
    ///
    /// At the reference temperature this returns the reference conductivity exactly.
    #[must_use]
    pub fn conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        let ratio = temperature.get::<kelvin>() / self.t_ref.get::<kelvin>();
        self.k_ref * ratio.powf(self.exponent)
    }
}

impl<Fluid> HasThermalConductivity for PowerLawConductivity<Fluid> {
    fn thermal_conductivity(&self, state: &State<Self::Fluid>) -> ThermalConductivity {
        self.conductivity(state.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::fluid::Air;

    fn air() -> PowerLawConductivity<Air> {
        PowerLawConductivity::<Air>::new().expect("air constants are valid")
    }

    #[test]
    fn reference_point_is_exact() {
        let k = air().conductivity(ThermodynamicTemperature::new::<kelvin>(273.15));
        assert_eq!(k.get::<watt_per_meter_kelvin>(), 0.0257);
    }

    #[test]
    fn matches_flight_condition() {
        let k = air().conductivity(ThermodynamicTemperature::new::<kelvin>(282.84894117841736));
        assert_relative_eq!(
            k.get::<watt_per_meter_kelvin>(),
            0.026390624734546616,
            max_relative = 1e-12
        );
    }

    #[test]
    fn negative_temperature_is_not_a_number() {
        let k = air().conductivity(ThermodynamicTemperature::new::<kelvin>(-10.0));
        assert!(k.get::<watt_per_meter_kelvin>().is_nan());
    }

    #[test]
    fn rejects_invalid_exponent() {
        let mut parameters = <Air as PowerLawConductivityFluid>::parameters();
        parameters.exponent = f64::NAN;
        assert!(matches!(
            PowerLawConductivity::<Air>::with_parameters(parameters),
            Err(PowerLawParametersError::Exponent { .. })
        ));
    }
}
