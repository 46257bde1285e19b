//! Sutherland's-law viscosity model.
//!
//! Gas viscosity rises with temperature. Sutherland's law captures that with
//! a reference point and a single fluid-specific constant `C`:
//!
//! ```text
//! mu(T) = mu_ref * (T / T_ref)^1.5 * (T_ref + C) / (T + C)
//! ```
//!
//! The law is undefined at `T = -C`. Callers are expected to stay within a
//! physical temperature range; the model does not check.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        State,
        capability::{HasDynamicViscosity, ThermoModel},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SutherlandParametersError {
    #[error("invalid reference viscosity: {mu_ref:?}")]
    ReferenceViscosity { mu_ref: DynamicViscosity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid Sutherland constant: {c:?}")]
    SutherlandConstant { c: TemperatureInterval },
}

/// Constants for the [`Sutherland`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandParameters {
    pub reference_viscosity: DynamicViscosity,
    pub reference_temperature: ThermodynamicTemperature,
    pub sutherland_constant: TemperatureInterval,
}

/// Fluid constants required by the [`Sutherland`] model.
pub trait SutherlandFluid {
    /// Returns the reference constants for use with [`Sutherland`].
    fn parameters() -> SutherlandParameters;
}

/// Sutherland's-law viscosity for `Fluid`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sutherland<Fluid> {
    mu_ref: DynamicViscosity,
    t_ref: ThermodynamicTemperature,
    c: TemperatureInterval,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Sutherland<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: SutherlandFluid> Sutherland<Fluid> {
    /// Creates a model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`SutherlandParametersError`] if any constant is not strictly positive.
    pub fn new() -> Result<Self, SutherlandParametersError> {
        Self::with_parameters(Fluid::parameters())
    }
}

impl<Fluid> Sutherland<Fluid> {
    /// Creates a model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`SutherlandParametersError`] if any constant is not strictly positive.
    pub fn with_parameters(
        parameters: SutherlandParameters,
    ) -> Result<Self, SutherlandParametersError> {
        let mu_ref = parameters.reference_viscosity;
        if StrictlyPositive::check(&mu_ref.get::<pascal_second>()).is_err() {
            return Err(SutherlandParametersError::ReferenceViscosity { mu_ref });
        }

        let t_ref = parameters.reference_temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(SutherlandParametersError::ReferenceTemperature { t_ref });
        }

        let c = parameters.sutherland_constant;
        if StrictlyPositive::check(&c.get::<delta_kelvin>()).is_err() {
            return Err(SutherlandParametersError::SutherlandConstant { c });
        }

        Ok(Self {
            mu_ref,
            t_ref,
            c,
            _marker: PhantomData,
        })
    }

    /// Returns the dynamic viscosity at `temperature`.
    ///
    /// At the reference temperature this returns the reference viscosity exactly.
    #[must_use]
    pub fn viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        let t = temperature.get::<kelvin>();
        let t_ref = self.t_ref.get::<kelvin>();
        let c = self.c.get::<delta_kelvin>();

        self.mu_ref * (t / t_ref).powf(1.5) * ((t_ref + c) / (t + c))
    }
}

impl<Fluid> HasDynamicViscosity for Sutherland<Fluid> {
    fn dynamic_viscosity(&self, state: &State<Self::Fluid>) -> DynamicViscosity {
        self.viscosity(state.temperature)
    }
}
