//! Problem formulation for the velocity search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{HeatFluxDensity, Velocity},
    heat_flux_density::watt_per_square_meter,
    velocity::meter_per_second,
};

use crate::models::aero::heating::core::{FlightCondition, HeatingChain, HeatingResults};
use crate::support::thermo::{
    capability::{HasDynamicViscosity, HasThermalConductivity},
    fluid::Air,
};

use super::NonFiniteHeatFlux;

/// Model adapter exposing flight velocity as the sole input.
pub(super) struct GivenFluxModel<'a, Viscosity, Conductivity> {
    chain: &'a HeatingChain<Viscosity, Conductivity>,
    condition: FlightCondition,
}

impl<'a, Viscosity, Conductivity> GivenFluxModel<'a, Viscosity, Conductivity> {
    pub(super) fn new(
        chain: &'a HeatingChain<Viscosity, Conductivity>,
        condition: FlightCondition,
    ) -> Self {
        Self { chain, condition }
    }
}

impl<Viscosity, Conductivity> Model for GivenFluxModel<'_, Viscosity, Conductivity>
where
    Viscosity: HasDynamicViscosity<Fluid = Air>,
    Conductivity: HasThermalConductivity<Fluid = Air>,
{
    type Input = Velocity;
    type Output = HeatingResults;
    type Error = NonFiniteHeatFlux;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = self.chain.evaluate(&self.condition.with_velocity(*input));
        if results
            .heat_flux
            .get::<watt_per_square_meter>()
            .is_finite()
        {
            Ok(results)
        } else {
            Err(NonFiniteHeatFlux { velocity: *input })
        }
    }
}

/// Equation problem for matching a heat-flux magnitude.
///
/// Computes the residual as `|achieved_flux| - target_flux`.
pub(super) struct GivenFluxProblem {
    target: HeatFluxDensity,
}

impl GivenFluxProblem {
    pub(super) fn new(target: HeatFluxDensity) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenFluxProblem {
    type Input = Velocity;
    type Output = HeatingResults;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Velocity::new::<meter_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.heat_flux.get::<watt_per_square_meter>().abs();
        let target = self.target.get::<watt_per_square_meter>();
        Ok([achieved - target])
    }
}
