//! Evaluation chain from a flight condition to the surface heat flux.
//!
//! Each step is a pure function of the ones before it:
//! atmosphere state, then transport properties, then Reynolds number, then
//! heat-transfer coefficient, then `q = h * (T_air - T_threshold)`.

mod given_flux;
mod input;
mod parameters;
mod results;

#[cfg(test)]
mod test_support;

pub use given_flux::{GivenFluxConfig, GivenFluxError, NonFiniteHeatFlux};
pub use input::FlightCondition;
pub use parameters::{HeatingConfig, HeatingParameters, ParametersError};
pub use results::{HeatingResults, HeatingSummary};

use uom::si::f64::{HeatFluxDensity, Velocity};

use crate::support::{
    atmosphere::ExponentialAtmosphere,
    constraint::{Constrained, NonNegative},
    convection::{LaminarFlatPlate, reynolds_number},
    thermo::{
        capability::{HasDynamicViscosity, HasThermalConductivity},
        fluid::Air,
        model::{PowerLawConductivity, Sutherland},
    },
    units::TemperatureDifference,
};

use given_flux::given_flux;

/// The atmosphere, property, and convection models of one heating estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingChain<Viscosity, Conductivity> {
    atmosphere: ExponentialAtmosphere,
    viscosity: Viscosity,
    conductivity: Conductivity,
    convection: LaminarFlatPlate,
}

impl HeatingChain<Sutherland<Air>, PowerLawConductivity<Air>> {
    /// Builds the standard air chain from validated constants.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if any constant is not strictly positive.
    pub fn new(parameters: &HeatingParameters) -> Result<Self, ParametersError> {
        Ok(Self {
            atmosphere: ExponentialAtmosphere::new(parameters.atmosphere())?,
            viscosity: Sutherland::with_parameters(parameters.viscosity())?,
            conductivity: PowerLawConductivity::with_parameters(parameters.conductivity())?,
            convection: LaminarFlatPlate::new(parameters.prandtl_number)?,
        })
    }
}

impl<Viscosity, Conductivity> HeatingChain<Viscosity, Conductivity> {
    /// Assembles a chain from already-built models.
    pub fn from_models(
        atmosphere: ExponentialAtmosphere,
        viscosity: Viscosity,
        conductivity: Conductivity,
        convection: LaminarFlatPlate,
    ) -> Self {
        Self {
            atmosphere,
            viscosity,
            conductivity,
            convection,
        }
    }
}

impl<Viscosity, Conductivity> HeatingChain<Viscosity, Conductivity>
where
    Viscosity: HasDynamicViscosity<Fluid = Air>,
    Conductivity: HasThermalConductivity<Fluid = Air>,
{
    /// Evaluates the chain at `condition`.
    pub fn evaluate(&self, condition: &FlightCondition) -> HeatingResults {
        let air = self.atmosphere.state(condition.altitude);

        let viscosity = self.viscosity.dynamic_viscosity(&air);
        let conductivity = self.conductivity.thermal_conductivity(&air);

        let reynolds = reynolds_number(
            air.density,
            condition.velocity,
            condition.diameter,
            viscosity,
        );
        let heat_transfer_coefficient =
            self.convection
                .heat_transfer_coefficient(conductivity, condition.diameter, reynolds);

        let heat_flux: HeatFluxDensity =
            heat_transfer_coefficient * air.temperature.minus(condition.material_threshold);

        HeatingResults {
            condition: *condition,
            air,
            viscosity,
            conductivity,
            reynolds,
            heat_transfer_coefficient,
            heat_flux,
        }
    }

    /// Finds the velocity at which the heat-flux magnitude reaches `target`.
    ///
    /// # Errors
    ///
    /// See [`GivenFluxError`].
    pub fn velocity_for_heat_flux(
        &self,
        condition: &FlightCondition,
        target: Constrained<HeatFluxDensity, NonNegative>,
        bracket: [Velocity; 2],
        config: GivenFluxConfig,
    ) -> Result<HeatingResults, GivenFluxError> {
        given_flux(self, condition, target, bracket, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, f64::ThermodynamicTemperature,
        heat_flux_density::watt_per_square_meter, heat_transfer::watt_per_square_meter_kelvin,
        mass_density::kilogram_per_cubic_meter, ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::degree_celsius,
        thermodynamic_temperature::kelvin, velocity::meter_per_second,
    };

    use super::test_support::chain;

    #[test]
    fn recorded_flight_condition() {
        let results = chain().evaluate(&FlightCondition::default());

        assert_relative_eq!(
            results.air.density.get::<kilogram_per_cubic_meter>(),
            1.129_746_419_731_289_4,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.air.temperature.get::<kelvin>(),
            282.848_941_178_417_36,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.viscosity.get::<pascal_second>(),
            1.764_439_172_652_253e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.conductivity.get::<watt_per_meter_kelvin>(),
            0.026_390_624_734_546_616,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.reynolds.get::<ratio>(),
            3_194_620.488_281_410_7,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            91.610_867_807_105_65,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.heat_flux.get::<watt_per_square_meter>(),
            -17_332.873_188_668_42,
            max_relative = 1e-12
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let chain = chain();
        let condition = FlightCondition::default();

        assert_eq!(chain.evaluate(&condition), chain.evaluate(&condition));
    }

    #[test]
    fn flux_follows_the_air_to_threshold_difference() {
        let chain = chain();
        let cold_limit = FlightCondition {
            material_threshold: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            ..FlightCondition::default()
        };

        let results = chain.evaluate(&cold_limit);
        assert!(results.heat_flux.get::<watt_per_square_meter>() > 0.0);

        let at_air_temperature = FlightCondition {
            material_threshold: results.air.temperature,
            ..FlightCondition::default()
        };
        assert_eq!(
            chain
                .evaluate(&at_air_temperature)
                .heat_flux
                .get::<watt_per_square_meter>(),
            0.0
        );
    }

    #[test]
    fn faster_flight_means_more_flux() {
        let chain = chain();
        let condition = FlightCondition::default();

        let slow = chain.evaluate(&condition.with_velocity(Velocity::new::<meter_per_second>(100.0)));
        let fast = chain.evaluate(&condition);

        assert!(slow.reynolds < fast.reynolds);
        assert!(
            slow.heat_flux.get::<watt_per_square_meter>().abs()
                < fast.heat_flux.get::<watt_per_square_meter>().abs()
        );
    }

    #[test]
    fn rejects_invalid_constants() {
        let parameters = HeatingParameters {
            prandtl_number: 0.0,
            ..HeatingParameters::default()
        };
        assert!(matches!(
            HeatingChain::new(&parameters),
            Err(ParametersError::Convection(_))
        ));

        let parameters = HeatingParameters {
            conductivity_exponent: -0.76,
            ..HeatingParameters::default()
        };
        assert!(matches!(
            HeatingChain::new(&parameters),
            Err(ParametersError::Conductivity(_))
        ));
    }
}
