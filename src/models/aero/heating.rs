//! Aerodynamic surface heating.
//!
//! [`AeroHeating`] estimates the convective heat flux into an airframe at a
//! single [`FlightCondition`]. It implements [`twine_core::Model`] as a thin
//! adapter over the internal `core` module, which also provides the inverse
//! search for the velocity at which a target flux is reached.
//!
//! ```
//! use aeroheat_models::models::aero::heating::{AeroHeating, FlightCondition, HeatingParameters};
//! use uom::si::heat_flux_density::watt_per_square_meter;
//!
//! let model = AeroHeating::new(&HeatingParameters::default()).unwrap();
//! let results = model.evaluate(&FlightCondition::default());
//!
//! // Air colder than the material limit draws heat out of the surface.
//! assert!(results.heat_flux.get::<watt_per_square_meter>() < 0.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    FlightCondition, GivenFluxConfig, GivenFluxError, HeatingConfig, HeatingParameters,
    HeatingResults, HeatingSummary, NonFiniteHeatFlux, ParametersError,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{HeatFluxDensity, Velocity};

use crate::support::{
    atmosphere::ExponentialAtmosphere,
    constraint::{Constrained, NonNegative},
    convection::LaminarFlatPlate,
    thermo::{
        capability::{HasDynamicViscosity, HasThermalConductivity},
        fluid::Air,
        model::{PowerLawConductivity, Sutherland},
    },
};

use self::core::HeatingChain;

/// Convective heating of an airframe flying through still air.
///
/// The default property models are Sutherland viscosity and power-law
/// conductivity; any models providing the same capabilities for [`Air`] can
/// be substituted through [`AeroHeating::from_models`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroHeating<Viscosity = Sutherland<Air>, Conductivity = PowerLawConductivity<Air>> {
    chain: HeatingChain<Viscosity, Conductivity>,
}

impl AeroHeating {
    /// Creates the standard air model from `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if any constant is not strictly positive.
    pub fn new(parameters: &HeatingParameters) -> Result<Self, ParametersError> {
        Ok(Self {
            chain: HeatingChain::new(parameters)?,
        })
    }
}

impl TryFrom<HeatingConfig> for AeroHeating {
    type Error = ParametersError;

    fn try_from(config: HeatingConfig) -> Result<Self, Self::Error> {
        Self::new(&config.into())
    }
}

impl<Viscosity, Conductivity> AeroHeating<Viscosity, Conductivity> {
    /// Creates a model from already-built component models.
    pub fn from_models(
        atmosphere: ExponentialAtmosphere,
        viscosity: Viscosity,
        conductivity: Conductivity,
        convection: LaminarFlatPlate,
    ) -> Self {
        Self {
            chain: HeatingChain::from_models(atmosphere, viscosity, conductivity, convection),
        }
    }
}

impl<Viscosity, Conductivity> AeroHeating<Viscosity, Conductivity>
where
    Viscosity: HasDynamicViscosity<Fluid = Air>,
    Conductivity: HasThermalConductivity<Fluid = Air>,
{
    /// Evaluates the heating chain at `condition`.
    #[must_use]
    pub fn evaluate(&self, condition: &FlightCondition) -> HeatingResults {
        self.chain.evaluate(condition)
    }

    /// Finds the velocity within `bracket` at which `|q|` reaches `target`.
    ///
    /// The velocity of `condition` is ignored; its altitude, diameter, and
    /// material threshold are held fixed.
    ///
    /// A zero `target` is met only at rest, so it returns the evaluation at
    /// zero velocity even when `bracket` starts above zero.
    ///
    /// # Errors
    ///
    /// Returns [`GivenFluxError`] if the bracket is invalid, the flux is
    /// undefined at this condition, the target lies outside the bracket, or
    /// the solver does not converge.
    pub fn velocity_for_heat_flux(
        &self,
        condition: &FlightCondition,
        target: Constrained<HeatFluxDensity, NonNegative>,
        bracket: [Velocity; 2],
        config: GivenFluxConfig,
    ) -> Result<HeatingResults, GivenFluxError> {
        self.chain
            .velocity_for_heat_flux(condition, target, bracket, config)
    }
}

impl<Viscosity, Conductivity> Model for AeroHeating<Viscosity, Conductivity>
where
    Viscosity: HasDynamicViscosity<Fluid = Air>,
    Conductivity: HasThermalConductivity<Fluid = Air>,
{
    type Input = FlightCondition;
    type Output = HeatingResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.evaluate(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, ThermalConductivity},
        heat_flux_density::watt_per_square_meter,
        ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin,
        velocity::meter_per_second,
    };

    use crate::support::thermo::{State, capability::ThermoModel};

    /// Temperature-independent air properties.
    struct ConstantProperties {
        mu: DynamicViscosity,
        k: ThermalConductivity,
    }

    impl ThermoModel for ConstantProperties {
        type Fluid = Air;
    }

    impl HasDynamicViscosity for ConstantProperties {
        fn dynamic_viscosity(&self, _state: &State<Air>) -> DynamicViscosity {
            self.mu
        }
    }

    impl HasThermalConductivity for ConstantProperties {
        fn thermal_conductivity(&self, _state: &State<Air>) -> ThermalConductivity {
            self.k
        }
    }

    fn constant_properties() -> ConstantProperties {
        ConstantProperties {
            mu: DynamicViscosity::new::<pascal_second>(1.8e-5),
            k: ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
        }
    }

    #[test]
    fn model_call_matches_evaluate() {
        let model = AeroHeating::new(&HeatingParameters::default()).unwrap();
        let condition = FlightCondition::default();

        let called = model.call(&condition).unwrap();
        assert_eq!(called, model.evaluate(&condition));
        assert_relative_eq!(
            called.heat_flux.get::<watt_per_square_meter>(),
            -17_332.873_188_668_42,
            max_relative = 1e-12
        );
    }

    #[test]
    fn config_is_validated() {
        let build = |config: HeatingConfig| -> Result<AeroHeating, ParametersError> {
            config.try_into()
        };

        let config = HeatingConfig {
            scale_height: 0.0,
            ..HeatingConfig::default()
        };
        assert!(matches!(build(config), Err(ParametersError::Atmosphere(_))));

        let config = HeatingConfig {
            sutherland_constant: f64::NAN,
            ..HeatingConfig::default()
        };
        assert!(matches!(build(config), Err(ParametersError::Viscosity(_))));

        assert!(build(HeatingConfig::default()).is_ok());
    }

    #[test]
    fn accepts_substitute_property_models() {
        let properties = constant_properties();
        let mu = properties.mu;
        let model = AeroHeating::from_models(
            ExponentialAtmosphere::default(),
            properties,
            constant_properties(),
            LaminarFlatPlate::default(),
        );

        let results = model.evaluate(&FlightCondition::default());
        assert_eq!(results.viscosity, mu);
        assert_relative_eq!(
            results.reynolds.get::<ratio>(),
            1.129_746_419_731_289_4 * 327.171_259_826_775_16 * 0.1525 / 1.8e-5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn velocity_search_through_the_model() {
        let model = AeroHeating::new(&HeatingParameters::default()).unwrap();
        let target = HeatFluxDensity::new::<watt_per_square_meter>(17_332.873_188_668_42);

        let results = model
            .velocity_for_heat_flux(
                &FlightCondition::default(),
                NonNegative::new(target).unwrap(),
                [
                    Velocity::new::<meter_per_second>(0.0),
                    Velocity::new::<meter_per_second>(1_000.0),
                ],
                GivenFluxConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(
            results.condition.velocity.get::<meter_per_second>(),
            327.171_259_826_775_16,
            max_relative = 1e-8
        );
    }
}
