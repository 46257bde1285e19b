use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, Length, MassDensity, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    atmosphere::{AtmosphereParameters, AtmosphereParametersError},
    convection::{LaminarFlatPlate, PrandtlNumberError},
    thermo::{
        fluid::Air,
        model::{
            power_law::{PowerLawConductivityFluid, PowerLawParameters, PowerLawParametersError},
            sutherland::{SutherlandFluid, SutherlandParameters, SutherlandParametersError},
        },
    },
    units::{TemperatureLapseRate, kelvin_per_meter},
};

/// Errors from validating [`HeatingParameters`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParametersError {
    #[error("invalid atmosphere parameters")]
    Atmosphere(#[from] AtmosphereParametersError),

    #[error("invalid viscosity parameters")]
    Viscosity(#[from] SutherlandParametersError),

    #[error("invalid conductivity parameters")]
    Conductivity(#[from] PowerLawParametersError),

    #[error("invalid convection parameters")]
    Convection(#[from] PrandtlNumberError),
}

/// Physical constants of the heating chain.
///
/// The defaults are calibrated for sounding-rocket flights in the lower few
/// kilometres of the atmosphere. Every value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingParameters {
    pub sea_level_density: MassDensity,
    pub scale_height: Length,
    pub sea_level_temperature: ThermodynamicTemperature,
    pub lapse_rate: TemperatureLapseRate,

    /// Sutherland reference viscosity.
    pub reference_viscosity: DynamicViscosity,
    /// Sutherland reference temperature.
    pub viscosity_reference_temperature: ThermodynamicTemperature,
    pub sutherland_constant: TemperatureInterval,

    /// Power-law reference conductivity.
    pub reference_conductivity: ThermalConductivity,
    /// Power-law reference temperature.
    pub conductivity_reference_temperature: ThermodynamicTemperature,
    pub conductivity_exponent: f64,

    pub prandtl_number: f64,
}

impl HeatingParameters {
    pub(super) fn atmosphere(&self) -> AtmosphereParameters {
        AtmosphereParameters {
            sea_level_density: self.sea_level_density,
            scale_height: self.scale_height,
            sea_level_temperature: self.sea_level_temperature,
            lapse_rate: self.lapse_rate,
        }
    }

    pub(super) fn viscosity(&self) -> SutherlandParameters {
        SutherlandParameters {
            reference_viscosity: self.reference_viscosity,
            reference_temperature: self.viscosity_reference_temperature,
            sutherland_constant: self.sutherland_constant,
        }
    }

    pub(super) fn conductivity(&self) -> PowerLawParameters {
        PowerLawParameters {
            reference_conductivity: self.reference_conductivity,
            reference_temperature: self.conductivity_reference_temperature,
            exponent: self.conductivity_exponent,
        }
    }
}

impl Default for HeatingParameters {
    fn default() -> Self {
        let atmosphere = AtmosphereParameters::default();
        let viscosity = <Air as SutherlandFluid>::parameters();
        let conductivity = <Air as PowerLawConductivityFluid>::parameters();

        Self {
            sea_level_density: atmosphere.sea_level_density,
            scale_height: atmosphere.scale_height,
            sea_level_temperature: atmosphere.sea_level_temperature,
            lapse_rate: atmosphere.lapse_rate,
            reference_viscosity: viscosity.reference_viscosity,
            viscosity_reference_temperature: viscosity.reference_temperature,
            sutherland_constant: viscosity.sutherland_constant,
            reference_conductivity: conductivity.reference_conductivity,
            conductivity_reference_temperature: conductivity.reference_temperature,
            conductivity_exponent: conductivity.exponent,
            prandtl_number: LaminarFlatPlate::AIR_PRANDTL,
        }
    }
}

/// Serializable form of [`HeatingParameters`] with plain SI values.
///
/// Missing fields take their default values, so a file only needs the
/// constants it overrides:
///
/// ```
/// use aeroheat_models::models::aero::heating::HeatingConfig;
///
/// let config = HeatingConfig::from_json(r#"{ "scale_height": 8500.0 }"#).unwrap();
/// assert_eq!(config.scale_height, 8500.0);
/// assert_eq!(config.prandtl_number, 0.71);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatingConfig {
    /// kg/m³
    pub sea_level_density: f64,
    /// m
    pub scale_height: f64,
    /// K
    pub sea_level_temperature: f64,
    /// K/m
    pub lapse_rate: f64,
    /// Pa·s
    pub reference_viscosity: f64,
    /// K
    pub viscosity_reference_temperature: f64,
    /// K
    pub sutherland_constant: f64,
    /// W/(m·K)
    pub reference_conductivity: f64,
    /// K
    pub conductivity_reference_temperature: f64,
    pub conductivity_exponent: f64,
    pub prandtl_number: f64,
}

impl HeatingConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] on malformed JSON, unknown fields, or
    /// non-numeric values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for HeatingConfig {
    fn default() -> Self {
        HeatingParameters::default().into()
    }
}

impl From<HeatingParameters> for HeatingConfig {
    fn from(parameters: HeatingParameters) -> Self {
        Self {
            sea_level_density: parameters
                .sea_level_density
                .get::<kilogram_per_cubic_meter>(),
            scale_height: parameters.scale_height.get::<meter>(),
            sea_level_temperature: parameters.sea_level_temperature.get::<kelvin>(),
            lapse_rate: parameters.lapse_rate.value,
            reference_viscosity: parameters.reference_viscosity.get::<pascal_second>(),
            viscosity_reference_temperature: parameters
                .viscosity_reference_temperature
                .get::<kelvin>(),
            sutherland_constant: parameters.sutherland_constant.get::<delta_kelvin>(),
            reference_conductivity: parameters
                .reference_conductivity
                .get::<watt_per_meter_kelvin>(),
            conductivity_reference_temperature: parameters
                .conductivity_reference_temperature
                .get::<kelvin>(),
            conductivity_exponent: parameters.conductivity_exponent,
            prandtl_number: parameters.prandtl_number,
        }
    }
}

impl From<HeatingConfig> for HeatingParameters {
    fn from(config: HeatingConfig) -> Self {
        Self {
            sea_level_density: MassDensity::new::<kilogram_per_cubic_meter>(
                config.sea_level_density,
            ),
            scale_height: Length::new::<meter>(config.scale_height),
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(
                config.sea_level_temperature,
            ),
            lapse_rate: kelvin_per_meter(config.lapse_rate),
            reference_viscosity: DynamicViscosity::new::<pascal_second>(
                config.reference_viscosity,
            ),
            viscosity_reference_temperature: ThermodynamicTemperature::new::<kelvin>(
                config.viscosity_reference_temperature,
            ),
            sutherland_constant: TemperatureInterval::new::<delta_kelvin>(
                config.sutherland_constant,
            ),
            reference_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                config.reference_conductivity,
            ),
            conductivity_reference_temperature: ThermodynamicTemperature::new::<kelvin>(
                config.conductivity_reference_temperature,
            ),
            conductivity_exponent: config.conductivity_exponent,
            prandtl_number: config.prandtl_number,
        }
    }
}
