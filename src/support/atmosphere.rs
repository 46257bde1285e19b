//! Exponential-density, linear-lapse atmosphere.
//!
//! A two-parameter-per-property approximation of the lower atmosphere:
//!
//! ```text
//! rho(z) = rho_0 * exp(-z / H)
//! T(z)   = T_0 - L * z
//! ```
//!
//! The default scale height `H = 10 075 m` is tuned against sounding-rocket
//! flight data for altitudes up to a few kilometres rather than taken from a
//! standard atmosphere table; it slightly overestimates density (and hence
//! heating) there. Both formulas accept any altitude, including negative
//! values, and produce a defined but physically meaningless result outside
//! the intended envelope.

use thiserror::Error;
use uom::si::{
    f64::{Length, MassDensity, Ratio, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{State, fluid::Air},
    units::{TemperatureLapseRate, kelvin_per_meter},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AtmosphereParametersError {
    #[error("invalid sea-level density: {rho_0:?}")]
    SeaLevelDensity { rho_0: MassDensity },
    #[error("invalid scale height: {scale_height:?}")]
    ScaleHeight { scale_height: Length },
    #[error("invalid sea-level temperature: {t_0:?}")]
    SeaLevelTemperature { t_0: ThermodynamicTemperature },
    #[error("invalid lapse rate: {lapse_rate:?}")]
    LapseRate { lapse_rate: TemperatureLapseRate },
}

/// Constants for the [`ExponentialAtmosphere`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereParameters {
    pub sea_level_density: MassDensity,
    pub scale_height: Length,
    pub sea_level_temperature: ThermodynamicTemperature,
    pub lapse_rate: TemperatureLapseRate,
}

impl Default for AtmosphereParameters {
    fn default() -> Self {
        Self {
            sea_level_density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            scale_height: Length::new::<meter>(10_075.0),
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
            lapse_rate: kelvin_per_meter(0.0065),
        }
    }
}

/// Air density and temperature as functions of altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialAtmosphere {
    rho_0: MassDensity,
    scale_height: Length,
    t_0: ThermodynamicTemperature,
    lapse_rate: TemperatureLapseRate,
}

impl ExponentialAtmosphere {
    /// Creates an atmosphere from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereParametersError`] if any constant is not strictly positive.
    pub fn new(parameters: AtmosphereParameters) -> Result<Self, AtmosphereParametersError> {
        let rho_0 = parameters.sea_level_density;
        if StrictlyPositive::check(&rho_0.get::<kilogram_per_cubic_meter>()).is_err() {
            return Err(AtmosphereParametersError::SeaLevelDensity { rho_0 });
        }

        let scale_height = parameters.scale_height;
        if StrictlyPositive::check(&scale_height.get::<meter>()).is_err() {
            return Err(AtmosphereParametersError::ScaleHeight { scale_height });
        }

        let t_0 = parameters.sea_level_temperature;
        if StrictlyPositive::check(&t_0.get::<kelvin>()).is_err() {
            return Err(AtmosphereParametersError::SeaLevelTemperature { t_0 });
        }

        let lapse_rate = parameters.lapse_rate;
        if StrictlyPositive::check(&lapse_rate.value).is_err() {
            return Err(AtmosphereParametersError::LapseRate { lapse_rate });
        }

        Ok(Self {
            rho_0,
            scale_height,
            t_0,
            lapse_rate,
        })
    }

    /// Returns the air density at `altitude`.
    #[must_use]
    pub fn density(&self, altitude: Length) -> MassDensity {
        let z: Ratio = altitude / self.scale_height;
        self.rho_0 * (-z.get::<ratio>()).exp()
    }

    /// Returns the air temperature at `altitude`.
    #[must_use]
    pub fn temperature(&self, altitude: Length) -> ThermodynamicTemperature {
        let drop: TemperatureInterval = self.lapse_rate * altitude;
        self.t_0 + -drop
    }

    /// Returns the air state (temperature and density) at `altitude`.
    #[must_use]
    pub fn state(&self, altitude: Length) -> State<Air> {
        State::new(self.temperature(altitude), self.density(altitude), Air)
    }
}

impl Default for ExponentialAtmosphere {
    fn default() -> Self {
        let AtmosphereParameters {
            sea_level_density,
            scale_height,
            sea_level_temperature,
            lapse_rate,
        } = AtmosphereParameters::default();

        Self {
            rho_0: sea_level_density,
            scale_height,
            t_0: sea_level_temperature,
            lapse_rate,
        }
    }
}
