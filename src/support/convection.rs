//! Forced-convection correlations.
//!
//! The heat-transfer coefficient comes from the laminar flat-plate
//! Nusselt-number relation, `Nu = 0.332 Re^(1/2) Pr^(1/3)`, with the
//! characteristic length standing in for both the plate length and the
//! airframe diameter. The correlation is applied across the whole flight
//! regime without a laminar/turbulent switch.

use thiserror::Error;
use uom::si::{
    f64::{DynamicViscosity, HeatTransfer, Length, MassDensity, Ratio, ThermalConductivity, Velocity},
    ratio::ratio,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

/// Leading coefficient of the laminar flat-plate correlation.
const FLAT_PLATE_COEFFICIENT: f64 = 0.332;

/// Returns the Reynolds number `rho * V * L / mu`.
///
/// A zero viscosity yields an infinite or undefined result.
#[must_use]
pub fn reynolds_number(
    density: MassDensity,
    velocity: Velocity,
    length: Length,
    viscosity: DynamicViscosity,
) -> Ratio {
    density * velocity * length / viscosity
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("invalid Prandtl number: {prandtl}")]
pub struct PrandtlNumberError {
    pub prandtl: f64,
}

/// Laminar flat-plate convection for a fluid with a fixed Prandtl number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaminarFlatPlate {
    prandtl: f64,
}

impl LaminarFlatPlate {
    /// Prandtl number of air, nearly constant from sea level to 80 km.
    pub const AIR_PRANDTL: f64 = 0.71;

    /// Creates a correlation for the given Prandtl number.
    ///
    /// # Errors
    ///
    /// Returns [`PrandtlNumberError`] if `prandtl` is not strictly positive.
    pub fn new(prandtl: f64) -> Result<Self, PrandtlNumberError> {
        if StrictlyPositive::check(&prandtl).is_err() {
            return Err(PrandtlNumberError { prandtl });
        }
        Ok(Self { prandtl })
    }

    /// Returns the surface heat-transfer coefficient.
    ///
    /// `h = 0.332 * (k / L) * Re^0.5 * Pr^(1/3)`, increasing in `Re` for fixed
    /// `k` and `L`. A negative Reynolds number yields `NaN`.
    #[must_use]
    pub fn heat_transfer_coefficient(
        &self,
        conductivity: ThermalConductivity,
        length: Length,
        reynolds: Ratio,
    ) -> HeatTransfer {
        let re = reynolds.get::<ratio>();
        conductivity / length
            * FLAT_PLATE_COEFFICIENT
            * re.powf(0.5)
            * self.prandtl.powf(1.0 / 3.0)
    }
}

impl Default for LaminarFlatPlate {
    fn default() -> Self {
        Self {
            prandtl: Self::AIR_PRANDTL,
        }
    }
}
