use std::fmt;

use serde::Serialize;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, HeatFluxDensity, HeatTransfer, Ratio, ThermalConductivity},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::thermo::{State, fluid::Air};

use super::FlightCondition;

/// Every intermediate of one heating evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingResults {
    /// The condition that was evaluated.
    pub condition: FlightCondition,

    /// Free-stream air temperature and density at the condition's altitude.
    pub air: State<Air>,

    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,

    /// Reynolds number based on the characteristic diameter.
    pub reynolds: Ratio,

    pub heat_transfer_coefficient: HeatTransfer,

    /// Surface heat flux, positive into the airframe.
    pub heat_flux: HeatFluxDensity,
}

/// Fixed-precision text report.
impl fmt::Display for HeatingResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "At {:.1} m altitude and {:.1} m/s:",
            self.condition.altitude.get::<meter>(),
            self.condition.velocity.get::<meter_per_second>(),
        )?;
        writeln!(
            f,
            "  Temperature          = {:.2} K",
            self.air.temperature.get::<kelvin>()
        )?;
        writeln!(
            f,
            "  Air density          = {:.4} kg/m³",
            self.air.density.get::<kilogram_per_cubic_meter>()
        )?;
        writeln!(
            f,
            "  Dynamic viscosity    = {:.2e} kg/(m·s)",
            self.viscosity.get::<pascal_second>()
        )?;
        writeln!(
            f,
            "  Reynolds number      = {:.2}",
            self.reynolds.get::<ratio>()
        )?;
        writeln!(
            f,
            "  Thermal conductivity = {:.4} W/(m·K)",
            self.conductivity.get::<watt_per_meter_kelvin>()
        )?;
        writeln!(
            f,
            "  Heat transfer coeff. = {:.2} W/(m²·K)",
            self.heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>()
        )?;
        write!(
            f,
            "  Heat flux            = {:.2} W/m²",
            self.heat_flux.get::<watt_per_square_meter>()
        )
    }
}

/// [`HeatingResults`] as plain SI values, for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatingSummary {
    /// m
    pub altitude: f64,
    /// m/s
    pub velocity: f64,
    /// m
    pub diameter: f64,
    /// K
    pub material_threshold: f64,
    /// K
    pub air_temperature: f64,
    /// kg/m³
    pub air_density: f64,
    /// Pa·s
    pub viscosity: f64,
    /// W/(m·K)
    pub conductivity: f64,
    pub reynolds: f64,
    /// W/(m²·K)
    pub heat_transfer_coefficient: f64,
    /// W/m²
    pub heat_flux: f64,
}

impl From<&HeatingResults> for HeatingSummary {
    fn from(results: &HeatingResults) -> Self {
        let condition = &results.condition;
        Self {
            altitude: condition.altitude.get::<meter>(),
            velocity: condition.velocity.get::<meter_per_second>(),
            diameter: condition.diameter.get::<meter>(),
            material_threshold: condition.material_threshold.get::<kelvin>(),
            air_temperature: results.air.temperature.get::<kelvin>(),
            air_density: results.air.density.get::<kilogram_per_cubic_meter>(),
            viscosity: results.viscosity.get::<pascal_second>(),
            conductivity: results.conductivity.get::<watt_per_meter_kelvin>(),
            reynolds: results.reynolds.get::<ratio>(),
            heat_transfer_coefficient: results
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            heat_flux: results.heat_flux.get::<watt_per_square_meter>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::aero::heating::core::test_support::chain;

    #[test]
    fn report_at_recorded_condition() {
        let results = chain().evaluate(&FlightCondition::default());

        assert_eq!(
            results.to_string(),
            "At 815.5 m altitude and 327.2 m/s:\n\
             \x20 Temperature          = 282.85 K\n\
             \x20 Air density          = 1.1297 kg/m³\n\
             \x20 Dynamic viscosity    = 1.76e-5 kg/(m·s)\n\
             \x20 Reynolds number      = 3194620.49\n\
             \x20 Thermal conductivity = 0.0264 W/(m·K)\n\
             \x20 Heat transfer coeff. = 91.61 W/(m²·K)\n\
             \x20 Heat flux            = -17332.87 W/m²"
        );
    }

    #[test]
    fn summary_is_in_si_units() {
        let results = chain().evaluate(&FlightCondition::default());
        let summary = HeatingSummary::from(&results);

        assert_relative_eq!(summary.material_threshold, 472.05, max_relative = 1e-12);
        assert_relative_eq!(summary.air_temperature, 282.848_941_178_417_36, max_relative = 1e-12);
        assert_relative_eq!(summary.heat_flux, -17_332.873_188_668_42, max_relative = 1e-12);
    }
}
