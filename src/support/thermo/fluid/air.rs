use uom::si::{
    f64::{DynamicViscosity, TemperatureInterval, ThermalConductivity, ThermodynamicTemperature},
    dynamic_viscosity::pascal_second,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::{
    power_law::{PowerLawConductivityFluid, PowerLawParameters},
    sutherland::{SutherlandFluid, SutherlandParameters},
};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl SutherlandFluid for Air {
    fn parameters() -> SutherlandParameters {
        SutherlandParameters {
            reference_viscosity: DynamicViscosity::new::<pascal_second>(1.716e-5),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(273.0),
            sutherland_constant: TemperatureInterval::new::<delta_kelvin>(111.0),
        }
    }
}

impl PowerLawConductivityFluid for Air {
    fn parameters() -> PowerLawParameters {
        PowerLawParameters {
            reference_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0257),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(273.15),
            exponent: 0.76,
        }
    }
}
