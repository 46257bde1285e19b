use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Length, TemperatureInterval},
        length::meter,
        temperature_interval::kelvin,
    },
    typenum::{N1, P1, Z0},
};

/// Temperature lapse rate, K/m in SI.
pub type TemperatureLapseRate = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a lapse rate from a value in kelvin per meter.
#[must_use]
pub fn kelvin_per_meter(value: f64) -> TemperatureLapseRate {
    TemperatureInterval::new::<kelvin>(value) / Length::new::<meter>(1.0)
}
