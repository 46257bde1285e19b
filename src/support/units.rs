//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity. This module
//! adds the few pieces [`uom`] does not provide out of the box.
//!
//! ## Temperature differences
//!
//! Subtracting two absolute temperatures is not allowed by [`uom`], yet the
//! surface heat flux is driven by exactly that difference. The
//! [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method returning a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};
//! use aeroheat_models::support::units::TemperatureDifference;
//!
//! let air = ThermodynamicTemperature::new::<kelvin>(282.85);
//! let epoxy_limit = ThermodynamicTemperature::new::<degree_celsius>(198.9);
//! let delta_t = air.minus(epoxy_limit);
//! // delta_t is a TemperatureInterval, negative here
//! ```
//!
//! ## Lapse rate
//!
//! [`TemperatureLapseRate`] is a temperature interval per unit length (K/m in SI).

mod quantities;
mod temperature_difference;

pub use quantities::{TemperatureLapseRate, kelvin_per_meter};
pub use temperature_difference::TemperatureDifference;
