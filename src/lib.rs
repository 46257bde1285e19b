//! # Aeroheat Models
//!
//! Aerodynamic heating estimates for sounding rockets, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given an altitude, a flight velocity, a characteristic diameter and a
//! material temperature limit, the heating model walks a chain of simple
//! correlations:
//!
//! 1. exponential atmosphere (density) with a linear lapse rate (temperature),
//! 2. Sutherland viscosity and power-law thermal conductivity of air,
//! 3. Reynolds number and the laminar flat-plate heat-transfer coefficient,
//! 4. surface heat flux `q = h * (T_air - T_limit)`.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Code that only one model needs stays in that model's internal `core`
//! module until a second user shows up.

pub mod models;
pub mod support;
