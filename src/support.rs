//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod airframe;
pub mod atmosphere;
pub mod constraint;
pub mod convection;
pub mod scoring;
pub mod thermo;
pub mod units;
