//! Aerodynamic models.

pub mod heating;
