//! Fluid states and transport-property models.
//!
//! A [`State`] pairs a temperature and density with a fluid identifier.
//! Property models implement the [`capability`] traits they support, so code
//! that needs a viscosity asks for [`HasDynamicViscosity`](capability::HasDynamicViscosity)
//! rather than a concrete correlation.

mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use state::State;
