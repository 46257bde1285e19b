//! Transport-property models.

pub mod power_law;
pub mod sutherland;

pub use power_law::PowerLawConductivity;
pub use sutherland::Sutherland;
