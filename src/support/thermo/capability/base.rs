/// A property model for a single fluid.
pub trait ThermoModel {
    /// The fluid this model describes.
    type Fluid;
}
