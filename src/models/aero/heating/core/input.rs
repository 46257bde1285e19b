use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::meter,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

/// Flight condition at which surface heating is evaluated.
///
/// No range checks are made. Values outside the lower atmosphere, or a zero
/// diameter, produce non-physical or non-finite results rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    /// Geometric altitude above sea level.
    pub altitude: Length,

    /// Free-stream flight velocity.
    pub velocity: Velocity,

    /// Characteristic diameter of the airframe.
    pub diameter: Length,

    /// Temperature limit of the structural material.
    ///
    /// The heat flux is driven by `T_air - material_threshold`, so it is
    /// negative while the air is colder than this limit.
    pub material_threshold: ThermodynamicTemperature,
}

impl FlightCondition {
    /// Returns this condition flown at a different velocity.
    #[must_use]
    pub fn with_velocity(self, velocity: Velocity) -> Self {
        Self { velocity, ..self }
    }
}

impl Default for FlightCondition {
    /// The peak-velocity point of a recorded flight of a 6 in airframe, with
    /// the 198.9 °C limit of the airframe's epoxy.
    fn default() -> Self {
        Self {
            altitude: Length::new::<meter>(815.547_511_012_711_2),
            velocity: Velocity::new::<meter_per_second>(327.171_259_826_775_16),
            diameter: Length::new::<meter>(0.1525),
            material_threshold: ThermodynamicTemperature::new::<degree_celsius>(198.9),
        }
    }
}
