//! Airframe geometry and per-segment heating summaries.
//!
//! An [`Airframe`] is an ordered list of named [`Segment`]s from the nose tip
//! aft. Body segments (nose cone, tubes, transitions) stack end to end; fin
//! sets mount flush with the aft end of the body stack at the point they are
//! added. Stations are measured aft from the nose tip.
//!
//! A [`ThermalMap`] pairs each segment with a surface heat flux, normalizes
//! the flux magnitudes for display, and integrates heat rate over the wetted
//! area.

mod segment;
mod thermal_map;

pub use segment::{Segment, SegmentError, SegmentShape};
pub use thermal_map::{SegmentHeating, ThermalMap, ThermalMapError};

use thiserror::Error;
use uom::{
    ConstZero,
    si::f64::{Area, Length},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AirframeError {
    #[error("duplicate segment name `{name}`")]
    DuplicateSegment { name: String },
    #[error("fin set `{name}` needs a body segment to mount on")]
    NothingToMountOn { name: String },
}

/// Axial placement of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Distance from the nose tip to the segment's forward end.
    pub forward: Length,
    /// Distance from the nose tip to the segment's aft end.
    pub aft: Length,
}

/// A stack of named airframe segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Airframe {
    segments: Vec<(Segment, Station)>,
    body_length: Length,
}

impl Airframe {
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            body_length: Length::ZERO,
        }
    }

    /// Appends a segment aft of the current body stack.
    ///
    /// # Errors
    ///
    /// Returns [`AirframeError`] if the name is already used or a fin set is
    /// added before any body segment.
    pub fn push(&mut self, segment: Segment) -> Result<(), AirframeError> {
        if self.segment(segment.name()).is_some() {
            return Err(AirframeError::DuplicateSegment {
                name: segment.name().to_owned(),
            });
        }

        let shape = segment.shape();
        let station = if shape.is_stacked() {
            let forward = self.body_length;
            self.body_length += shape.length();
            Station {
                forward,
                aft: self.body_length,
            }
        } else {
            if self.body_length == Length::ZERO {
                return Err(AirframeError::NothingToMountOn {
                    name: segment.name().to_owned(),
                });
            }
            Station {
                forward: self.body_length - shape.length(),
                aft: self.body_length,
            }
        };

        self.segments.push((segment, station));
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// See [`push`](Self::push).
    pub fn with(mut self, segment: Segment) -> Result<Self, AirframeError> {
        self.push(segment)?;
        Ok(self)
    }

    /// Segments in the order they were added, with their stations.
    pub fn segments(&self) -> impl Iterator<Item = (&Segment, Station)> {
        self.segments
            .iter()
            .map(|(segment, station)| (segment, *station))
    }

    /// Looks up a segment by name.
    #[must_use]
    pub fn segment(&self, name: &str) -> Option<(&Segment, Station)> {
        self.segments()
            .find(|(segment, _)| segment.name() == name)
    }

    /// Overall length from the nose tip to the aft end of the body.
    #[must_use]
    pub fn length(&self) -> Length {
        self.body_length
    }

    /// Total wetted area of all segments.
    #[must_use]
    pub fn wetted_area(&self) -> Area {
        self.segments()
            .map(|(segment, _)| segment.shape().wetted_area())
            .fold(Area::ZERO, |total, area| total + area)
    }
}

impl Default for Airframe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, length::meter};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn small_rocket() -> Airframe {
        Airframe::new()
            .with(Segment::nose_cone("Nose", m(0.1), 3.0).unwrap())
            .and_then(|a| a.with(Segment::tube("Body", m(1.0), m(0.1)).unwrap()))
            .and_then(|a| a.with(Segment::transition("BoatTail", m(0.05), m(0.1), m(0.08)).unwrap()))
            .and_then(|a| a.with(Segment::fin_set("Fins", 3, m(0.08), m(0.15), m(0.003)).unwrap()))
            .expect("valid layout")
    }

    #[test]
    fn body_segments_stack_from_the_nose() {
        let airframe = small_rocket();

        let (_, nose) = airframe.segment("Nose").unwrap();
        let (_, body) = airframe.segment("Body").unwrap();
        let (_, tail) = airframe.segment("BoatTail").unwrap();

        assert_relative_eq!(nose.forward.get::<meter>(), 0.0);
        assert_relative_eq!(nose.aft.get::<meter>(), 0.3, max_relative = 1e-12);
        assert_eq!(body.forward, nose.aft);
        assert_eq!(tail.forward, body.aft);
        assert_relative_eq!(airframe.length().get::<meter>(), 1.35, max_relative = 1e-12);
    }

    #[test]
    fn fins_mount_at_the_aft_end() {
        let airframe = small_rocket();
        let (_, fins) = airframe.segment("Fins").unwrap();

        assert_eq!(fins.aft, airframe.length());
        assert_relative_eq!(
            (fins.aft - fins.forward).get::<meter>(),
            0.15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn total_area_sums_segments() {
        let airframe = small_rocket();
        let sum: f64 = airframe
            .segments()
            .map(|(segment, _)| segment.shape().wetted_area().get::<square_meter>())
            .sum();
        assert_relative_eq!(
            airframe.wetted_area().get::<square_meter>(),
            sum,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_duplicates_and_floating_fins() {
        let mut airframe = small_rocket();
        assert_eq!(
            airframe.push(Segment::tube("Body", m(0.2), m(0.1)).unwrap()),
            Err(AirframeError::DuplicateSegment {
                name: "Body".to_owned()
            })
        );

        let mut empty = Airframe::new();
        assert!(matches!(
            empty.push(Segment::fin_set("Fins", 4, m(0.1), m(0.1), m(0.002)).unwrap()),
            Err(AirframeError::NothingToMountOn { .. })
        ));
    }
}
