use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::constraint::{Constraint, ConstraintError, StrictlyPositive};

/// Errors from building an airframe [`Segment`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("segment `{name}`: invalid {dimension}")]
    Dimension {
        name: String,
        dimension: &'static str,
        #[source]
        source: ConstraintError,
    },
    #[error("segment `{name}`: a fin set needs at least one fin")]
    NoFins { name: String },
}

/// Outer shape of an airframe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentShape {
    /// Tangent-ogive nose cone; its length is `base_diameter * aspect_ratio`.
    NoseCone {
        base_diameter: Length,
        aspect_ratio: f64,
    },
    /// Constant-diameter body tube.
    Tube { length: Length, diameter: Length },
    /// Conical shoulder or boat tail between two diameters.
    Transition {
        length: Length,
        start_diameter: Length,
        end_diameter: Length,
    },
    /// Identical fins spaced evenly around the body.
    ///
    /// Each fin's planform runs along the root chord, rising to full span at
    /// 20% chord and dropping back to the body at the trailing edge, with a
    /// straight tip from 20% to 80% chord.
    FinSet {
        count: u32,
        span: Length,
        root_chord: Length,
        thickness: Length,
    },
}

impl SegmentShape {
    /// Axial extent of the segment.
    #[must_use]
    pub fn length(&self) -> Length {
        match *self {
            Self::NoseCone {
                base_diameter,
                aspect_ratio,
            } => base_diameter * aspect_ratio,
            Self::Tube { length, .. } | Self::Transition { length, .. } => length,
            Self::FinSet { root_chord, .. } => root_chord,
        }
    }

    /// Whether the segment occupies its own slot in the body stack.
    ///
    /// Fin sets mount on the body instead of extending it.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        !matches!(self, Self::FinSet { .. })
    }

    /// Length used as the convective length scale for this segment.
    ///
    /// Body segments use their (mean) diameter; fins use the root chord.
    #[must_use]
    pub fn characteristic_length(&self) -> Length {
        match *self {
            Self::NoseCone { base_diameter, .. } => base_diameter,
            Self::Tube { diameter, .. } => diameter,
            Self::Transition {
                start_diameter,
                end_diameter,
                ..
            } => (start_diameter + end_diameter) * 0.5,
            Self::FinSet { root_chord, .. } => root_chord,
        }
    }

    /// Surface area exposed to the airflow.
    #[must_use]
    pub fn wetted_area(&self) -> Area {
        let square_meters = match *self {
            Self::NoseCone {
                base_diameter,
                aspect_ratio,
            } => {
                let r = base_diameter.get::<meter>() / 2.0;
                let l = base_diameter.get::<meter>() * aspect_ratio;
                tangent_ogive_area(r, l)
            }
            Self::Tube { length, diameter } => PI * diameter.get::<meter>() * length.get::<meter>(),
            Self::Transition {
                length,
                start_diameter,
                end_diameter,
            } => {
                let r1 = start_diameter.get::<meter>() / 2.0;
                let r2 = end_diameter.get::<meter>() / 2.0;
                PI * (r1 + r2) * (r1 - r2).hypot(length.get::<meter>())
            }
            Self::FinSet {
                count,
                span,
                root_chord,
                thickness,
            } => f64::from(count) * fin_area(root_chord, span, thickness),
        };
        Area::new::<square_meter>(square_meters)
    }
}

/// Lateral area of a tangent ogive with base radius `r` and length `l`.
///
/// The profile is an arc of radius `rho = (l² + r²) / 2r` meeting the body
/// tangentially; integrating `2π·y·ds` along the arc gives
/// `2π·rho·(l - (rho - r)·asin(l / rho))`.
fn tangent_ogive_area(r: f64, l: f64) -> f64 {
    let rho = (l * l + r * r) / (2.0 * r);
    2.0 * PI * rho * (l - (rho - r) * (l / rho).asin())
}

/// Wetted area of one fin: both planform faces plus the exposed edges.
fn fin_area(root_chord: Length, span: Length, thickness: Length) -> f64 {
    let c = root_chord.get::<meter>();
    let s = span.get::<meter>();
    let t = thickness.get::<meter>();

    let planform = 0.8 * c * s;
    let edges = 2.0 * (0.2 * c).hypot(s) + 0.6 * c;

    2.0 * planform + t * edges
}

/// A named piece of the airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    name: String,
    shape: SegmentShape,
}

impl Segment {
    /// Creates a tangent-ogive nose cone.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError`] if the diameter or aspect ratio is not strictly positive.
    pub fn nose_cone(
        name: impl Into<String>,
        base_diameter: Length,
        aspect_ratio: f64,
    ) -> Result<Self, SegmentError> {
        let name = name.into();
        positive(&name, "base diameter", base_diameter)?;
        check(&name, "aspect ratio", StrictlyPositive::check(&aspect_ratio))?;
        Ok(Self {
            name,
            shape: SegmentShape::NoseCone {
                base_diameter,
                aspect_ratio,
            },
        })
    }

    /// Creates a body tube.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError`] if a dimension is not strictly positive.
    pub fn tube(
        name: impl Into<String>,
        length: Length,
        diameter: Length,
    ) -> Result<Self, SegmentError> {
        let name = name.into();
        positive(&name, "length", length)?;
        positive(&name, "diameter", diameter)?;
        Ok(Self {
            name,
            shape: SegmentShape::Tube { length, diameter },
        })
    }

    /// Creates a conical transition.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError`] if a dimension is not strictly positive.
    pub fn transition(
        name: impl Into<String>,
        length: Length,
        start_diameter: Length,
        end_diameter: Length,
    ) -> Result<Self, SegmentError> {
        let name = name.into();
        positive(&name, "length", length)?;
        positive(&name, "start diameter", start_diameter)?;
        positive(&name, "end diameter", end_diameter)?;
        Ok(Self {
            name,
            shape: SegmentShape::Transition {
                length,
                start_diameter,
                end_diameter,
            },
        })
    }

    /// Creates a fin set.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError`] if `count` is zero or a dimension is not strictly positive.
    pub fn fin_set(
        name: impl Into<String>,
        count: u32,
        span: Length,
        root_chord: Length,
        thickness: Length,
    ) -> Result<Self, SegmentError> {
        let name = name.into();
        if count == 0 {
            return Err(SegmentError::NoFins { name });
        }
        positive(&name, "span", span)?;
        positive(&name, "root chord", root_chord)?;
        positive(&name, "thickness", thickness)?;
        Ok(Self {
            name,
            shape: SegmentShape::FinSet {
                count,
                span,
                root_chord,
                thickness,
            },
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn shape(&self) -> &SegmentShape {
        &self.shape
    }
}

fn positive(name: &str, dimension: &'static str, value: Length) -> Result<(), SegmentError> {
    check(name, dimension, StrictlyPositive::check(&value.get::<meter>()))
}

fn check(
    name: &str,
    dimension: &'static str,
    result: Result<(), ConstraintError>,
) -> Result<(), SegmentError> {
    result.map_err(|source| SegmentError::Dimension {
        name: name.to_owned(),
        dimension,
        source,
    })
}
