use std::collections::{HashMap, hash_map::Entry};

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatFluxDensity, Power},
        heat_flux_density::watt_per_square_meter,
    },
};

use super::{Airframe, Segment, Station};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThermalMapError {
    #[error("no heat flux given for segment `{name}`")]
    MissingSegment { name: String },
    #[error("heat flux given for unknown segment `{name}`")]
    UnknownSegment { name: String },
    #[error("heat flux given more than once for segment `{name}`")]
    DuplicateSegment { name: String },
}

/// Heating of one airframe segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentHeating {
    pub name: String,
    pub station: Station,
    pub heat_flux: HeatFluxDensity,
    /// Flux magnitude normalized to `[0, 1]` across the map.
    pub intensity: f64,
    pub wetted_area: Area,
    /// Heat flux integrated over the wetted area.
    pub heat_rate: Power,
}

/// Per-segment heat flux over an [`Airframe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalMap {
    segments: Vec<SegmentHeating>,
}

impl ThermalMap {
    /// Builds a map by evaluating `heat_flux` for every segment.
    pub fn new(airframe: &Airframe, mut heat_flux: impl FnMut(&Segment) -> HeatFluxDensity) -> Self {
        let segments = airframe
            .segments()
            .map(|(segment, station)| {
                let heat_flux = heat_flux(segment);
                let wetted_area = segment.shape().wetted_area();
                SegmentHeating {
                    name: segment.name().to_owned(),
                    station,
                    heat_flux,
                    intensity: 0.0,
                    wetted_area,
                    heat_rate: heat_flux * wetted_area,
                }
            })
            .collect();

        let mut map = Self { segments };
        map.normalize();
        map
    }

    /// Builds a map from heat fluxes keyed by segment name.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalMapError`] if a segment has no flux, has more than
    /// one, or a flux names a segment that is not on the airframe.
    pub fn from_fluxes<'a>(
        airframe: &Airframe,
        fluxes: impl IntoIterator<Item = (&'a str, HeatFluxDensity)>,
    ) -> Result<Self, ThermalMapError> {
        let mut by_name = HashMap::new();
        for (name, heat_flux) in fluxes {
            if airframe.segment(name).is_none() {
                return Err(ThermalMapError::UnknownSegment {
                    name: name.to_owned(),
                });
            }
            match by_name.entry(name) {
                Entry::Vacant(entry) => {
                    entry.insert(heat_flux);
                }
                Entry::Occupied(_) => {
                    return Err(ThermalMapError::DuplicateSegment {
                        name: name.to_owned(),
                    });
                }
            }
        }

        if let Some((segment, _)) = airframe
            .segments()
            .find(|(segment, _)| !by_name.contains_key(segment.name()))
        {
            return Err(ThermalMapError::MissingSegment {
                name: segment.name().to_owned(),
            });
        }

        Ok(Self::new(airframe, |segment| by_name[segment.name()]))
    }

    /// Segments in airframe order.
    #[must_use]
    pub fn segments(&self) -> &[SegmentHeating] {
        &self.segments
    }

    /// Sum of the per-segment heat rates.
    #[must_use]
    pub fn total_heat_rate(&self) -> Power {
        self.segments
            .iter()
            .fold(Power::ZERO, |total, segment| total + segment.heat_rate)
    }

    /// The segment with the largest flux magnitude.
    #[must_use]
    pub fn peak(&self) -> Option<&SegmentHeating> {
        self.segments
            .iter()
            .max_by(|a, b| magnitude(a).total_cmp(&magnitude(b)))
    }

    fn normalize(&mut self) {
        let (min, max) = self
            .segments
            .iter()
            .map(magnitude)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), q| {
                (min.min(q), max.max(q))
            });

        let range = max - min;
        for segment in &mut self.segments {
            segment.intensity = if range > 0.0 {
                (magnitude(segment) - min) / range
            } else {
                0.0
            };
        }
    }
}

fn magnitude(segment: &SegmentHeating) -> f64 {
    segment.heat_flux.get::<watt_per_square_meter>().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, f64::Length, length::meter, power::watt};

    fn flux(value: f64) -> HeatFluxDensity {
        HeatFluxDensity::new::<watt_per_square_meter>(value)
    }

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn airframe() -> Airframe {
        let mut airframe = Airframe::new();
        airframe
            .push(Segment::nose_cone("NoseCone", m(0.1524), 2.9856).unwrap())
            .unwrap();
        airframe
            .push(Segment::tube("RecoveryTube", m(0.6096), m(0.1524)).unwrap())
            .unwrap();
        airframe
            .push(Segment::fin_set("Fins", 3, m(0.14), m(0.36), m(0.009906)).unwrap())
            .unwrap();
        airframe
    }

    #[test]
    fn normalizes_flux_magnitudes() {
        let map = ThermalMap::from_fluxes(
            &airframe(),
            [
                ("NoseCone", flux(76_810.0)),
                ("RecoveryTube", flux(50_395.0)),
                ("Fins", flux(32_800.0)),
            ],
        )
        .unwrap();

        let intensities: Vec<f64> = map.segments().iter().map(|s| s.intensity).collect();
        assert_relative_eq!(intensities[0], 1.0);
        assert_relative_eq!(
            intensities[1],
            (50_395.0 - 32_800.0) / (76_810.0 - 32_800.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(intensities[2], 0.0);
        assert_eq!(map.peak().unwrap().name, "NoseCone");
    }

    #[test]
    fn heat_rate_integrates_over_wetted_area() {
        let map = ThermalMap::new(&airframe(), |_| flux(-1_000.0));

        for segment in map.segments() {
            assert_relative_eq!(
                segment.heat_rate.get::<watt>(),
                -1_000.0 * segment.wetted_area.get::<square_meter>(),
                max_relative = 1e-12
            );
            assert_eq!(segment.intensity, 0.0);
        }

        let total: f64 = map.segments().iter().map(|s| s.heat_rate.get::<watt>()).sum();
        assert_relative_eq!(map.total_heat_rate().get::<watt>(), total, max_relative = 1e-12);
    }

    #[test]
    fn rejects_unknown_and_missing_segments() {
        let airframe = airframe();

        assert_eq!(
            ThermalMap::from_fluxes(
                &airframe,
                [("NoseCone", flux(1.0)), ("RecoveryTube", flux(1.0))]
            ),
            Err(ThermalMapError::MissingSegment {
                name: "Fins".to_owned()
            })
        );
        assert_eq!(
            ThermalMap::from_fluxes(
                &airframe,
                [
                    ("NoseCone", flux(1.0)),
                    ("RecoveryTube", flux(1.0)),
                    ("Fins", flux(1.0)),
                    ("PVTube", flux(1.0)),
                ]
            ),
            Err(ThermalMapError::UnknownSegment {
                name: "PVTube".to_owned()
            })
        );
    }

    #[test]
    fn rejects_repeated_segments() {
        assert_eq!(
            ThermalMap::from_fluxes(
                &airframe(),
                [
                    ("NoseCone", flux(1.0)),
                    ("RecoveryTube", flux(1.0)),
                    ("RecoveryTube", flux(5.0)),
                    ("Fins", flux(1.0)),
                ]
            ),
            Err(ThermalMapError::DuplicateSegment {
                name: "RecoveryTube".to_owned()
            })
        );
    }
}
