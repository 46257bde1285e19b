//! Competition apogee scoring.
//!
//! A flight earns full points for hitting the target apogee exactly and loses
//! points linearly with the absolute miss. A miss of `tolerance × target` or
//! more scores zero.
//!
//! ```
//! use aeroheat_models::support::scoring::ScoringRules;
//! use uom::si::{f64::Length, length::foot};
//!
//! let rules = ScoringRules::default();
//! let points = rules.score(Length::new::<foot>(12_321.0), Length::new::<foot>(10_000.0));
//! assert!((points - 79.216_666).abs() < 1e-5);
//! ```

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constraint, ConstraintError, StrictlyPositive};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRulesError {
    #[error("invalid maximum points")]
    MaxPoints(#[source] ConstraintError),
    #[error("invalid tolerance fraction")]
    Tolerance(#[source] ConstraintError),
}

/// Parameters of the linear apogee penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    max_points: f64,
    tolerance: f64,
}

impl ScoringRules {
    /// Creates scoring rules.
    ///
    /// `tolerance` is the miss, as a fraction of the target, at which the
    /// score reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringRulesError`] if either value is not strictly positive.
    pub fn new(max_points: f64, tolerance: f64) -> Result<Self, ScoringRulesError> {
        StrictlyPositive::check(&max_points).map_err(ScoringRulesError::MaxPoints)?;
        StrictlyPositive::check(&tolerance).map_err(ScoringRulesError::Tolerance)?;
        Ok(Self {
            max_points,
            tolerance,
        })
    }

    /// Returns the score for an `actual` apogee against `target`.
    ///
    /// The result lies in `[0, max_points]`. A non-positive target leaves no
    /// tolerance band and always scores zero.
    #[must_use]
    pub fn score(&self, actual: Length, target: Length) -> f64 {
        let actual = actual.get::<meter>();
        let target = target.get::<meter>();

        let error = (target - actual).abs();
        let max_error = self.tolerance * target;
        if error >= max_error {
            return 0.0;
        }

        let penalty_per_meter = self.max_points / max_error;
        self.max_points - penalty_per_meter * error
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            max_points: 350.0,
            tolerance: 0.3,
        }
    }
}
