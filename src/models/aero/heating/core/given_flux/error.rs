use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{HeatFluxDensity, Velocity};

/// The heating chain produced a non-finite heat flux.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("heat flux is not finite at {velocity:?}")]
pub struct NonFiniteHeatFlux {
    pub velocity: Velocity,
}

/// Errors that can occur while searching for the velocity of a target heat flux.
#[derive(Debug, Error)]
pub enum GivenFluxError {
    /// The velocity bracket is not an increasing, non-negative, finite range.
    #[error("invalid velocity bracket: [{min:?}, {max:?}]")]
    Bracket { min: Velocity, max: Velocity },

    /// The flux is undefined across the bracket, typically because the
    /// altitude lies outside the range of the atmosphere model.
    #[error("heat flux is undefined at this flight condition")]
    Undefined(#[from] NonFiniteHeatFlux),

    /// The target is not between the flux magnitudes at the bracket ends.
    #[error("target flux {target:?} is outside [{low:?}, {high:?}] over the velocity bracket")]
    OutOfReach {
        target: HeatFluxDensity,
        low: HeatFluxDensity,
        high: HeatFluxDensity,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best flux residual achieved.
        residual: HeatFluxDensity,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
