//! Iterative solver for the velocity at a target heat flux.
//!
//! At a fixed altitude and diameter the heat-flux magnitude grows with the
//! square root of velocity, so a bisection on velocity finds the speed at
//! which the surface sees a given flux.

mod config;
mod error;
mod problem;

pub use config::GivenFluxConfig;
pub use error::{GivenFluxError, NonFiniteHeatFlux};

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{HeatFluxDensity, Velocity},
        heat_flux_density::watt_per_square_meter,
        velocity::meter_per_second,
    },
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative},
    thermo::{
        capability::{HasDynamicViscosity, HasThermalConductivity},
        fluid::Air,
    },
};

use super::{FlightCondition, HeatingChain, HeatingResults};

use problem::{GivenFluxModel, GivenFluxProblem};

/// Finds the velocity within `bracket` at which `|q|` equals `target`.
///
/// The velocity of `condition` is ignored. A zero target is met at zero
/// velocity without iterating, which may lie below `bracket`.
///
/// # Errors
///
/// Returns [`GivenFluxError`] if the bracket is invalid, the flux is undefined
/// at this condition, the target lies outside the flux range spanned by the
/// bracket, or the solver fails to converge.
pub(super) fn given_flux<Viscosity, Conductivity>(
    chain: &HeatingChain<Viscosity, Conductivity>,
    condition: &FlightCondition,
    target: Constrained<HeatFluxDensity, NonNegative>,
    bracket: [Velocity; 2],
    config: GivenFluxConfig,
) -> Result<HeatingResults, GivenFluxError>
where
    Viscosity: HasDynamicViscosity<Fluid = Air>,
    Conductivity: HasThermalConductivity<Fluid = Air>,
{
    let [min, max] = bracket;
    let (lo, hi) = (min.get::<meter_per_second>(), max.get::<meter_per_second>());
    if NonNegative::check(&lo).is_err() || !hi.is_finite() || hi <= lo {
        return Err(GivenFluxError::Bracket { min, max });
    }

    let target = target.into_inner();
    let model = GivenFluxModel::new(chain, *condition);

    if target == HeatFluxDensity::ZERO {
        return Ok(model.call(&Velocity::ZERO)?);
    }

    // Undefined at the slow end means undefined everywhere at this altitude.
    let low = magnitude(&model.call(&min)?);
    let high = model
        .call(&max)
        .map_or(f64::INFINITY, |results| magnitude(&results));

    let wanted = target.get::<watt_per_square_meter>();
    if wanted < low || wanted > high {
        return Err(GivenFluxError::OutOfReach {
            target,
            low: HeatFluxDensity::new::<watt_per_square_meter>(low),
            high: HeatFluxDensity::new::<watt_per_square_meter>(high),
        });
    }

    let problem = GivenFluxProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [lo, hi],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A non-finite flux past the slow end is an overflow at extreme
            // speed, which lies above any finite target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenFluxError::MaxIters {
            residual: HeatFluxDensity::new::<watt_per_square_meter>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

fn magnitude(results: &HeatingResults) -> f64 {
    results.heat_flux.get::<watt_per_square_meter>().abs()
}
