use twine_solvers::equation::bisection;
use uom::si::{
    f64::{HeatFluxDensity, Velocity},
    heat_flux_density::watt_per_square_meter,
    velocity::meter_per_second,
};

/// Stopping criteria for the velocity search.
///
/// The defaults sit a few orders of magnitude above round-off for fluxes of
/// order 1e4 W/m² and speeds of order 1e2 m/s, so a converged search
/// reproduces a forward evaluation to better than a part in 1e9.
#[derive(Debug, Clone, Copy)]
pub struct GivenFluxConfig {
    /// Bisection halvings allowed before giving up.
    ///
    /// A 2000 m/s bracket reaches `velocity_tol` in about 45 halvings.
    pub max_iters: usize,

    /// Stop once the velocity bracket is narrower than this.
    pub velocity_tol: Velocity,

    /// Stop once `|q| - target` is within this of zero.
    ///
    /// `|q|` grows as `sqrt(v)`, so near 327 m/s a flux error of 1e-9 W/m²
    /// corresponds to roughly 4e-11 m/s.
    pub flux_tol: HeatFluxDensity,
}

impl Default for GivenFluxConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            velocity_tol: Velocity::new::<meter_per_second>(1e-10),
            flux_tol: HeatFluxDensity::new::<watt_per_square_meter>(1e-9),
        }
    }
}

impl GivenFluxConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.velocity_tol.get::<meter_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.flux_tol.get::<watt_per_square_meter>(),
        }
    }
}
