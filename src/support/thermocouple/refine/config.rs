use twine_solvers::equation::bisection;
use uom::si::{
    electric_potential::millivolt,
    f64::{ElectricPotential, TemperatureInterval},
    temperature_interval::degree_celsius as delta_celsius,
};

/// Solver configuration for refined inversion.
#[derive(Debug, Clone, Copy)]
pub struct RefineConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Half-width of the search bracket around the inverse-polynomial estimate.
    ///
    /// The bracket is clamped to the Direct table's domain.
    pub bracket: TemperatureInterval,

    /// Absolute tolerance for the hot-junction temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the EMF residual (direct(T) - target).
    pub emf_tol: ElectricPotential,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            bracket: TemperatureInterval::new::<delta_celsius>(1.0),
            temp_tol: TemperatureInterval::new::<delta_celsius>(1e-9),
            emf_tol: ElectricPotential::new::<millivolt>(1e-12),
        }
    }
}

impl RefineConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_celsius>(),
            x_rel_tol: 0.0,
            residual_tol: self.emf_tol.get::<millivolt>(),
        }
    }
}
