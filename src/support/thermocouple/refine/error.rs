use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::ElectricPotential;

use crate::support::thermocouple::ThermocoupleError;

/// Errors that can occur while refining an inverse conversion.
#[derive(Debug, Error)]
pub enum RefineError {
    /// The initial estimate or a table lookup failed.
    #[error("conversion failed")]
    Conversion(#[from] ThermocoupleError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best EMF residual achieved.
        residual: ElectricPotential,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
