//! Refined inversion of the Direct reference equation.
//!
//! The inverse polynomials approximate the Direct equation to within a few
//! hundredths of a degree. When a reading must agree exactly with the Direct
//! equation (for example when checking a calibration against
//! [`convert_to_voltage`](super::convert_to_voltage)), this module bisects the
//! Direct equation around the inverse-polynomial estimate.

mod config;
mod error;
mod problem;

pub use config::RefineConfig;
pub use error::RefineError;

use twine_solvers::equation::bisection;
use uom::si::{
    electric_potential::millivolt, f64::ElectricPotential,
    temperature_interval::degree_celsius as delta_celsius,
};

use super::{Direction, ThermocoupleError, ThermocoupleType, table::lookup};

use problem::{DirectModel, TargetEmf};

/// Returns the temperature in °C at which the Direct equation yields `voltage_mv`.
///
/// The EMF is referenced to 0 °C, as for [`convert_to_temperature`](super::convert_to_temperature).
///
/// # Errors
///
/// Returns [`RefineError::Conversion`] if the EMF is outside the Inverse table
/// or beyond the ends of the Direct curve, and other [`RefineError`] variants
/// if the bracket does not contain a root or the solver fails to converge.
pub fn refine_temperature(
    voltage_mv: f64,
    kind: ThermocoupleType,
    config: RefineConfig,
) -> Result<f64, RefineError> {
    let inverse = lookup(kind, Direction::Inverse);
    let direct = lookup(kind, Direction::Direct);

    let estimate = inverse.evaluate(voltage_mv)?;
    let (min, max) = direct.domain();

    // Several Inverse tables extend slightly past the EMF the Direct curve reaches.
    let (inverse_min, inverse_max) = inverse.domain();
    let emf_min = direct.evaluate(min)?.max(inverse_min);
    let emf_max = direct.evaluate(max)?.min(inverse_max);
    if voltage_mv < emf_min || voltage_mv > emf_max {
        return Err(ThermocoupleError::OutOfRange {
            kind,
            direction: Direction::Inverse,
            value: voltage_mv,
            min: emf_min,
            max: emf_max,
        }
        .into());
    }

    let half_width = config.bracket.get::<delta_celsius>();

    let model = DirectModel::new(kind);
    let problem = TargetEmf::new(ElectricPotential::new::<millivolt>(voltage_mv));

    let solution = bisection::solve(
        &model,
        &problem,
        [
            (estimate - half_width).max(min),
            (estimate + half_width).min(max),
        ],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RefineError::MaxIters {
            residual: ElectricPotential::new::<millivolt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.celsius)
}
