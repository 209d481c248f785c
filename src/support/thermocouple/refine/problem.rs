//! Problem formulation for refined inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{electric_potential::millivolt, f64::ElectricPotential};

use crate::support::thermocouple::{Direction, ThermocoupleError, ThermocoupleType, lookup};

/// A point on the Direct reference curve.
///
/// The temperature stays in plain °C so bracket endpoints taken from the table
/// bounds are evaluated exactly, without a round trip through kelvin.
#[derive(Debug, Clone, Copy)]
pub(super) struct DirectPoint {
    pub(super) celsius: f64,
    pub(super) emf: ElectricPotential,
}

/// Model adapter exposing the Direct reference equation.
pub(super) struct DirectModel {
    kind: ThermocoupleType,
}

impl DirectModel {
    pub(super) fn new(kind: ThermocoupleType) -> Self {
        Self { kind }
    }
}

impl Model for DirectModel {
    type Input = f64;
    type Output = DirectPoint;
    type Error = ThermocoupleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mv = lookup(self.kind, Direction::Direct).evaluate(*input)?;
        Ok(DirectPoint {
            celsius: *input,
            emf: ElectricPotential::new::<millivolt>(mv),
        })
    }
}

/// Equation problem matching a target EMF.
///
/// Computes the residual as `direct(T) - target` in mV.
pub(super) struct TargetEmf {
    target: ElectricPotential,
}

impl TargetEmf {
    pub(super) fn new(target: ElectricPotential) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for TargetEmf {
    type Input = f64;
    type Output = DirectPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let emf = output.emf.get::<millivolt>();
        let target = self.target.get::<millivolt>();
        Ok([emf - target])
    }
}
