use std::convert::Infallible;

use thiserror::Error;

use super::{Direction, ThermocoupleType};

/// Errors that may occur when converting thermocouple quantities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermocoupleError {
    /// The input lies outside the valid domain of the selected reference table.
    ///
    /// Bounds are in °C for [`Direction::Direct`] and in mV for
    /// [`Direction::Inverse`].
    #[error("{value} is outside the {direction} range [{min}, {max}] of type {kind}")]
    OutOfRange {
        kind: ThermocoupleType,
        direction: Direction,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The tag does not name a supported thermocouple type.
    #[error("unknown thermocouple type: {tag:?}")]
    UnknownThermocoupleType { tag: String },
}

impl From<Infallible> for ThermocoupleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
