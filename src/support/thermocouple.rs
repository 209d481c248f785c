//! Thermocouple reference equations and cold-junction compensation.
//!
//! Conversions follow the piecewise-polynomial reference functions for the
//! standard letter types (B, E, J, K, N, R, S, T). Temperatures are in °C and
//! EMFs in mV throughout this module; the [`ThermocoupleType`] and
//! [`ColdJunction`] methods offer the same conversions with [`uom`] quantities.
//!
//! The four entry points accept either a [`ThermocoupleType`] or a string tag:
//!
//! ```
//! use twine_thermocouples::support::thermocouple::{
//!     DEFAULT_COLD_JUNCTION_C, ThermocoupleError, ThermocoupleType, calculate_temperature,
//!     convert_to_voltage,
//! };
//!
//! let mv = convert_to_voltage(100.0, ThermocoupleType::K)?;
//! assert!((mv - 4.096).abs() < 1e-3);
//!
//! // A zero reading means the hot junction sits at the cold-junction temperature.
//! let celsius = calculate_temperature(0.0, "K", DEFAULT_COLD_JUNCTION_C)?;
//! assert!((celsius - 23.0).abs() < 0.1);
//!
//! assert!(matches!(
//!     convert_to_voltage(100.0, "Z"),
//!     Err(ThermocoupleError::UnknownThermocoupleType { .. })
//! ));
//! # Ok::<(), ThermocoupleError>(())
//! ```
//!
//! All tables are `static` and every function is pure, so conversions may run
//! concurrently from any number of threads.

mod compensation;
mod error;
mod kind;
mod refine;
mod table;

pub use compensation::{
    ColdJunction, DEFAULT_COLD_JUNCTION_C, temperature_from_voltage, voltage_from_temperature,
};
pub use error::ThermocoupleError;
pub use kind::ThermocoupleType;
pub use refine::{RefineConfig, RefineError, refine_temperature};
pub use table::{CorrectionTerm, Direction, PolynomialSegment, ThermocoupleTable, lookup};

/// Converts an EMF in mV, referenced to 0 °C, to temperature in °C.
///
/// # Errors
///
/// Returns [`ThermocoupleError::UnknownThermocoupleType`] for an unrecognized tag
/// and [`ThermocoupleError::OutOfRange`] if the EMF is outside the Inverse table.
pub fn convert_to_temperature<K>(voltage_mv: f64, kind: K) -> Result<f64, ThermocoupleError>
where
    K: TryInto<ThermocoupleType>,
    ThermocoupleError: From<K::Error>,
{
    lookup(kind.try_into()?, Direction::Inverse).evaluate(voltage_mv)
}

/// Converts a temperature in °C to EMF in mV, referenced to 0 °C.
///
/// # Errors
///
/// Returns [`ThermocoupleError::UnknownThermocoupleType`] for an unrecognized tag
/// and [`ThermocoupleError::OutOfRange`] if the temperature is outside the Direct table.
pub fn convert_to_voltage<K>(temperature_c: f64, kind: K) -> Result<f64, ThermocoupleError>
where
    K: TryInto<ThermocoupleType>,
    ThermocoupleError: From<K::Error>,
{
    lookup(kind.try_into()?, Direction::Direct).evaluate(temperature_c)
}

/// Converts a raw reading in mV to hot-junction temperature in °C.
///
/// Pass [`DEFAULT_COLD_JUNCTION_C`] when the cold junction is not measured.
///
/// # Errors
///
/// Returns [`ThermocoupleError::UnknownThermocoupleType`] for an unrecognized tag
/// and [`ThermocoupleError::OutOfRange`] if either junction is outside the tables.
pub fn calculate_temperature<K>(
    voltage_mv: f64,
    kind: K,
    cold_junction_c: f64,
) -> Result<f64, ThermocoupleError>
where
    K: TryInto<ThermocoupleType>,
    ThermocoupleError: From<K::Error>,
{
    temperature_from_voltage(voltage_mv, kind.try_into()?, cold_junction_c)
}

/// Returns the raw reading in mV expected at a hot-junction temperature in °C.
///
/// Pass [`DEFAULT_COLD_JUNCTION_C`] when the cold junction is not measured.
///
/// # Errors
///
/// Returns [`ThermocoupleError::UnknownThermocoupleType`] for an unrecognized tag
/// and [`ThermocoupleError::OutOfRange`] if either junction is outside the Direct table.
pub fn calculate_voltage<K>(
    temperature_c: f64,
    kind: K,
    cold_junction_c: f64,
) -> Result<f64, ThermocoupleError>
where
    K: TryInto<ThermocoupleType>,
    ThermocoupleError: From<K::Error>,
{
    voltage_from_temperature(temperature_c, kind.try_into()?, cold_junction_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Temperatures covered by both the Direct and Inverse tables of each type.
    fn shared_range(kind: ThermocoupleType) -> (f64, f64) {
        match kind {
            ThermocoupleType::B => (300.0, 1810.0),
            ThermocoupleType::E => (-190.0, 990.0),
            ThermocoupleType::J => (-200.0, 1190.0),
            ThermocoupleType::K => (-190.0, 1360.0),
            ThermocoupleType::N => (-190.0, 1290.0),
            ThermocoupleType::R | ThermocoupleType::S => (-40.0, 1760.0),
            ThermocoupleType::T => (-190.0, 390.0),
        }
    }

    #[test]
    fn round_trip_within_half_degree() -> Result<(), ThermocoupleError> {
        for kind in ThermocoupleType::ALL {
            let (min, max) = shared_range(kind);
            let mut t = min;
            while t <= max {
                let mv = convert_to_voltage(t, kind)?;
                let back = convert_to_temperature(mv, kind)?;
                assert!(
                    (back - t).abs() < 0.5,
                    "type {kind} at {t} °C came back as {back} °C"
                );
                t += 10.0;
            }
        }
        Ok(())
    }

    #[test]
    fn out_of_range_for_every_type() {
        for kind in ThermocoupleType::ALL {
            let (t_min, t_max) = kind.domain(Direction::Direct);
            let (v_min, v_max) = kind.domain(Direction::Inverse);

            for t in [t_min - 0.001, t_max + 0.001] {
                assert!(matches!(
                    convert_to_voltage(t, kind),
                    Err(ThermocoupleError::OutOfRange { .. })
                ));
            }
            for v in [v_min - 0.001, v_max + 0.001] {
                assert!(matches!(
                    convert_to_temperature(v, kind),
                    Err(ThermocoupleError::OutOfRange { .. })
                ));
            }
        }
    }

    #[test]
    fn type_k_reference_values() -> Result<(), ThermocoupleError> {
        assert_relative_eq!(convert_to_voltage(0.0, ThermocoupleType::K)?, 0.0);
        assert_relative_eq!(
            convert_to_voltage(100.0, ThermocoupleType::K)?,
            4.096,
            epsilon = 5e-4
        );
        assert_relative_eq!(convert_to_temperature(4.096, "K")?, 100.0, epsilon = 0.05);
        assert_relative_eq!(
            calculate_temperature(0.0, "K", DEFAULT_COLD_JUNCTION_C)?,
            23.0,
            epsilon = 0.05
        );
        Ok(())
    }

    #[test]
    fn tags_and_enum_agree() -> Result<(), ThermocoupleError> {
        for kind in ThermocoupleType::ALL {
            let tag = kind.to_string();
            let (min, max) = shared_range(kind);
            let t = 0.5 * (min + max);
            assert_eq!(
                convert_to_voltage(t, tag.as_str())?,
                convert_to_voltage(t, kind)?
            );
            assert_eq!(
                calculate_voltage(t, tag.to_lowercase().as_str(), DEFAULT_COLD_JUNCTION_C)?,
                calculate_voltage(t, kind, DEFAULT_COLD_JUNCTION_C)?
            );
        }
        Ok(())
    }

    #[test]
    fn unknown_tag_rejected_by_every_entry_point() {
        let unknown = |result: Result<f64, ThermocoupleError>| {
            matches!(
                result,
                Err(ThermocoupleError::UnknownThermocoupleType { tag }) if tag == "Z"
            )
        };

        assert!(unknown(convert_to_temperature(1.0, "Z")));
        assert!(unknown(convert_to_voltage(100.0, "Z")));
        assert!(unknown(calculate_temperature(1.0, "Z", DEFAULT_COLD_JUNCTION_C)));
        assert!(unknown(calculate_voltage(100.0, "Z", DEFAULT_COLD_JUNCTION_C)));
    }

    #[test]
    fn hot_equal_to_cold_reads_zero() -> Result<(), ThermocoupleError> {
        for kind in ThermocoupleType::ALL {
            let (min, max) = shared_range(kind);
            for t in [min, max] {
                assert_relative_eq!(calculate_voltage(t, kind, t)?, 0.0);
            }
        }
        Ok(())
    }

    #[test]
    fn compensated_round_trip() -> Result<(), ThermocoupleError> {
        let cold_junction = 28.5;
        for kind in ThermocoupleType::ALL {
            let (min, max) = shared_range(kind);
            let t = 0.5 * (min + max);
            let reading = calculate_voltage(t, kind, cold_junction)?;
            assert_relative_eq!(
                calculate_temperature(reading, kind, cold_junction)?,
                t,
                epsilon = 0.5
            );
        }
        Ok(())
    }
}
