//! Thermocouple signal models.
//!
//! [`ThermocoupleReader`] turns a raw reading into an absolute temperature and
//! [`ThermocoupleSetpoint`] predicts the reading for a target temperature. Both
//! are thin [`twine_core::Model`] adapters over
//! [`support::thermocouple`](crate::support::thermocouple).

use twine_core::Model;
use uom::si::f64::{ElectricPotential, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    thermocouple::{ColdJunction, ThermocoupleError, ThermocoupleType},
    units::TemperatureDifference,
};

/// A compensated thermocouple reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Absolute hot-junction temperature.
    pub temperature: ThermodynamicTemperature,

    /// Hot-junction temperature minus cold-junction temperature.
    pub rise: TemperatureInterval,
}

/// Converts raw thermocouple readings to hot-junction temperatures.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_thermocouples::{
///     models::sensors::thermocouple::ThermocoupleReader,
///     support::thermocouple::ColdJunction,
/// };
/// use uom::si::{
///     electric_potential::millivolt, f64::ElectricPotential,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let reader = ThermocoupleReader::from_tag("K", ColdJunction::from_celsius(25.0)).unwrap();
/// let reading = reader.call(&ElectricPotential::new::<millivolt>(0.0)).unwrap();
/// assert!((reading.temperature.get::<degree_celsius>() - 25.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermocoupleReader {
    pub kind: ThermocoupleType,
    pub cold_junction: ColdJunction,
}

impl ThermocoupleReader {
    #[must_use]
    pub fn new(kind: ThermocoupleType, cold_junction: ColdJunction) -> Self {
        Self {
            kind,
            cold_junction,
        }
    }

    /// Creates a reader from a configuration tag such as `"K"`.
    ///
    /// # Errors
    ///
    /// Returns [`ThermocoupleError::UnknownThermocoupleType`] if the tag is not
    /// a supported type.
    pub fn from_tag(tag: &str, cold_junction: ColdJunction) -> Result<Self, ThermocoupleError> {
        Ok(Self::new(tag.parse()?, cold_junction))
    }
}

impl Model for ThermocoupleReader {
    type Input = ElectricPotential;
    type Output = Reading;
    type Error = ThermocoupleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = self.cold_junction.temperature(self.kind, *input)?;
        Ok(Reading {
            temperature,
            rise: temperature.minus(self.cold_junction.temperature),
        })
    }
}

/// Predicts the raw reading for a target hot-junction temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermocoupleSetpoint {
    pub kind: ThermocoupleType,
    pub cold_junction: ColdJunction,
}

impl ThermocoupleSetpoint {
    #[must_use]
    pub fn new(kind: ThermocoupleType, cold_junction: ColdJunction) -> Self {
        Self {
            kind,
            cold_junction,
        }
    }
}

impl Model for ThermocoupleSetpoint {
    type Input = ThermodynamicTemperature;
    type Output = ElectricPotential;
    type Error = ThermocoupleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.cold_junction.voltage(self.kind, *input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_potential::millivolt, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermocouple::{Direction, calculate_temperature, calculate_voltage};

    #[test]
    fn reader_matches_raw_conversion() -> Result<(), ThermocoupleError> {
        let reader = ThermocoupleReader::new(ThermocoupleType::J, ColdJunction::from_celsius(30.0));

        let reading = reader.call(&ElectricPotential::new::<millivolt>(12.5))?;
        let expected = calculate_temperature(12.5, ThermocoupleType::J, 30.0)?;

        assert_relative_eq!(
            reading.temperature.get::<degree_celsius>(),
            expected,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            reading.rise.get::<delta_kelvin>(),
            expected - 30.0,
            epsilon = 1e-9
        );
        Ok(())
    }

    #[test]
    fn setpoint_then_reader_round_trips() -> Result<(), ThermocoupleError> {
        let cold_junction = ColdJunction::default();
        let setpoint = ThermocoupleSetpoint::new(ThermocoupleType::N, cold_junction);
        let reader = ThermocoupleReader::new(ThermocoupleType::N, cold_junction);

        let target = ThermodynamicTemperature::new::<degree_celsius>(800.0);
        let emf = setpoint.call(&target)?;
        assert_relative_eq!(
            emf.get::<millivolt>(),
            calculate_voltage(800.0, "N", 23.0)?,
            epsilon = 1e-9
        );

        let reading = reader.call(&emf)?;
        assert_relative_eq!(
            reading.temperature.get::<degree_celsius>(),
            800.0,
            epsilon = 0.5
        );
        Ok(())
    }

    #[test]
    fn from_tag_rejects_unknown_type() {
        assert_eq!(
            ThermocoupleReader::from_tag("Z", ColdJunction::default()),
            Err(ThermocoupleError::UnknownThermocoupleType {
                tag: "Z".to_owned()
            })
        );
        assert!(ThermocoupleReader::from_tag("s", ColdJunction::default()).is_ok());
    }

    #[test]
    fn reader_propagates_out_of_range() {
        let reader = ThermocoupleReader::new(ThermocoupleType::T, ColdJunction::default());
        let result = reader.call(&ElectricPotential::new::<millivolt>(25.0));
        assert!(matches!(
            result,
            Err(ThermocoupleError::OutOfRange {
                direction: Direction::Inverse,
                ..
            })
        ));
    }
}
