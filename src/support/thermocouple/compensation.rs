//! Cold-junction compensation.
//!
//! A thermocouple measures the EMF difference between its hot junction and the
//! reference (cold) junction at the instrument terminals. The reference tables
//! assume a 0 °C cold junction, so a raw reading is shifted by the EMF the cold
//! junction would produce before inverting.

use uom::si::{
    electric_potential::millivolt,
    f64::{ElectricPotential, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use super::{Direction, ThermocoupleError, ThermocoupleType, table::lookup};

/// Cold-junction temperature assumed when none is measured, in °C.
pub const DEFAULT_COLD_JUNCTION_C: f64 = 23.0;

/// Returns the absolute hot-junction temperature in °C for a raw reading.
///
/// # Errors
///
/// Returns [`ThermocoupleError::OutOfRange`] if the cold-junction temperature
/// or the compensated EMF is outside the reference tables.
pub fn temperature_from_voltage(
    measured_mv: f64,
    kind: ThermocoupleType,
    cold_junction_c: f64,
) -> Result<f64, ThermocoupleError> {
    let cold_junction_mv = lookup(kind, Direction::Direct).evaluate(cold_junction_c)?;
    lookup(kind, Direction::Inverse).evaluate(measured_mv + cold_junction_mv)
}

/// Returns the raw reading in mV expected for a hot-junction temperature.
///
/// # Errors
///
/// Returns [`ThermocoupleError::OutOfRange`] if either junction temperature is
/// outside the Direct table.
pub fn voltage_from_temperature(
    hot_junction_c: f64,
    kind: ThermocoupleType,
    cold_junction_c: f64,
) -> Result<f64, ThermocoupleError> {
    let direct = lookup(kind, Direction::Direct);
    let hot_junction_mv = direct.evaluate(hot_junction_c)?;
    let cold_junction_mv = direct.evaluate(cold_junction_c)?;
    Ok(hot_junction_mv - cold_junction_mv)
}

/// Reference-junction conditions for compensated conversions.
///
/// Defaults to [`DEFAULT_COLD_JUNCTION_C`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdJunction {
    pub temperature: ThermodynamicTemperature,
}

impl Default for ColdJunction {
    fn default() -> Self {
        Self::from_celsius(DEFAULT_COLD_JUNCTION_C)
    }
}

impl ColdJunction {
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature) -> Self {
        Self { temperature }
    }

    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self::new(ThermodynamicTemperature::new::<degree_celsius>(celsius))
    }

    fn celsius(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }

    /// Returns the hot-junction temperature for a raw reading.
    ///
    /// # Errors
    ///
    /// See [`temperature_from_voltage`].
    pub fn temperature(
        &self,
        kind: ThermocoupleType,
        reading: ElectricPotential,
    ) -> Result<ThermodynamicTemperature, ThermocoupleError> {
        let celsius = temperature_from_voltage(reading.get::<millivolt>(), kind, self.celsius())?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(celsius))
    }

    /// Returns the raw reading expected for a hot-junction temperature.
    ///
    /// # Errors
    ///
    /// See [`voltage_from_temperature`].
    pub fn voltage(
        &self,
        kind: ThermocoupleType,
        hot_junction: ThermodynamicTemperature,
    ) -> Result<ElectricPotential, ThermocoupleError> {
        let mv = voltage_from_temperature(
            hot_junction.get::<degree_celsius>(),
            kind,
            self.celsius(),
        )?;
        Ok(ElectricPotential::new::<millivolt>(mv))
    }
}
