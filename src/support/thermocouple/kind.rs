use std::{fmt, str::FromStr};

use uom::si::{
    electric_potential::millivolt,
    f64::{ElectricPotential, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use super::{Direction, ThermocoupleError, table::lookup};

/// Standard thermocouple letter designations.
///
/// Each type pairs a Direct (°C → mV) and an Inverse (mV → °C) reference table.
/// Tags parse case-insensitively:
///
/// ```
/// use twine_thermocouples::support::thermocouple::ThermocoupleType;
///
/// assert_eq!("k".parse::<ThermocoupleType>().unwrap(), ThermocoupleType::K);
/// assert!("Z".parse::<ThermocoupleType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermocoupleType {
    /// Platinum-30% rhodium / platinum-6% rhodium.
    B,
    /// Nickel-chromium / copper-nickel.
    E,
    /// Iron / copper-nickel.
    J,
    /// Nickel-chromium / nickel-aluminum.
    K,
    /// Nicrosil / nisil.
    N,
    /// Platinum-13% rhodium / platinum.
    R,
    /// Platinum-10% rhodium / platinum.
    S,
    /// Copper / copper-nickel.
    T,
}

impl ThermocoupleType {
    /// Every supported type, in letter order.
    pub const ALL: [Self; 8] = [
        Self::B,
        Self::E,
        Self::J,
        Self::K,
        Self::N,
        Self::R,
        Self::S,
        Self::T,
    ];

    /// Returns the one-letter designation.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::B => 'B',
            Self::E => 'E',
            Self::J => 'J',
            Self::K => 'K',
            Self::N => 'N',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
        }
    }

    /// Returns the valid `(min, max)` input range for a conversion direction.
    ///
    /// Bounds are in °C for [`Direction::Direct`] and in mV for [`Direction::Inverse`].
    #[must_use]
    pub fn domain(self, direction: Direction) -> (f64, f64) {
        lookup(self, direction).domain()
    }

    /// Returns the EMF of the hot junction relative to a 0 °C reference junction.
    ///
    /// # Errors
    ///
    /// Returns [`ThermocoupleError::OutOfRange`] if the temperature lies outside
    /// the Direct table.
    pub fn voltage(
        self,
        temperature: ThermodynamicTemperature,
    ) -> Result<ElectricPotential, ThermocoupleError> {
        let mv = lookup(self, Direction::Direct).evaluate(temperature.get::<degree_celsius>())?;
        Ok(ElectricPotential::new::<millivolt>(mv))
    }

    /// Returns the hot-junction temperature for an EMF referenced to 0 °C.
    ///
    /// # Errors
    ///
    /// Returns [`ThermocoupleError::OutOfRange`] if the EMF lies outside
    /// the Inverse table.
    pub fn temperature(
        self,
        emf: ElectricPotential,
    ) -> Result<ThermodynamicTemperature, ThermocoupleError> {
        let celsius = lookup(self, Direction::Inverse).evaluate(emf.get::<millivolt>())?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(celsius))
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ThermocoupleType {
    type Err = ThermocoupleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let mut buf = [0; 4];
                trimmed.eq_ignore_ascii_case(kind.letter().encode_utf8(&mut buf))
            })
            .ok_or_else(|| ThermocoupleError::UnknownThermocoupleType {
                tag: tag.to_owned(),
            })
    }
}

impl TryFrom<&str> for ThermocoupleType {
    type Error = ThermocoupleError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl TryFrom<char> for ThermocoupleType {
    type Error = ThermocoupleError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        let mut buf = [0; 4];
        letter.encode_utf8(&mut buf).parse()
    }
}
