//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units (temperature, EMF).
//! This module provides extensions that aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval,
//! such as the rise of a hot junction over its cold junction:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_thermocouples::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<degree_celsius>(400.0);
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(23.0);
//! let rise = hot.minus(cold);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
