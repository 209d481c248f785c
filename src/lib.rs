//! # Twine Thermocouples
//!
//! Thermocouple reference equations and cold-junction compensation for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for reading and predicting
//!   thermocouple signals.
//! - [`support`]: The conversion engine and supporting utilities used by models.
//!
//! ## Conversions
//!
//! The engine in [`support::thermocouple`] converts between hot-junction
//! temperature (°C) and EMF (mV) for types B, E, J, K, N, R, S and T using the
//! piecewise-polynomial reference functions, and compensates raw readings for
//! a cold junction that is not at 0 °C.
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful on their own, but their APIs are not stable yet.

pub mod models;
pub mod support;
