//! Sensor models.
//!
//! Models that turn raw instrument signals into physical quantities, and back
//! again when a driver needs the signal expected for a target condition.

pub mod thermocouple;
