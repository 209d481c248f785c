//! Supporting utilities used by models.

pub mod thermocouple;
pub mod units;
