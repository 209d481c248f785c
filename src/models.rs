//! Public Twine models.
//!
//! Models are thin [`twine_core::Model`] adapters that instrument drivers can
//! compose with other Twine components. The numerical work they delegate to
//! lives in [`support`](crate::support).
//!
//! # Organization
//!
//! Models are grouped by domain (currently only `sensors`). This organization
//! may evolve as more models are added.

pub mod sensors;
