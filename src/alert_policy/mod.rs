//! Alert policy evaluation: domain models and the pure decision core.
//!
//! Nothing in this module performs I/O or reads the system clock. The
//! evaluation instant, the threshold table and the alert collection are all
//! supplied by the caller, so a run is fully deterministic.

pub mod domain;
pub mod services;
