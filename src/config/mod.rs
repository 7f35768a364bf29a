//! Configuration module for calibration data and input defaults.
//!
//! The strain table is loaded once at startup and passed into the
//! calculator; it is never consulted as global state.

mod parameters;

pub use parameters::{CalibrationTable, InputDefaults, Parameters, StrainCalibration};
