//! Helper Phage MOI Calculator - library core
//!
//! Computes the volume of helper phage stock to add to a bacterial culture
//! to hit a target multiplicity of infection (MOI), from the culture's
//! OD600 reading, volume, strain, and the phage stock titer.
//!
//! The arithmetic lives in [`MoiCalculator`] behind a typed request/result
//! API; strain calibration data is explicit configuration injected into
//! the calculator, and text rendering / export are independent layers on
//! top of the numeric results.

pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod format;

pub use calculator::{CalculationRequest, CalculationResult, MoiCalculator, RawRequest};
pub use config::{CalibrationTable, InputDefaults, Parameters, StrainCalibration};
pub use error::{CalcError, CalcResult};
pub use export::{export_calculation_json, CalculationRecord, CsvExporter};
pub use format::{format_grouped, format_scientific, minimal_report, round2, styled_report};
