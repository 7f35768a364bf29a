//! Export functionality for calculation records.
//!
//! Provides CSV logging of computed doses and JSON snapshot export,
//! for keeping a lab record of what was added to which culture.

mod csv_export;
mod json_export;

pub use csv_export::{CalculationRecord, CsvExporter};
pub use json_export::{export_calculation_json, export_calculation_json_to};
