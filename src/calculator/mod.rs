//! MOI calculator core.
//!
//! Multiplicity of infection (MOI) is the ratio of infectious phage
//! particles to target bacteria. For phage display rescues, the helper
//! phage dose is derived from the culture state in four steps:
//!
//! 1. OD600 × strain multiplier → viable cell density (CFU/mL)
//! 2. density × culture volume → total cells
//! 3. total cells × MOI → required phage particles (PFU)
//! 4. required PFU / stock titer → stock volume to add (converted to µL)
//!
//! Every result is recomputed from scratch; there is no cached or shared
//! state beyond the injected calibration table.

mod moi;

pub use moi::{CalculationResult, MoiCalculator};

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// A fully parsed calculation request
///
/// Only the strain is validated (against the calibration table, at
/// compute time). Negative or zero OD600, volume, and MOI are accepted
/// as-is and propagate through the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Bacterial strain name (calibration table key)
    pub strain: String,
    /// Optical density at 600 nm
    pub od600: f64,
    /// Culture volume (mL)
    pub volume_ml: f64,
    /// Target multiplicity of infection (phage per cell)
    pub moi: f64,
    /// Helper phage stock titer (PFU/mL)
    pub stock_pfu_per_ml: f64,
}

/// A calculation request as raw text fields
///
/// The boundary form an interactive front-end holds: everything is a
/// string until [`RawRequest::parse`] turns the numeric fields into
/// floats. This is the only place a parse failure can arise.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    /// Bacterial strain name
    pub strain: String,
    /// Optical density reading, unparsed
    pub od600: String,
    /// Culture volume in mL, unparsed
    pub volume_ml: String,
    /// Target MOI, unparsed
    pub moi: String,
    /// Stock titer in PFU/mL, unparsed
    pub stock_pfu_per_ml: String,
}

impl RawRequest {
    /// Parse the four numeric fields
    ///
    /// Fails with [`CalcError::InvalidNumber`] naming the first field
    /// that does not read as a real number. Scientific notation ("2e12")
    /// is accepted.
    pub fn parse(&self) -> CalcResult<CalculationRequest> {
        Ok(CalculationRequest {
            strain: self.strain.clone(),
            od600: parse_field("OD600", &self.od600)?,
            volume_ml: parse_field("culture volume", &self.volume_ml)?,
            moi: parse_field("MOI", &self.moi)?,
            stock_pfu_per_ml: parse_field("stock titer", &self.stock_pfu_per_ml)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> CalcResult<f64> {
    value.trim().parse().map_err(|_| CalcError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
