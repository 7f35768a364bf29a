//! Helper phage dose computation.
//!
//! The OD600 → CFU/mL conversion assumes the culture is in log phase,
//! where optical density tracks viable count linearly; the per-strain
//! slope comes from the injected calibration table. Downstream of that
//! conversion the dose is pure stoichiometry:
//!
//! required PFU = (OD600 × multiplier × volume) × MOI
//! stock volume (µL) = required PFU / titer × 1000
//!
//! Intermediates are kept at full f64 precision; rounding happens only
//! in the presentation layer.

use serde::{Deserialize, Serialize};

use crate::calculator::{CalculationRequest, RawRequest};
use crate::config::CalibrationTable;
use crate::error::{CalcError, CalcResult};

/// Derived values for one calculation request
///
/// A stateless snapshot: every field is recomputed from the request on
/// each call, never cached or mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Estimated viable cell density (CFU/mL)
    pub cfu_per_ml: f64,
    /// Total cells in the culture
    pub total_cells: f64,
    /// Helper phage particles required (PFU)
    pub required_phage_pfu: f64,
    /// Stock volume to add (µL)
    pub phage_volume_ul: f64,
}

/// Helper phage dose calculator
///
/// Holds the strain calibration table; computing a dose has no other
/// inputs and no side effects.
#[derive(Debug, Clone)]
pub struct MoiCalculator {
    table: CalibrationTable,
}

impl MoiCalculator {
    /// Create a calculator around a calibration table
    pub fn new(table: CalibrationTable) -> Self {
        Self { table }
    }

    /// The injected calibration table
    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Compute the helper phage dose for a parsed request
    ///
    /// Fails with [`CalcError::UnknownStrain`] when the strain has no
    /// table entry, and with [`CalcError::ZeroStockTiter`] when the
    /// stock titer is zero (the volume would be undefined). Negative or
    /// zero OD600, volume, and MOI pass through unvalidated.
    pub fn compute(&self, request: &CalculationRequest) -> CalcResult<CalculationResult> {
        let multiplier = self
            .table
            .multiplier_for(&request.strain)
            .ok_or_else(|| CalcError::UnknownStrain(request.strain.clone()))?;

        if request.stock_pfu_per_ml == 0.0 {
            return Err(CalcError::ZeroStockTiter);
        }

        let cfu_per_ml = request.od600 * multiplier;
        let total_cells = cfu_per_ml * request.volume_ml;
        let required_phage_pfu = total_cells * request.moi;
        let phage_volume_ul = (required_phage_pfu / request.stock_pfu_per_ml) * 1000.0;

        Ok(CalculationResult {
            cfu_per_ml,
            total_cells,
            required_phage_pfu,
            phage_volume_ul,
        })
    }

    /// Parse raw text fields, then compute
    pub fn compute_raw(&self, raw: &RawRequest) -> CalcResult<CalculationResult> {
        self.compute(&raw.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> MoiCalculator {
        MoiCalculator::new(CalibrationTable::default())
    }

    fn request(strain: &str, od600: f64, volume_ml: f64, moi: f64, stock: f64) -> CalculationRequest {
        CalculationRequest {
            strain: strain.to_string(),
            od600,
            volume_ml,
            moi,
            stock_pfu_per_ml: stock,
        }
    }

    #[test]
    fn test_xl1_blue_reference_dose() {
        let result = calculator()
            .compute(&request("XL1-Blue", 0.2, 1.0, 10.0, 2.0e12))
            .unwrap();

        assert!((result.cfu_per_ml - 1.6e8).abs() < 1.0);
        assert!((result.total_cells - 1.6e8).abs() < 1.0);
        assert!((result.required_phage_pfu - 1.6e9).abs() < 1.0);
        assert!((result.phage_volume_ul - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_tg1_reference_dose() {
        let result = calculator()
            .compute(&request("TG1", 0.5, 2.0, 5.0, 1.0e12))
            .unwrap();

        assert!((result.cfu_per_ml - 4.25e8).abs() < 1.0);
        assert!((result.total_cells - 8.5e8).abs() < 1.0);
        assert!((result.required_phage_pfu - 4.25e9).abs() < 1.0);
        assert!((result.phage_volume_ul - 4.25).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_strain_is_an_error() {
        let err = calculator()
            .compute(&request("K12", 0.2, 1.0, 10.0, 2.0e12))
            .unwrap_err();
        assert_eq!(err, CalcError::UnknownStrain("K12".to_string()));
    }

    #[test]
    fn test_zero_stock_titer_is_an_error() {
        let err = calculator()
            .compute(&request("XL1-Blue", 0.2, 1.0, 10.0, 0.0))
            .unwrap_err();
        assert_eq!(err, CalcError::ZeroStockTiter);
    }

    #[test]
    fn test_negative_inputs_propagate() {
        // Permissive on purpose: a negative OD reading yields a negative
        // dose rather than a rejection.
        let result = calculator()
            .compute(&request("XL1-Blue", -0.2, 1.0, 10.0, 2.0e12))
            .unwrap();
        assert!(result.cfu_per_ml < 0.0);
        assert!(result.phage_volume_ul < 0.0);
    }

    #[test]
    fn test_zero_od_yields_zero_dose() {
        let result = calculator()
            .compute(&request("Lemo21", 0.0, 1.0, 10.0, 2.0e12))
            .unwrap();
        assert_eq!(result.cfu_per_ml, 0.0);
        assert_eq!(result.phage_volume_ul, 0.0);
    }
}
