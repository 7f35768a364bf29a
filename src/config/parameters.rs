//! Parameter structures for strain calibration and input defaults.
//!
//! OD600 readings are converted to viable cell density with a per-strain
//! multiplier (CFU/mL per OD600 unit). The multipliers are empirical
//! calibration constants for the common phage-display cloning strains;
//! the often-quoted "OD600 1.0 ≈ 8×10⁸ cells/mL" E. coli heuristic is
//! the XL1-Blue entry here.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Strain calibration table (CFU/mL per OD600 unit)
    pub strains: CalibrationTable,
    /// Pre-fill values for interactive input
    pub defaults: InputDefaults,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let strains = CalibrationTable::load_or_default("data/parameters/strains.json");
        let defaults = InputDefaults::load_or_default("data/parameters/defaults.json");

        Self { strains, defaults }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let strains = CalibrationTable::load_or_default(dir.join("strains.json"));
        let defaults = InputDefaults::load_or_default(dir.join("defaults.json"));

        Self { strains, defaults }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            strains: CalibrationTable::default(),
            defaults: InputDefaults::default(),
        }
    }
}

/// Calibration entry for a single bacterial strain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrainCalibration {
    /// Strain name as selected by the user (exact-match key)
    pub name: String,
    /// Viable cell density per OD600 unit (CFU/mL)
    pub cfu_per_ml_per_od600: f64,
}

/// Immutable strain calibration table
///
/// Maps each known strain to its OD600 → CFU/mL conversion constant.
/// Constructed once (from JSON or compiled defaults) and injected into
/// the calculator; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationTable {
    /// Known strains, in display order
    pub strains: Vec<StrainCalibration>,
}

impl CalibrationTable {
    /// Look up the CFU/mL-per-OD600 multiplier for a strain
    ///
    /// Returns `None` when the strain is not in the table; callers must
    /// treat that as an error, never substitute a default multiplier.
    pub fn multiplier_for(&self, name: &str) -> Option<f64> {
        self.strains
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.cfu_per_ml_per_od600)
    }

    /// Names of all known strains, in display order
    pub fn names(&self) -> Vec<&str> {
        self.strains.iter().map(|s| s.name.as_str()).collect()
    }

    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(table) => {
                    log::info!("Loaded strain table from {:?}", path.as_ref());
                    table
                }
                Err(e) => {
                    log::warn!("Failed to parse strain table: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Strain table file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self {
            strains: vec![
                // recA- endA1 cloning strain, standard phagemid host
                StrainCalibration {
                    name: "XL1-Blue".to_string(),
                    cfu_per_ml_per_od600: 8.0e8,
                },
                // supE K-12 strain, fast grower, classic phage display host
                StrainCalibration {
                    name: "TG1".to_string(),
                    cfu_per_ml_per_od600: 8.5e8,
                },
                // BL21 derivative with tunable T7 expression, lower viable count per OD
                StrainCalibration {
                    name: "Lemo21".to_string(),
                    cfu_per_ml_per_od600: 6.5e8,
                },
            ],
        }
    }
}

/// Pre-fill values for interactive input
///
/// These mirror a typical mid-log infection setup: a 1 mL culture caught
/// at OD600 0.2, infected at MOI 10 from a 2×10¹² PFU/mL stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Default strain selection
    pub strain: String,
    /// Default optical density reading
    pub od600: f64,
    /// Default culture volume (mL)
    pub volume_ml: f64,
    /// Default target multiplicity of infection
    pub moi: f64,
    /// Default phage stock titer (PFU/mL)
    pub stock_pfu_per_ml: f64,
}

impl InputDefaults {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(defaults) => {
                    log::info!("Loaded input defaults from {:?}", path.as_ref());
                    defaults
                }
                Err(e) => {
                    log::warn!("Failed to parse input defaults: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Input defaults file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            strain: "XL1-Blue".to_string(),
            od600: 0.2,
            volume_ml: 1.0,
            moi: 10.0,
            stock_pfu_per_ml: 2.0e12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_strains() {
        let table = CalibrationTable::default();
        assert_eq!(table.names(), vec!["XL1-Blue", "TG1", "Lemo21"]);
        assert_eq!(table.multiplier_for("XL1-Blue"), Some(8.0e8));
        assert_eq!(table.multiplier_for("TG1"), Some(8.5e8));
        assert_eq!(table.multiplier_for("Lemo21"), Some(6.5e8));
    }

    #[test]
    fn test_unknown_strain_lookup() {
        let table = CalibrationTable::default();
        assert_eq!(table.multiplier_for("K12"), None);
        // Lookup is exact-match, no case folding
        assert_eq!(table.multiplier_for("xl1-blue"), None);
    }

    #[test]
    fn test_default_input_values() {
        let defaults = InputDefaults::default();
        assert_eq!(defaults.strain, "XL1-Blue");
        assert!((defaults.od600 - 0.2).abs() < 1e-12);
        assert!((defaults.volume_ml - 1.0).abs() < 1e-12);
        assert!((defaults.moi - 10.0).abs() < 1e-12);
        assert!((defaults.stock_pfu_per_ml - 2.0e12).abs() < 1.0);
    }

    #[test]
    fn test_serialization() {
        let params = Parameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let parsed: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.strains.names(), params.strains.names());
        assert_eq!(
            parsed.strains.multiplier_for("TG1"),
            params.strains.multiplier_for("TG1")
        );
        assert_eq!(parsed.defaults.strain, params.defaults.strain);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let table = CalibrationTable::load_or_default("no/such/file.json");
        assert_eq!(table.names().len(), 3);
    }
}
