//! CSV export for calculation records.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::calculator::{CalculationRequest, CalculationResult};

/// One computed dose, flattened for CSV export
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRecord {
    /// Wall-clock timestamp (RFC 3339)
    pub recorded_at: String,
    /// Bacterial strain
    pub strain: String,
    /// Optical density reading
    pub od600: f64,
    /// Culture volume (mL)
    pub volume_ml: f64,
    /// Target MOI
    pub moi: f64,
    /// Stock titer (PFU/mL)
    pub stock_pfu_per_ml: f64,
    /// Estimated cell density (CFU/mL)
    pub cfu_per_ml: f64,
    /// Total cells in the culture
    pub total_cells: f64,
    /// Helper phage required (PFU)
    pub required_phage_pfu: f64,
    /// Stock volume to add (µL)
    pub phage_volume_ul: f64,
}

impl CalculationRecord {
    /// Build a record from a request and its result, stamped now
    pub fn new(request: &CalculationRequest, result: &CalculationResult) -> Self {
        Self {
            recorded_at: Local::now().to_rfc3339(),
            strain: request.strain.clone(),
            od600: request.od600,
            volume_ml: request.volume_ml,
            moi: request.moi,
            stock_pfu_per_ml: request.stock_pfu_per_ml,
            cfu_per_ml: result.cfu_per_ml,
            total_cells: result.total_cells,
            required_phage_pfu: result.required_phage_pfu,
            phage_volume_ul: result.phage_volume_ul,
        }
    }
}

/// CSV exporter accumulating one row per computed dose
pub struct CsvExporter {
    writer: csv::Writer<File>,
    /// Path to output file
    path: PathBuf,
}

impl CsvExporter {
    /// Create a new CSV exporter with an auto-generated filename
    ///
    /// Creates the exports directory if it doesn't exist. Filename is
    /// timestamped: `calculations_YYYYMMDD_HHMMSS.csv`.
    pub fn new() -> Result<Self> {
        let dir = PathBuf::from("exports");
        std::fs::create_dir_all(&dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("calculations_{}.csv", timestamp);

        Self::to_path(dir.join(filename))
    }

    /// Create a CSV exporter writing to a specific file
    pub fn to_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let writer = csv::Writer::from_writer(file);

        log::info!("CSV export started: {}", path.display());

        Ok(Self { writer, path })
    }

    /// Append one record
    pub fn record(
        &mut self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> Result<()> {
        let record = CalculationRecord::new(request, result);
        self.writer.serialize(&record)?;
        Ok(())
    }

    /// Finish writing and return the output path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("CSV export completed: {}", self.path.display());
        Ok(self.path)
    }

    /// Get the output path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
