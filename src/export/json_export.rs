//! JSON export for calculation snapshots.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::calculator::{CalculationRequest, CalculationResult};

/// Full calculation export structure
#[derive(Debug, Clone, Serialize)]
pub struct CalculationExport {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    /// The inputs as submitted
    pub request: CalculationRequest,
    /// The derived dose values
    pub result: CalculationResult,
}

/// Export a computed dose to JSON
///
/// Creates the exports directory if it doesn't exist.
/// Filename is auto-generated with timestamp: `dose_YYYYMMDD_HHMMSS.json`
///
/// Returns the path to the saved JSON file.
pub fn export_calculation_json(
    request: &CalculationRequest,
    result: &CalculationResult,
) -> Result<PathBuf> {
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    let timestamp = Local::now();
    let filename = format!("dose_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
    let path = dir.join(&filename);

    export_to(request, result, &path)?;

    log::info!("JSON dose exported: {}", path.display());
    Ok(path)
}

/// Export a computed dose to a specific file
pub fn export_calculation_json_to(
    request: &CalculationRequest,
    result: &CalculationResult,
    path: &PathBuf,
) -> Result<()> {
    export_to(request, result, path)?;
    log::info!("JSON dose exported: {}", path.display());
    Ok(())
}

fn export_to(
    request: &CalculationRequest,
    result: &CalculationResult,
    path: &PathBuf,
) -> Result<()> {
    let export = CalculationExport {
        exported_at: Local::now().to_rfc3339(),
        version: "1.0.0",
        request: request.clone(),
        result: *result,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
