//! Error types for the calculator library.
//!
//! All failures a caller can hit are input failures: a numeric field that
//! does not parse, a strain missing from the calibration table, or a zero
//! stock titer (which would make the volume formula undefined). None are
//! recoverable inside the computation; the caller re-collects input and
//! re-invokes.

use thiserror::Error;

/// Errors produced when validating or computing a calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A numeric input field could not be parsed as a real number.
    #[error("{field} value '{value}' is not a number")]
    InvalidNumber {
        /// Human-readable field name (e.g. "OD600").
        field: &'static str,
        /// The rejected raw text.
        value: String,
    },

    /// The requested strain has no entry in the calibration table.
    #[error("unknown strain '{0}'")]
    UnknownStrain(String),

    /// Stock titer of zero makes the required volume undefined.
    #[error("phage stock titer must be non-zero")]
    ZeroStockTiter,
}

/// Result type alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
