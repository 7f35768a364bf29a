//! Text rendering for calculation results.
//!
//! Two equivalent views of the same four numbers: a styled report using
//! normalized scientific notation with superscript exponents, and a
//! minimal report using grouped whole numbers. Both are pure string
//! utilities with no dependency on the arithmetic core's internals.

use crate::calculator::{CalculationRequest, CalculationResult};

/// Format a number as "m.mm × 10ᵉ" with a superscript exponent
///
/// The mantissa is fixed to two decimals and the exponent carries no
/// leading zeros. Non-finite values fall back to their plain rendering.
pub fn format_scientific(value: f64) -> String {
    let sci = format!("{value:.2e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{} × 10{}", mantissa, superscript(exponent))
        }
        // NaN / infinity carry no exponent part
        None => sci,
    }
}

/// Format a number as a whole count with comma separators
///
/// Truncates toward zero, matching integer display of cell and particle
/// counts ("160,000,000").
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let truncated = value.trunc() as i128;
    let digits = truncated.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if truncated < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Round to two decimals for presentation
///
/// Used for the final µL figure only; intermediate arithmetic is never
/// rounded.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Styled report: scientific notation with superscript exponents
pub fn styled_report(request: &CalculationRequest, result: &CalculationResult) -> String {
    let mut report = format!(
        "CFU/mL for {} at OD600 = {}\n",
        request.strain, request.od600
    );
    report += &format!("CFU/mL: {}\n", format_scientific(result.cfu_per_ml));
    report += &format!("Total Cells: {}\n\n", format_scientific(result.total_cells));
    report += "Helper Phage Required:\n";
    report += &format!("{} PFU\n", format_scientific(result.required_phage_pfu));
    report += &format!("Add {} µL of helper phage", round2(result.phage_volume_ul));
    report
}

/// Minimal report: grouped whole numbers
pub fn minimal_report(result: &CalculationResult) -> String {
    format!(
        "Estimated CFU/mL: {}\n\
         Total Cells: {}\n\
         Helper Phage Required: {} PFU\n\
         → Add {} µL of helper phage",
        format_grouped(result.cfu_per_ml),
        format_grouped(result.total_cells),
        format_grouped(result.required_phage_pfu),
        round2(result.phage_volume_ul),
    )
}

/// Map digits and signs to Unicode superscript glyphs
fn superscript(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            '+' => '⁺',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_positive_exponent() {
        assert_eq!(format_scientific(1.6e8), "1.60 × 10⁸");
        assert_eq!(format_scientific(4.25e9), "4.25 × 10⁹");
    }

    #[test]
    fn test_scientific_rounds_mantissa() {
        assert_eq!(format_scientific(1.666e8), "1.67 × 10⁸");
        // Rounding carry renormalizes the exponent
        assert_eq!(format_scientific(9.999e5), "1.00 × 10⁶");
    }

    #[test]
    fn test_scientific_negative_exponent() {
        assert_eq!(format_scientific(8.0e-4), "8.00 × 10⁻⁴");
    }

    #[test]
    fn test_scientific_zero() {
        assert_eq!(format_scientific(0.0), "0.00 × 10⁰");
    }

    #[test]
    fn test_grouped_counts() {
        assert_eq!(format_grouped(1.6e8), "160,000,000");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(0.0), "0");
    }

    #[test]
    fn test_grouped_truncates_toward_zero() {
        assert_eq!(format_grouped(1234.9), "1,234");
        assert_eq!(format_grouped(-1234.9), "-1,234");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.8000000000000001), 0.8);
        assert_eq!(round2(4.257), 4.26);
        assert_eq!(round2(-4.257), -4.26);
    }
}
