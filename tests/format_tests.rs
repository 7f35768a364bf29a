//! Report rendering tests.
//!
//! The two report variants are textual views of the same four numbers;
//! these tests pin the exact output for the reference XL1-Blue setup and
//! the notation helpers they are built from.

use phage_moi_calc::{
    format_grouped, format_scientific, minimal_report, round2, styled_report, CalculationRequest,
    CalibrationTable, MoiCalculator,
};

fn reference_dose() -> (CalculationRequest, phage_moi_calc::CalculationResult) {
    let request = CalculationRequest {
        strain: "XL1-Blue".to_string(),
        od600: 0.2,
        volume_ml: 1.0,
        moi: 10.0,
        stock_pfu_per_ml: 2.0e12,
    };
    let result = MoiCalculator::new(CalibrationTable::default())
        .compute(&request)
        .unwrap();
    (request, result)
}

#[test]
fn test_styled_report_reference_output() {
    let (request, result) = reference_dose();

    assert_eq!(
        styled_report(&request, &result),
        "CFU/mL for XL1-Blue at OD600 = 0.2\n\
         CFU/mL: 1.60 × 10⁸\n\
         Total Cells: 1.60 × 10⁸\n\
         \n\
         Helper Phage Required:\n\
         1.60 × 10⁹ PFU\n\
         Add 0.8 µL of helper phage"
    );
}

#[test]
fn test_minimal_report_reference_output() {
    let (_, result) = reference_dose();

    assert_eq!(
        minimal_report(&result),
        "Estimated CFU/mL: 160,000,000\n\
         Total Cells: 160,000,000\n\
         Helper Phage Required: 1,600,000,000 PFU\n\
         → Add 0.8 µL of helper phage"
    );
}

#[test]
fn test_scientific_notation_shapes() {
    assert_eq!(format_scientific(1.6e8), "1.60 × 10⁸");
    assert_eq!(format_scientific(4.25e9), "4.25 × 10⁹");
    assert_eq!(format_scientific(8.5e8), "8.50 × 10⁸");
    // Two-digit exponent, no leading zeros
    assert_eq!(format_scientific(2.0e12), "2.00 × 10¹²");
}

#[test]
fn test_scientific_notation_small_values() {
    assert_eq!(format_scientific(0.8), "8.00 × 10⁻¹");
    assert_eq!(format_scientific(4.25), "4.25 × 10⁰");
}

#[test]
fn test_grouped_rendering() {
    assert_eq!(format_grouped(4.25e8), "425,000,000");
    assert_eq!(format_grouped(8.5e8), "850,000,000");
    assert_eq!(format_grouped(12.0), "12");
}

#[test]
fn test_volume_rounding_is_presentation_only() {
    let (_, result) = reference_dose();

    // The stored value keeps full precision; only the display rounds
    assert!((result.phage_volume_ul - 0.8).abs() < 1e-12);
    assert_eq!(round2(result.phage_volume_ul), 0.8);
    assert_eq!(round2(4.256), 4.26);
}
