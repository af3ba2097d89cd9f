//! Conversion constants
//!
//! Standard factors for turning imperial body measurements into metric ones.

// ============================================================================
// Length Conversion Constants
// ============================================================================

/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * M_PER_FT
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_IN
}

/// Formulas that take height in centimeters use this on the stored meters
pub fn meters_to_cm(meters: f64) -> f64 {
    meters * CM_PER_M
}
