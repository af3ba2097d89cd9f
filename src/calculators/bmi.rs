//! Body Mass Index calculations
//!
//! BMI, its WHO classification, BMI Prime and the ideal weight range.

use std::fmt;

use serde::Serialize;

use crate::error::{CalculationError, CalculationResult};
use crate::models::Measurements;

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiType {
    UnderweightSevereThinness,
    UnderweightModerateThinness,
    UnderweightMildThinness,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl BmiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiType::UnderweightSevereThinness => "underweight, severe thinness",
            BmiType::UnderweightModerateThinness => "underweight, moderate thinness",
            BmiType::UnderweightMildThinness => "underweight, mild thinness",
            BmiType::Normal => "normal weight",
            BmiType::Overweight => "overweight, pre-obese",
            BmiType::ObeseClassI => "obese, class I",
            BmiType::ObeseClassII => "obese, class II",
            BmiType::ObeseClassIII => "obese, class III",
        }
    }
}

impl fmt::Display for BmiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table, bounds inclusive
#[derive(Debug, Clone, Copy)]
pub struct BmiRange {
    pub min: f64,
    pub max: f64,
    pub bmi_type: BmiType,
}

pub const BMI_RANGES: [BmiRange; 8] = [
    BmiRange { min: 0.0, max: 15.9, bmi_type: BmiType::UnderweightSevereThinness },
    BmiRange { min: 16.0, max: 16.9, bmi_type: BmiType::UnderweightModerateThinness },
    BmiRange { min: 17.0, max: 18.4, bmi_type: BmiType::UnderweightMildThinness },
    BmiRange { min: 18.5, max: 24.9, bmi_type: BmiType::Normal },
    BmiRange { min: 25.0, max: 29.9, bmi_type: BmiType::Overweight },
    BmiRange { min: 30.0, max: 34.9, bmi_type: BmiType::ObeseClassI },
    BmiRange { min: 35.0, max: 39.9, bmi_type: BmiType::ObeseClassII },
    BmiRange { min: 40.0, max: 100.0, bmi_type: BmiType::ObeseClassIII },
];

/// Upper bound of the normal range used for BMI Prime
pub const BMI_PRIME_REFERENCE: f64 = 25.0;

/// Bounds used for the ideal weight range
pub const NORMAL_BMI_MIN: f64 = 18.5;
pub const NORMAL_BMI_MAX: f64 = 24.9;

#[derive(Debug, Clone, Copy, Default)]
pub struct BmiCalculator;

impl BmiCalculator {
    /// BMI = weight (kg) / height (m)²
    pub fn bmi(&self, m: &Measurements) -> f64 {
        m.weight / m.height.powi(2)
    }

    /// Classify a BMI value
    ///
    /// The value is rounded to the nearest integer before the table lookup.
    ///
    /// # Errors
    ///
    /// Returns `BmiOutOfRange` when no row of the table matches
    pub fn bmi_type(&self, bmi: f64) -> CalculationResult<BmiType> {
        let rounded = bmi.round();
        BMI_RANGES
            .iter()
            .find(|range| rounded >= range.min && rounded <= range.max)
            .map(|range| range.bmi_type)
            .ok_or(CalculationError::BmiOutOfRange(rounded))
    }

    pub fn bmi_prime(&self, bmi: f64) -> f64 {
        bmi / BMI_PRIME_REFERENCE
    }

    /// Weight range (kg) that keeps BMI inside the normal range
    pub fn ideal_weight(&self, m: &Measurements) -> (f64, f64) {
        let height_squared = m.height.powi(2);
        (NORMAL_BMI_MIN * height_squared, NORMAL_BMI_MAX * height_squared)
    }
}
