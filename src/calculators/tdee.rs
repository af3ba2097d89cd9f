//! Total Daily Energy Expenditure
//!
//! TDEE = BMR × activity factor (McArdle et al., Exercise Physiology).

use crate::error::{CalculationError, CalculationResult};
use crate::models::{ActivityLevel, Measurements};

/// Multiplier applied to BMR for each activity level
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Lightly => 1.375,
        ActivityLevel::Moderately => 1.55,
        ActivityLevel::Very => 1.725,
        ActivityLevel::Extremely => 1.9,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TdeeCalculator;

impl TdeeCalculator {
    /// Scale a BMR value by the record's activity level
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` if age or activity level is absent, and
    /// `NonPositive` if the BMR is not positive
    pub fn tdee(&self, m: &Measurements, bmr: f64) -> CalculationResult<f64> {
        let (Some(_), Some(level)) = (m.age, m.activity_level) else {
            return Err(CalculationError::MissingMeasurement {
                calculation: "TDEE",
                fields: "Age and activity level are",
            });
        };
        if bmr <= 0.0 {
            return Err(CalculationError::NonPositive {
                calculation: "TDEE",
                field: "BMR",
                value: bmr,
            });
        }

        Ok(bmr * activity_factor(level))
    }
}
