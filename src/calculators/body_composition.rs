//! Body composition calculations
//!
//! Girth ratios, U.S. Navy body fat percentage and Boer lean body mass.
//! Girths are in centimeters, height is stored in meters and converted
//! to centimeters where a formula needs it.

use crate::error::{CalculationError, CalculationResult};
use crate::models::{Gender, Measurements};
use crate::units::meters_to_cm;

#[derive(Debug, Clone, Copy, Default)]
pub struct BodyCompositionCalculator;

impl BodyCompositionCalculator {
    /// Waist (cm) / hip (cm)
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` if waist or hip is absent
    pub fn waist_to_hip_ratio(&self, m: &Measurements) -> CalculationResult<f64> {
        match (m.waist, m.hip) {
            (Some(waist), Some(hip)) if hip > 0.0 => Ok(waist / hip),
            (Some(_), Some(hip)) => Err(CalculationError::NonPositive {
                calculation: "waist to hip ratio",
                field: "hip",
                value: hip,
            }),
            _ => Err(CalculationError::MissingMeasurement {
                calculation: "waist to hip ratio",
                fields: "Waist and hip measurements are",
            }),
        }
    }

    /// Waist (cm) / height (cm)
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` if waist is absent and `NonPositive`
    /// if height is not positive
    pub fn waist_to_height_ratio(&self, m: &Measurements) -> CalculationResult<f64> {
        let waist = m.waist.ok_or(CalculationError::MissingMeasurement {
            calculation: "waist to height ratio",
            fields: "Waist and height are",
        })?;
        let height_cm = positive_height_cm(m, "waist to height ratio")?;
        Ok(waist / height_cm)
    }

    /// Body fat percentage using the U.S. Navy method
    ///
    /// - Men: 86.010 × log10(waist − neck) − 70.041 × log10(height) + 36.76
    /// - Women: 163.205 × log10(waist + hip − neck) − 97.684 × log10(height) − 78.387
    ///
    /// # Errors
    ///
    /// Returns an error if gender is absent, height is not positive, a
    /// required girth is absent, or the girth combination is not positive
    pub fn body_fat_percentage(&self, m: &Measurements) -> CalculationResult<f64> {
        let gender = m
            .gender
            .ok_or(CalculationError::MissingGender("body fat percentage"))?;
        let height_cm = positive_height_cm(m, "body fat percentage")?;
        match gender {
            Gender::Male => male_body_fat(m, height_cm),
            Gender::Female => female_body_fat(m, height_cm),
        }
    }

    /// Lean body mass (kg) using the Boer formula
    ///
    /// # Errors
    ///
    /// Returns `MissingGender` if gender is absent
    pub fn lean_body_mass(&self, m: &Measurements) -> CalculationResult<f64> {
        let height_cm = meters_to_cm(m.height);
        match m.gender {
            Some(Gender::Male) => Ok(0.407 * m.weight + 0.267 * height_cm - 19.2),
            Some(Gender::Female) => Ok(0.252 * m.weight + 0.473 * height_cm - 48.3),
            None => Err(CalculationError::MissingGender("lean body mass")),
        }
    }
}

/// Height in centimeters; must be positive
fn positive_height_cm(m: &Measurements, calculation: &'static str) -> CalculationResult<f64> {
    if m.height <= 0.0 {
        return Err(CalculationError::NonPositive {
            calculation,
            field: "height",
            value: m.height,
        });
    }
    Ok(meters_to_cm(m.height))
}

fn male_body_fat(m: &Measurements, height_cm: f64) -> CalculationResult<f64> {
    let (Some(waist), Some(neck)) = (m.waist, m.neck) else {
        return Err(CalculationError::MissingMeasurement {
            calculation: "body fat percentage for male",
            fields: "Waist and neck are",
        });
    };
    let waist_neck_difference = waist - neck;
    if waist_neck_difference <= 0.0 {
        return Err(CalculationError::WaistNotGreaterThanNeck);
    }

    Ok(86.01 * waist_neck_difference.log10() - 70.041 * height_cm.log10() + 36.76)
}

fn female_body_fat(m: &Measurements, height_cm: f64) -> CalculationResult<f64> {
    let (Some(waist), Some(hip), Some(neck)) = (m.waist, m.hip, m.neck) else {
        return Err(CalculationError::MissingMeasurement {
            calculation: "body fat percentage for female",
            fields: "Waist, hip and neck are",
        });
    };
    let girth_sum = waist + hip - neck;
    if girth_sum <= 0.0 {
        return Err(CalculationError::NonPositiveGirthSum);
    }

    Ok(163.205 * girth_sum.log10() - 97.684 * height_cm.log10() - 78.387)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::person;

    fn male() -> Measurements {
        Measurements {
            gender: Some(Gender::Male),
            waist: Some(80.0),
            hip: Some(95.0),
            neck: Some(37.0),
            ..person(70.0, 1.75)
        }
    }

    fn female() -> Measurements {
        Measurements {
            gender: Some(Gender::Female),
            waist: Some(85.0),
            hip: Some(100.0),
            neck: Some(34.0),
            ..person(75.0, 1.65)
        }
    }

    #[test]
    fn test_waist_to_hip_ratio() {
        let ratio = BodyCompositionCalculator.waist_to_hip_ratio(&male()).unwrap();
        assert!((ratio - 80.0 / 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_waist_to_hip_requires_hip() {
        let m = Measurements { hip: None, ..male() };
        let err = BodyCompositionCalculator.waist_to_hip_ratio(&m).unwrap_err();
        assert!(matches!(err, CalculationError::MissingMeasurement { .. }));
    }

    #[test]
    fn test_waist_to_hip_zero_hip() {
        let m = Measurements { hip: Some(0.0), ..male() };
        assert!(BodyCompositionCalculator.waist_to_hip_ratio(&m).is_err());
    }

    #[test]
    fn test_waist_to_height_ratio() {
        let ratio = BodyCompositionCalculator.waist_to_height_ratio(&male()).unwrap();
        assert!((ratio - 80.0 / 175.0).abs() < 1e-12);

        let m = Measurements { waist: None, ..male() };
        assert!(BodyCompositionCalculator.waist_to_height_ratio(&m).is_err());
    }

    #[test]
    fn test_waist_to_height_zero_height() {
        let m = Measurements { height: 0.0, ..male() };
        assert_eq!(
            BodyCompositionCalculator.waist_to_height_ratio(&m).unwrap_err(),
            CalculationError::NonPositive {
                calculation: "waist to height ratio",
                field: "height",
                value: 0.0,
            }
        );
    }

    #[test]
    fn test_male_body_fat() {
        let bf = BodyCompositionCalculator.body_fat_percentage(&male()).unwrap();
        assert!((bf - 20.15).abs() < 0.01);
    }

    #[test]
    fn test_female_body_fat() {
        let bf = BodyCompositionCalculator.body_fat_percentage(&female()).unwrap();
        assert!((bf - 60.62).abs() < 0.01);
    }

    #[test]
    fn test_female_body_fat_requires_hip() {
        let m = Measurements { hip: None, ..female() };
        let err = BodyCompositionCalculator.body_fat_percentage(&m).unwrap_err();
        assert!(err.to_string().contains("Waist, hip and neck are required"));
    }

    #[test]
    fn test_male_waist_must_exceed_neck() {
        let m = Measurements {
            waist: Some(37.0),
            ..male()
        };
        assert_eq!(
            BodyCompositionCalculator.body_fat_percentage(&m).unwrap_err(),
            CalculationError::WaistNotGreaterThanNeck
        );
    }

    #[test]
    fn test_female_girth_sum_must_be_positive() {
        let m = Measurements {
            waist: Some(10.0),
            hip: Some(10.0),
            neck: Some(30.0),
            ..female()
        };
        assert_eq!(
            BodyCompositionCalculator.body_fat_percentage(&m).unwrap_err(),
            CalculationError::NonPositiveGirthSum
        );
    }

    #[test]
    fn test_body_fat_zero_height() {
        for m in [male(), female()] {
            let m = Measurements { height: 0.0, ..m };
            let err = BodyCompositionCalculator.body_fat_percentage(&m).unwrap_err();
            assert!(matches!(
                err,
                CalculationError::NonPositive { field: "height", .. }
            ));
        }
    }

    #[test]
    fn test_body_fat_without_gender() {
        let m = Measurements { gender: None, ..male() };
        let err = BodyCompositionCalculator.body_fat_percentage(&m).unwrap_err();
        assert!(err.to_string().starts_with("Invalid gender"));
    }

    #[test]
    fn test_lean_body_mass() {
        let lbm = BodyCompositionCalculator.lean_body_mass(&male()).unwrap();
        assert!((lbm - 56.015).abs() < 1e-9);

        let lbm = BodyCompositionCalculator.lean_body_mass(&female()).unwrap();
        assert!((lbm - 48.645).abs() < 1e-9);

        let m = Measurements { gender: None, ..male() };
        assert_eq!(
            BodyCompositionCalculator.lean_body_mass(&m).unwrap_err(),
            CalculationError::MissingGender("lean body mass")
        );
    }
}
