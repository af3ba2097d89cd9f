//! Record conversion
//!
//! Turns a validated record of either unit system into a metric one.

use super::constants::{feet_to_meters, inches_to_cm, lbs_to_kg};
use crate::models::{Measurements, UnitSystem};

/// Convert a validated record to metric units
///
/// Metric records come back unchanged. For imperial records each field is
/// converted on its own and only if present: height ft -> m, weight and
/// weight goal lbs -> kg, waist/hip/neck in -> cm. Age, calories, weeks and
/// the enum fields carry over as they are.
pub fn to_metric(measurements: Measurements) -> Measurements {
    match measurements.unit_system {
        UnitSystem::Metric => measurements,
        UnitSystem::Imperial => {
            let converted = Measurements {
                height: feet_to_meters(measurements.height),
                weight: lbs_to_kg(measurements.weight),
                waist: measurements.waist.map(inches_to_cm),
                hip: measurements.hip.map(inches_to_cm),
                neck: measurements.neck.map(inches_to_cm),
                weight_goal: measurements.weight_goal.map(lbs_to_kg),
                unit_system: UnitSystem::Metric,
                ..measurements
            };
            tracing::debug!(
                "Converted imperial record to metric: {:.3} kg, {:.4} m",
                converted.weight,
                converted.height
            );
            converted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};

    fn imperial_record() -> Measurements {
        Measurements {
            weight: 121.0,
            height: 5.9,
            age: Some(25.0),
            gender: Some(Gender::Male),
            waist: Some(29.5),
            hip: Some(35.4),
            neck: Some(13.8),
            unit_system: UnitSystem::Imperial,
            activity_level: Some(ActivityLevel::Very),
            daily_calories: Some(2400.0),
            weight_goal: Some(140.0),
            weeks_to_weight_goal: Some(12.0),
        }
    }

    #[test]
    fn test_metric_is_identity() {
        let metric = Measurements {
            unit_system: UnitSystem::Metric,
            ..imperial_record()
        };
        assert_eq!(to_metric(metric), metric);
    }

    #[test]
    fn test_imperial_fields_converted() {
        let metric = to_metric(imperial_record());
        assert_eq!(metric.unit_system, UnitSystem::Metric);
        assert!((metric.weight - 54.884632).abs() < 1e-9);
        assert!((metric.height - 1.79832).abs() < 1e-9);
        assert!((metric.waist.unwrap() - 74.93).abs() < 1e-9);
        assert!((metric.hip.unwrap() - 89.916).abs() < 1e-9);
        assert!((metric.neck.unwrap() - 35.052).abs() < 1e-9);
        assert!((metric.weight_goal.unwrap() - 63.50288).abs() < 1e-9);
    }

    #[test]
    fn test_unitless_fields_untouched() {
        let metric = to_metric(imperial_record());
        assert_eq!(metric.age, Some(25.0));
        assert_eq!(metric.gender, Some(Gender::Male));
        assert_eq!(metric.activity_level, Some(ActivityLevel::Very));
        assert_eq!(metric.daily_calories, Some(2400.0));
        assert_eq!(metric.weeks_to_weight_goal, Some(12.0));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let sparse = Measurements {
            waist: None,
            hip: None,
            neck: None,
            weight_goal: None,
            ..imperial_record()
        };
        let metric = to_metric(sparse);
        assert_eq!(metric.waist, None);
        assert_eq!(metric.hip, None);
        assert_eq!(metric.neck, None);
        assert_eq!(metric.weight_goal, None);
    }

    #[test]
    fn test_conversion_is_idempotent_after_first_pass() {
        let once = to_metric(imperial_record());
        assert_eq!(to_metric(once), once);
    }
}
