//! User record validation
//!
//! Checks a raw record field by field and produces typed [`Measurements`].
//! The first violation found is returned; the input is never modified.

use crate::error::{ValidationError, ValidationErrorKind, ValidationResult};
use crate::models::{ActivityLevel, Gender, Measurements, UnitSystem, UserRecord};

/// Metric weight limit (kg)
pub const MAX_WEIGHT_KG: f64 = 700.0;
/// Imperial weight limit (lbs)
pub const MAX_WEIGHT_LBS: f64 = 1543.0;
/// Metric height limit (m), exclusive
pub const MAX_HEIGHT_M: f64 = 2.5;
/// Imperial height limit (ft), inclusive
pub const MAX_HEIGHT_FT: f64 = 8.2;

/// Below this age the formulas are not calibrated
pub const ADULT_AGE: f64 = 18.0;

/// Validate a raw user record
///
/// Rules are applied in order: numeric optional fields, unit system, weight,
/// height, gender, age, activity level, then non-negativity of the remaining
/// optional fields. An age under 18 only logs a warning.
pub fn validate(user: &UserRecord) -> ValidationResult<Measurements> {
    let fail = |field: &'static str, kind: ValidationErrorKind| {
        ValidationError::new(field, kind, user.to_json())
    };

    let optional_numbers = [
        ("age", user.age),
        ("waist", user.waist),
        ("hip", user.hip),
        ("neck", user.neck),
        ("dailyCalories", user.daily_calories),
        ("weightGoal", user.weight_goal),
        ("weeksToWeightGoal", user.weeks_to_weight_goal),
    ];
    for (field, value) in optional_numbers {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(fail(field, ValidationErrorKind::NotANumber(field)));
        }
    }

    let unit_system = match user.unit_system.as_deref() {
        None => return Err(fail("unitSystem", ValidationErrorKind::MissingUnitSystem)),
        Some(s) => UnitSystem::from_str(s).ok_or_else(|| {
            fail(
                "unitSystem",
                ValidationErrorKind::InvalidUnitSystem(s.to_string()),
            )
        })?,
    };

    let weight = validate_weight(user.weight, unit_system).map_err(|k| fail("weight", k))?;
    let height = validate_height(user.height, unit_system).map_err(|k| fail("height", k))?;

    let gender = match user.gender.as_deref() {
        None => None,
        Some(s) => Some(
            Gender::from_str(s)
                .ok_or_else(|| fail("gender", ValidationErrorKind::InvalidGender(s.to_string())))?,
        ),
    };

    if let Some(age) = user.age {
        non_negative("age", age).map_err(|k| fail("age", k))?;
        if age < ADULT_AGE {
            tracing::warn!(
                "Health calculation might not be accurate for individuals under 18 years old (age {})",
                age
            );
        }
    }

    let activity_level = match user.activity_level.as_deref() {
        None => None,
        Some(s) => Some(ActivityLevel::from_str(s).ok_or_else(|| {
            fail(
                "activityLevel",
                ValidationErrorKind::InvalidActivityLevel(s.to_string()),
            )
        })?),
    };

    let non_negative_fields = [
        ("dailyCalories", user.daily_calories),
        ("weightGoal", user.weight_goal),
        ("weeksToWeightGoal", user.weeks_to_weight_goal),
        ("waist", user.waist),
        ("hip", user.hip),
        ("neck", user.neck),
    ];
    for (field, value) in non_negative_fields {
        if let Some(v) = value {
            non_negative(field, v).map_err(|k| fail(field, k))?;
        }
    }

    tracing::debug!("Validation succeeded for {} record", unit_system.as_str());

    Ok(Measurements {
        weight,
        height,
        age: user.age,
        gender,
        waist: user.waist,
        hip: user.hip,
        neck: user.neck,
        unit_system,
        activity_level,
        daily_calories: user.daily_calories,
        weight_goal: user.weight_goal,
        weeks_to_weight_goal: user.weeks_to_weight_goal,
    })
}

/// Weight must lie in [0, max] for the unit system
fn validate_weight(weight: Option<f64>, system: UnitSystem) -> Result<f64, ValidationErrorKind> {
    let weight = match weight {
        Some(w) if w.is_finite() => w,
        _ => return Err(ValidationErrorKind::MissingWeight),
    };
    let max = match system {
        UnitSystem::Metric => MAX_WEIGHT_KG,
        UnitSystem::Imperial => MAX_WEIGHT_LBS,
    };
    if !(0.0..=max).contains(&weight) {
        return Err(ValidationErrorKind::WeightOutOfRange {
            system: system.as_str(),
            max,
            unit: system.weight_unit(),
            value: weight,
        });
    }
    Ok(weight)
}

/// Metric height must lie in (0, 2.5); imperial in [0, 8.2]
fn validate_height(height: Option<f64>, system: UnitSystem) -> Result<f64, ValidationErrorKind> {
    let height = match height {
        Some(h) if h.is_finite() => h,
        _ => return Err(ValidationErrorKind::MissingHeight),
    };
    let (in_range, max) = match system {
        UnitSystem::Metric => (height > 0.0 && height < MAX_HEIGHT_M, MAX_HEIGHT_M),
        UnitSystem::Imperial => ((0.0..=MAX_HEIGHT_FT).contains(&height), MAX_HEIGHT_FT),
    };
    if !in_range {
        return Err(ValidationErrorKind::HeightOutOfRange {
            system: system.as_str(),
            max,
            unit: system.height_unit(),
            value: height,
        });
    }
    Ok(height)
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationErrorKind> {
    if value < 0.0 {
        return Err(ValidationErrorKind::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    fn full_metric() -> UserRecord {
        UserRecord {
            age: Some(30.0),
            gender: Some("male".to_string()),
            waist: Some(80.0),
            hip: Some(95.0),
            neck: Some(37.0),
            activity_level: Some("moderately".to_string()),
            daily_calories: Some(2500.0),
            weight_goal: Some(75.0),
            weeks_to_weight_goal: Some(10.0),
            ..UserRecord::metric(70.0, 1.75)
        }
    }

    #[test]
    fn test_valid_record_produces_typed_measurements() {
        let m = validate(&full_metric()).unwrap();
        assert_eq!(m.unit_system, UnitSystem::Metric);
        assert_eq!(m.gender, Some(Gender::Male));
        assert_eq!(m.activity_level, Some(ActivityLevel::Moderately));
        assert_eq!(m.weight, 70.0);
        assert_eq!(m.weeks_to_weight_goal, Some(10.0));
    }

    #[test]
    fn test_input_not_modified() {
        let record = full_metric();
        let before = record.clone();
        validate(&record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn test_missing_unit_system() {
        let record = UserRecord {
            unit_system: None,
            ..UserRecord::metric(70.0, 1.75)
        };
        let err = validate(&record).unwrap_err();
        assert_eq!(err.field, "unitSystem");
        assert_eq!(err.kind, ValidationErrorKind::MissingUnitSystem);
        assert!(err.to_string().contains("Unit system is required"));
    }

    #[test]
    fn test_wrong_unit_system() {
        let record = UserRecord {
            unit_system: Some("wrong".to_string()),
            ..UserRecord::metric(70.0, 1.75)
        };
        let err = validate(&record).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::InvalidUnitSystem("wrong".to_string())
        );
    }

    #[test]
    fn test_weight_boundaries_metric() {
        assert!(validate(&UserRecord::metric(700.0, 1.75)).is_ok());
        assert!(validate(&UserRecord::metric(0.0, 1.75)).is_ok());

        let err = validate(&UserRecord::metric(700.0001, 1.75)).unwrap_err();
        assert_eq!(err.field, "weight");
        assert!(matches!(err.kind, ValidationErrorKind::WeightOutOfRange { .. }));

        let err = validate(&UserRecord::metric(-70.0, 1.75)).unwrap_err();
        assert_eq!(err.field, "weight");
    }

    #[test]
    fn test_weight_boundaries_imperial() {
        assert!(validate(&UserRecord::imperial(1543.0, 5.9)).is_ok());
        let err = validate(&UserRecord::imperial(1543.5, 5.9)).unwrap_err();
        assert!(err.to_string().contains("between 0-1543 lbs"));
    }

    #[test]
    fn test_missing_weight_and_height() {
        let record = UserRecord {
            weight: None,
            ..UserRecord::metric(70.0, 1.75)
        };
        assert_eq!(
            validate(&record).unwrap_err().kind,
            ValidationErrorKind::MissingWeight
        );

        let record = UserRecord {
            height: None,
            ..UserRecord::metric(70.0, 1.75)
        };
        assert_eq!(
            validate(&record).unwrap_err().kind,
            ValidationErrorKind::MissingHeight
        );
    }

    #[test]
    fn test_height_boundaries() {
        assert!(validate(&UserRecord::metric(70.0, 2.4999)).is_ok());
        assert_eq!(validate(&UserRecord::metric(70.0, 2.5)).unwrap_err().field, "height");
        assert_eq!(validate(&UserRecord::metric(70.0, 0.0)).unwrap_err().field, "height");

        assert!(validate(&UserRecord::imperial(150.0, 8.2)).is_ok());
        assert!(validate(&UserRecord::imperial(150.0, 0.0)).is_ok());
        assert_eq!(validate(&UserRecord::imperial(150.0, 8.3)).unwrap_err().field, "height");
    }

    #[test]
    fn test_nan_weight_is_missing() {
        let err = validate(&UserRecord::metric(f64::NAN, 1.75)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingWeight);
    }

    #[test]
    fn test_non_finite_optional_number() {
        let record = UserRecord {
            waist: Some(f64::INFINITY),
            ..UserRecord::metric(70.0, 1.75)
        };
        let err = validate(&record).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NotANumber("waist"));
    }

    #[test]
    fn test_invalid_gender() {
        let record = UserRecord {
            gender: Some("other".to_string()),
            ..UserRecord::metric(70.0, 1.75)
        };
        let err = validate(&record).unwrap_err();
        assert_eq!(err.field, "gender");
        assert!(err.to_string().contains("Invalid gender 'other'"));
    }

    #[test]
    fn test_invalid_activity_level() {
        let record = UserRecord {
            activity_level: Some("super".to_string()),
            ..UserRecord::metric(70.0, 1.75)
        };
        let err = validate(&record).unwrap_err();
        assert_eq!(err.field, "activityLevel");
    }

    #[test]
    fn test_minor_age_is_not_an_error() {
        let record = UserRecord {
            age: Some(16.0),
            ..UserRecord::metric(60.0, 1.70)
        };
        assert_eq!(validate(&record).unwrap().age, Some(16.0));
    }

    /// Log sink shared between the test and the subscriber it installs
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn validate_with_logs(record: &UserRecord) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            validate(record).unwrap();
        });
        logs.contents()
    }

    #[test]
    fn test_minor_age_logs_warning() {
        let record = UserRecord {
            age: Some(16.0),
            ..UserRecord::metric(60.0, 1.70)
        };
        let logs = validate_with_logs(&record);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("under 18 years old (age 16)"));
    }

    #[test]
    fn test_adult_age_logs_nothing() {
        for age in [18.0, 30.0] {
            let record = UserRecord {
                age: Some(age),
                ..UserRecord::metric(60.0, 1.70)
            };
            assert_eq!(validate_with_logs(&record), "");
        }
    }

    #[test]
    fn test_negative_optional_fields() {
        for (field, record) in [
            (
                "dailyCalories",
                UserRecord {
                    daily_calories: Some(-1.0),
                    ..UserRecord::metric(70.0, 1.75)
                },
            ),
            (
                "weightGoal",
                UserRecord {
                    weight_goal: Some(-5.0),
                    ..UserRecord::metric(70.0, 1.75)
                },
            ),
            (
                "weeksToWeightGoal",
                UserRecord {
                    weeks_to_weight_goal: Some(-2.0),
                    ..UserRecord::metric(70.0, 1.75)
                },
            ),
            (
                "age",
                UserRecord {
                    age: Some(-30.0),
                    ..UserRecord::metric(70.0, 1.75)
                },
            ),
            (
                "neck",
                UserRecord {
                    neck: Some(-37.0),
                    ..UserRecord::metric(70.0, 1.75)
                },
            ),
        ] {
            let err = validate(&record).unwrap_err();
            assert_eq!(err.field, field);
            assert!(matches!(err.kind, ValidationErrorKind::Negative { .. }));
        }
    }

    #[test]
    fn test_zero_goal_fields_are_valid() {
        let record = UserRecord {
            daily_calories: Some(0.0),
            weight_goal: Some(0.0),
            weeks_to_weight_goal: Some(0.0),
            ..UserRecord::metric(70.0, 1.75)
        };
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_error_carries_record() {
        let err = validate(&UserRecord::metric(800.0, 1.75)).unwrap_err();
        assert!(err.record.contains("\"weight\":800.0"));
        assert!(err.to_string().starts_with("Validation error in user record {"));
    }
}
