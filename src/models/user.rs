//! User model
//!
//! `UserRecord` is what a caller hands in: loosely typed, possibly imperial,
//! possibly partial. `Measurements` is what validation hands out: typed enums,
//! required fields present, never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Measurement system of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// kg, m, cm
    Metric,
    /// lbs, ft, in
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from the exact lowercase literal
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "meters",
            UnitSystem::Imperial => "feet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Physical activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Lightly,
    /// Moderate exercise 3-5 days/week
    Moderately,
    /// Hard exercise 6-7 days/week
    Very,
    /// Very hard exercise or a physical job
    Extremely,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Lightly => "lightly",
            ActivityLevel::Moderately => "moderately",
            ActivityLevel::Very => "very",
            ActivityLevel::Extremely => "extremely",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly" => Some(ActivityLevel::Lightly),
            "moderately" => Some(ActivityLevel::Moderately),
            "very" => Some(ActivityLevel::Very),
            "extremely" => Some(ActivityLevel::Extremely),
            _ => None,
        }
    }
}

/// Raw user record as supplied by a caller
///
/// Weight is kg or lbs, height is meters or feet, girths are cm or inches,
/// depending on `unit_system`. Enum-like fields are kept as strings so that
/// validation can report bad values instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_weight_goal: Option<f64>,
}

/// Optional numeric keys, checked before anything else
const OPTIONAL_NUMERIC_KEYS: [&str; 7] = [
    "age",
    "waist",
    "hip",
    "neck",
    "dailyCalories",
    "weightGoal",
    "weeksToWeightGoal",
];

const TEXT_KEYS: [&str; 3] = ["unitSystem", "gender", "activityLevel"];

const REQUIRED_NUMERIC_KEYS: [&str; 2] = ["weight", "height"];

impl UserRecord {
    /// A metric record with only the required fields set
    pub fn metric(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight: Some(weight_kg),
            height: Some(height_m),
            unit_system: Some(UnitSystem::Metric.as_str().to_string()),
            ..Default::default()
        }
    }

    /// An imperial record with only the required fields set
    pub fn imperial(weight_lbs: f64, height_ft: f64) -> Self {
        Self {
            weight: Some(weight_lbs),
            height: Some(height_ft),
            unit_system: Some(UnitSystem::Imperial.as_str().to_string()),
            ..Default::default()
        }
    }

    /// Parse a record from JSON, rejecting values of the wrong JSON type
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            ValidationError::new(
                "record",
                ValidationErrorKind::MalformedRecord(e.to_string()),
                json,
            )
        })?;
        Self::from_json_value(value)
    }

    /// Type-check and deserialize an already parsed JSON value
    pub fn from_json_value(value: Value) -> ValidationResult<Self> {
        let record = value.to_string();
        let Some(object) = value.as_object() else {
            return Err(ValidationError::new(
                "record",
                ValidationErrorKind::MalformedRecord("expected a JSON object".to_string()),
                record,
            ));
        };

        let present = |key: &str| object.get(key).filter(|v| !v.is_null());

        for key in OPTIONAL_NUMERIC_KEYS {
            if present(key).is_some_and(|v| !v.is_number()) {
                return Err(ValidationError::new(
                    key,
                    ValidationErrorKind::NotANumber(key),
                    record,
                ));
            }
        }
        for key in TEXT_KEYS {
            if present(key).is_some_and(|v| !v.is_string()) {
                return Err(ValidationError::new(
                    key,
                    ValidationErrorKind::NotAString(key),
                    record,
                ));
            }
        }
        for key in REQUIRED_NUMERIC_KEYS {
            if present(key).is_some_and(|v| !v.is_number()) {
                return Err(ValidationError::new(
                    key,
                    ValidationErrorKind::NotANumber(key),
                    record,
                ));
            }
        }

        serde_json::from_value(value).map_err(|e| {
            ValidationError::new(
                "record",
                ValidationErrorKind::MalformedRecord(e.to_string()),
                record,
            )
        })
    }

    /// JSON form used as context in validation errors
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// A validated user record
///
/// Outside this crate a `Measurements` comes from
/// [`crate::validation::validate`] or [`crate::HealthCalculator::measurements`];
/// it cannot be built with a struct literal. The calculators expect metric
/// values, so pass a validated record through [`crate::units::to_metric`]
/// before handing it to one directly.
///
/// ```compile_fail
/// use healthcalc::{Measurements, UnitSystem};
///
/// let m = Measurements {
///     weight: 70.0,
///     height: 1.75,
///     age: None,
///     gender: None,
///     waist: None,
///     hip: None,
///     neck: None,
///     unit_system: UnitSystem::Imperial,
///     activity_level: None,
///     daily_calories: None,
///     weight_goal: None,
///     weeks_to_weight_goal: None,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Measurements {
    pub weight: f64,
    pub height: f64,
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub neck: Option<f64>,
    pub unit_system: UnitSystem,
    pub activity_level: Option<ActivityLevel>,
    pub daily_calories: Option<f64>,
    pub weight_goal: Option<f64>,
    pub weeks_to_weight_goal: Option<f64>,
}

impl Measurements {
    pub fn is_metric(&self) -> bool {
        self.unit_system == UnitSystem::Metric
    }
}
