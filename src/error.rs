//! Error types
//!
//! Validation errors abort construction of a calculator; calculation errors
//! are raised by individual getters and only fail that call.

use thiserror::Error;

/// What was wrong with a user record field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("User record is malformed: {0}")]
    MalformedRecord(String),

    #[error("{0} must be a number if provided")]
    NotANumber(&'static str),

    #[error("{0} must be a string if provided")]
    NotAString(&'static str),

    #[error("Unit system is required, imperial or metric")]
    MissingUnitSystem,

    #[error("Unit system must be metric or imperial, got '{0}'")]
    InvalidUnitSystem(String),

    #[error("Weight is required and must be a number")]
    MissingWeight,

    #[error("Weight using the {system} system must be between 0-{max} {unit}, got {value}")]
    WeightOutOfRange {
        system: &'static str,
        max: f64,
        unit: &'static str,
        value: f64,
    },

    #[error("Height is required and must be a number")]
    MissingHeight,

    #[error("Height using the {system} system must be between 0-{max} {unit}, got {value}")]
    HeightOutOfRange {
        system: &'static str,
        max: f64,
        unit: &'static str,
        value: f64,
    },

    #[error("Invalid gender '{0}': gender must be male or female")]
    InvalidGender(String),

    #[error("Activity level must be sedentary, lightly, moderately, very or extremely, got '{0}'")]
    InvalidActivityLevel(String),

    #[error("{field} must be equal or greater than 0, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// A rejected user record, with the offending field and the record itself
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation error in user record {record}: {kind}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    /// The full record as JSON
    pub record: String,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ValidationErrorKind, record: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            record: record.into(),
        }
    }
}

/// Errors raised by a single calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("{fields} required for {calculation}")]
    MissingMeasurement {
        calculation: &'static str,
        fields: &'static str,
    },

    #[error("Invalid gender: gender must be either 'male' or 'female' for {0}")]
    MissingGender(&'static str),

    #[error("{field} must be greater than 0 for {calculation}, got {value}")]
    NonPositive {
        calculation: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid values: waist must be greater than neck for males")]
    WaistNotGreaterThanNeck,

    #[error("Invalid values: the sum of waist + hip - neck must be greater than zero for females")]
    NonPositiveGirthSum,

    #[error("BMI type out of range. Please check your values. BMI: {0}")]
    BmiOutOfRange(f64),

    #[error("Weight goal is unreachable with a caloric balance of {0} kcal/day")]
    UnreachableGoal(f64),
}

/// Any error produced by the crate
#[derive(Debug, Error)]
pub enum HealthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub type CalculationResult<T> = Result<T, CalculationError>;

pub type HealthResult<T> = Result<T, HealthError>;
