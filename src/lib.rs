//! Health Calculator Library
//!
//! Body metrics (BMI, body composition), energy expenditure (BMR, TDEE) and
//! calorie goal projections from a single metric or imperial user record.

pub mod build_info;
pub mod calculators;
pub mod error;
pub mod health;
pub mod models;
pub mod units;
pub mod validation;

pub use build_info::BuildInfo;
pub use calculators::{BmiType, BmrEquation};
pub use error::{
    CalculationError, CalculationResult, HealthError, HealthResult, ValidationError,
    ValidationErrorKind, ValidationResult,
};
pub use health::{create_health_calculator, HealthCalculator, HealthReport};
pub use models::{ActivityLevel, Gender, Measurements, UnitSystem, UserRecord};
