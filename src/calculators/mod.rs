//! Health metric calculators
//!
//! Each calculator works on metric [`Measurements`](crate::models::Measurements)
//! and is stateless. Later calculators consume values from earlier ones:
//! BMR feeds TDEE, TDEE feeds the calorie calculations.

pub mod bmi;
pub mod bmr;
pub mod body_composition;
pub mod calories;
pub mod tdee;

pub use bmi::{BmiCalculator, BmiRange, BmiType, BMI_RANGES};
pub use bmr::{BmrCalculator, BmrEquation};
pub use body_composition::BodyCompositionCalculator;
pub use calories::{CalorieCalculator, KCAL_PER_KG, REFERENCE_WEIGHT_KG};
pub use tdee::{activity_factor, TdeeCalculator};
