//! Health calculator facade
//!
//! [`create_health_calculator`] validates a raw record, converts it to metric
//! and wires up one instance of every calculator. The resulting
//! [`HealthCalculator`] is read-only: every getter recomputes from the stored
//! record, calling the calculators in dependency order.

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::calculators::{
    BmiCalculator, BmiType, BmrCalculator, BmrEquation, BodyCompositionCalculator,
    CalorieCalculator, TdeeCalculator,
};
use crate::error::{CalculationResult, ValidationResult};
use crate::models::{Measurements, UserRecord};
use crate::units::to_metric;
use crate::validation::validate;

/// Validate, copy and convert a user record, then build a calculator for it
///
/// # Errors
///
/// Returns the first validation failure; no calculator is produced in that case
pub fn create_health_calculator(user: &UserRecord) -> ValidationResult<HealthCalculator> {
    let validated = validate(user)?;
    let metric = to_metric(validated);
    Ok(HealthCalculator::new(metric))
}

/// Read-only set of health metrics for one user
#[derive(Debug, Clone)]
pub struct HealthCalculator {
    user: Measurements,
    /// BMR equation behind the calorie getters
    energy_equation: BmrEquation,
    bmi_calculator: BmiCalculator,
    body_composition_calculator: BodyCompositionCalculator,
    bmr_calculator: BmrCalculator,
    tdee_calculator: TdeeCalculator,
    calorie_calculator: CalorieCalculator,
}

impl HealthCalculator {
    fn new(user: Measurements) -> Self {
        debug_assert!(user.is_metric());
        tracing::info!(
            "Created health calculator ({:.2} kg, {:.2} m)",
            user.weight,
            user.height
        );
        Self {
            user,
            energy_equation: BmrEquation::default(),
            bmi_calculator: BmiCalculator,
            body_composition_calculator: BodyCompositionCalculator,
            bmr_calculator: BmrCalculator,
            tdee_calculator: TdeeCalculator,
            calorie_calculator: CalorieCalculator,
        }
    }

    /// Same as [`create_health_calculator`]
    pub fn from_record(user: &UserRecord) -> ValidationResult<Self> {
        create_health_calculator(user)
    }

    /// Parse, type-check and validate a JSON user record
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let record = UserRecord::from_json(json)?;
        create_health_calculator(&record)
    }

    /// Use a different BMR equation for the calorie getters
    pub fn with_energy_equation(mut self, equation: BmrEquation) -> Self {
        self.energy_equation = equation;
        self
    }

    /// The metric record all calculations use
    pub fn measurements(&self) -> &Measurements {
        &self.user
    }

    pub fn energy_equation(&self) -> BmrEquation {
        self.energy_equation
    }

    // ========================================================================
    // BMI
    // ========================================================================

    pub fn bmi(&self) -> f64 {
        self.bmi_calculator.bmi(&self.user)
    }

    pub fn bmi_type(&self) -> CalculationResult<BmiType> {
        self.bmi_calculator.bmi_type(self.bmi())
    }

    pub fn bmi_prime(&self) -> f64 {
        self.bmi_calculator.bmi_prime(self.bmi())
    }

    /// (min, max) weight in kg for a normal BMI at this height
    pub fn ideal_weight(&self) -> (f64, f64) {
        self.bmi_calculator.ideal_weight(&self.user)
    }

    // ========================================================================
    // Body composition
    // ========================================================================

    pub fn waist_to_hip_ratio(&self) -> CalculationResult<f64> {
        self.body_composition_calculator.waist_to_hip_ratio(&self.user)
    }

    pub fn waist_to_height_ratio(&self) -> CalculationResult<f64> {
        self.body_composition_calculator
            .waist_to_height_ratio(&self.user)
    }

    pub fn body_fat_percentage(&self) -> CalculationResult<f64> {
        self.body_composition_calculator.body_fat_percentage(&self.user)
    }

    pub fn lean_body_mass(&self) -> CalculationResult<f64> {
        self.body_composition_calculator.lean_body_mass(&self.user)
    }

    // ========================================================================
    // Energy expenditure
    // ========================================================================

    pub fn bmr(&self, equation: BmrEquation) -> CalculationResult<f64> {
        self.bmr_calculator.bmr(&self.user, equation)
    }

    pub fn bmr_harris_benedict(&self) -> CalculationResult<f64> {
        self.bmr(BmrEquation::HarrisBenedict)
    }

    pub fn bmr_mifflin_st_jeor(&self) -> CalculationResult<f64> {
        self.bmr(BmrEquation::MifflinStJeor)
    }

    /// BMR with the given equation, scaled by activity level
    pub fn tdee(&self, equation: BmrEquation) -> CalculationResult<f64> {
        let bmr = self.bmr(equation)?;
        self.tdee_calculator.tdee(&self.user, bmr)
    }

    pub fn tdee_harris_benedict(&self) -> CalculationResult<f64> {
        self.tdee(BmrEquation::HarrisBenedict)
    }

    pub fn tdee_mifflin_st_jeor(&self) -> CalculationResult<f64> {
        self.tdee(BmrEquation::MifflinStJeor)
    }

    // ========================================================================
    // Calorie goals
    // ========================================================================

    /// TDEE minus daily calorie intake
    pub fn caloric_surplus_or_deficit(&self) -> CalculationResult<f64> {
        let tdee = self.tdee(self.energy_equation)?;
        self.calorie_calculator.surplus_or_deficit(&self.user, tdee)
    }

    pub fn estimated_weight_change_weekly(&self) -> CalculationResult<f64> {
        let balance = self.caloric_surplus_or_deficit()?;
        self.calorie_calculator
            .weight_change_weekly(&self.user, balance)
    }

    pub fn estimated_weight_change_monthly(&self) -> CalculationResult<f64> {
        let balance = self.caloric_surplus_or_deficit()?;
        self.calorie_calculator
            .weight_change_monthly(&self.user, balance)
    }

    pub fn estimated_weeks_to_weight_goal(&self) -> CalculationResult<f64> {
        let balance = self.caloric_surplus_or_deficit()?;
        self.calorie_calculator
            .weeks_to_weight_goal(&self.user, balance)
    }

    /// Daily intake that reaches the weight goal in `weeksToWeightGoal` weeks
    pub fn calories_for_weight_goal(&self) -> CalculationResult<f64> {
        let tdee = self.tdee(self.energy_equation)?;
        self.calorie_calculator
            .calories_for_weight_goal(&self.user, tdee)
    }

    // ========================================================================
    // Report
    // ========================================================================

    /// Evaluate every metric; metrics whose inputs are missing are `None`
    pub fn report(&self) -> HealthReport {
        HealthReport {
            measurements: self.user,
            energy_equation: self.energy_equation,
            bmi: self.bmi(),
            bmi_type: available("bmi_type", self.bmi_type()),
            bmi_prime: self.bmi_prime(),
            ideal_weight: self.ideal_weight(),
            waist_to_hip_ratio: available("waist_to_hip_ratio", self.waist_to_hip_ratio()),
            waist_to_height_ratio: available(
                "waist_to_height_ratio",
                self.waist_to_height_ratio(),
            ),
            body_fat_percentage: available("body_fat_percentage", self.body_fat_percentage()),
            lean_body_mass: available("lean_body_mass", self.lean_body_mass()),
            bmr_harris_benedict: available("bmr_harris_benedict", self.bmr_harris_benedict()),
            bmr_mifflin_st_jeor: available("bmr_mifflin_st_jeor", self.bmr_mifflin_st_jeor()),
            tdee_harris_benedict: available("tdee_harris_benedict", self.tdee_harris_benedict()),
            tdee_mifflin_st_jeor: available("tdee_mifflin_st_jeor", self.tdee_mifflin_st_jeor()),
            caloric_surplus_or_deficit: available(
                "caloric_surplus_or_deficit",
                self.caloric_surplus_or_deficit(),
            ),
            estimated_weight_change_weekly: available(
                "estimated_weight_change_weekly",
                self.estimated_weight_change_weekly(),
            ),
            estimated_weight_change_monthly: available(
                "estimated_weight_change_monthly",
                self.estimated_weight_change_monthly(),
            ),
            estimated_weeks_to_weight_goal: available(
                "estimated_weeks_to_weight_goal",
                self.estimated_weeks_to_weight_goal(),
            ),
            calories_for_weight_goal: available(
                "calories_for_weight_goal",
                self.calories_for_weight_goal(),
            ),
            generated_at: chrono::Utc::now().to_rfc3339(),
            build: BuildInfo::CURRENT,
        }
    }
}

fn available<T>(metric: &str, result: CalculationResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Skipping {}: {}", metric, e);
            None
        }
    }
}

/// Every metric for one user, as produced by [`HealthCalculator::report`]
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub measurements: Measurements,
    pub energy_equation: BmrEquation,
    pub bmi: f64,
    pub bmi_type: Option<BmiType>,
    pub bmi_prime: f64,
    pub ideal_weight: (f64, f64),
    pub waist_to_hip_ratio: Option<f64>,
    pub waist_to_height_ratio: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub lean_body_mass: Option<f64>,
    pub bmr_harris_benedict: Option<f64>,
    pub bmr_mifflin_st_jeor: Option<f64>,
    pub tdee_harris_benedict: Option<f64>,
    pub tdee_mifflin_st_jeor: Option<f64>,
    pub caloric_surplus_or_deficit: Option<f64>,
    pub estimated_weight_change_weekly: Option<f64>,
    pub estimated_weight_change_monthly: Option<f64>,
    pub estimated_weeks_to_weight_goal: Option<f64>,
    pub calories_for_weight_goal: Option<f64>,
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub build: BuildInfo,
}
