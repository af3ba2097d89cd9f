//! Calorie balance and weight goal projections
//!
//! Uses the 7700 kcal per kg rule, scaled by body weight relative to a
//! 70 kg reference person.

use crate::error::{CalculationError, CalculationResult};
use crate::models::Measurements;

/// Energy content of one kilogram of body weight (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;
/// Body weight the 7700 kcal/kg rule is calibrated for (kg)
pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieCalculator;

impl CalorieCalculator {
    /// TDEE minus daily intake (kcal/day)
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` if daily calories are absent
    pub fn surplus_or_deficit(&self, m: &Measurements, tdee: f64) -> CalculationResult<f64> {
        let daily_calories = m.daily_calories.ok_or(CalculationError::MissingMeasurement {
            calculation: "calorie calculation",
            fields: "dailyCalories is",
        })?;
        Ok(tdee - daily_calories)
    }

    /// Estimated weight change (kg) over `days` at a constant calorie balance
    ///
    /// # Errors
    ///
    /// Returns `NonPositive` if the body weight is not positive
    pub fn weight_change(&self, m: &Measurements, balance: f64, days: f64) -> CalculationResult<f64> {
        if m.weight <= 0.0 {
            return Err(CalculationError::NonPositive {
                calculation: "weight change estimate",
                field: "weight",
                value: m.weight,
            });
        }
        let adjusted_kcal_per_kg = KCAL_PER_KG * (m.weight / REFERENCE_WEIGHT_KG);
        Ok(balance * days / adjusted_kcal_per_kg)
    }

    pub fn weight_change_weekly(&self, m: &Measurements, balance: f64) -> CalculationResult<f64> {
        self.weight_change(m, balance, DAYS_PER_WEEK)
    }

    pub fn weight_change_monthly(&self, m: &Measurements, balance: f64) -> CalculationResult<f64> {
        self.weight_change(m, balance, DAYS_PER_MONTH)
    }

    /// Whole weeks needed to move from current weight to the weight goal
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` without a weight goal and
    /// `UnreachableGoal` when the calorie balance is zero
    pub fn weeks_to_weight_goal(&self, m: &Measurements, balance: f64) -> CalculationResult<f64> {
        let weight_goal = require_weight_goal(m)?;
        let weekly_change = self.weight_change_weekly(m, balance)?;
        if weekly_change == 0.0 {
            return Err(CalculationError::UnreachableGoal(balance));
        }

        Ok(((weight_goal - m.weight).abs() / weekly_change.abs()).ceil())
    }

    /// Daily intake (kcal) that reaches the weight goal in the requested weeks
    ///
    /// The weekly weight delta is turned into a daily calorie adjustment and
    /// added to TDEE when gaining, subtracted when losing.
    ///
    /// # Errors
    ///
    /// Returns `MissingMeasurement` without a weight goal or timeframe and
    /// `NonPositive` for a zero-week timeframe
    pub fn calories_for_weight_goal(&self, m: &Measurements, tdee: f64) -> CalculationResult<f64> {
        let weight_goal = require_weight_goal(m)?;
        let weeks = m.weeks_to_weight_goal.ok_or(CalculationError::MissingMeasurement {
            calculation: "calorie goal calculation",
            fields: "weeksToWeightGoal is",
        })?;
        if weeks <= 0.0 {
            return Err(CalculationError::NonPositive {
                calculation: "calorie goal calculation",
                field: "weeksToWeightGoal",
                value: weeks,
            });
        }

        let weekly_kg = (weight_goal - m.weight) / weeks;
        let daily_adjustment = weekly_kg * KCAL_PER_KG / DAYS_PER_WEEK;
        Ok(tdee + daily_adjustment)
    }
}

fn require_weight_goal(m: &Measurements) -> CalculationResult<f64> {
    m.weight_goal.ok_or(CalculationError::MissingMeasurement {
        calculation: "weight goal calculation",
        fields: "weightGoal is",
    })
}
