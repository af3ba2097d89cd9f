//! Basal Metabolic Rate calculations
//!
//! # References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.

use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, CalculationResult};
use crate::models::{Gender, Measurements};
use crate::units::meters_to_cm;

/// Equation used to estimate BMR
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrEquation {
    /// Revised Harris-Benedict (1984)
    #[default]
    HarrisBenedict,
    /// Mifflin-St Jeor (1990)
    MifflinStJeor,
}

/// Linear BMR coefficients: constant + weight×kg + height×cm − age×years
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    constant: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const HARRIS_BENEDICT_MALE: Coefficients = Coefficients {
    constant: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

const HARRIS_BENEDICT_FEMALE: Coefficients = Coefficients {
    constant: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.33,
};

const MIFFLIN_ST_JEOR_MALE_OFFSET: f64 = 5.0;
const MIFFLIN_ST_JEOR_FEMALE_OFFSET: f64 = -161.0;

/// Inputs every BMR equation needs, checked once
struct BmrInputs {
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BmrCalculator;

impl BmrCalculator {
    /// BMR (kcal/day) with the chosen equation
    ///
    /// # Errors
    ///
    /// Returns an error if age or gender is absent, or if weight, height or
    /// age is not positive
    pub fn bmr(&self, m: &Measurements, equation: BmrEquation) -> CalculationResult<f64> {
        let inputs = bmr_inputs(m, equation)?;
        let bmr = match equation {
            BmrEquation::HarrisBenedict => harris_benedict(&inputs),
            BmrEquation::MifflinStJeor => mifflin_st_jeor(&inputs),
        };
        Ok(bmr)
    }

    /// Harris-Benedict: 88.362 + 13.397W + 4.799H − 5.677A (men),
    /// 447.593 + 9.247W + 3.098H − 4.330A (women)
    pub fn harris_benedict(&self, m: &Measurements) -> CalculationResult<f64> {
        self.bmr(m, BmrEquation::HarrisBenedict)
    }

    /// Mifflin-St Jeor: 10W + 6.25H − 5A + 5 (men) or − 161 (women)
    pub fn mifflin_st_jeor(&self, m: &Measurements) -> CalculationResult<f64> {
        self.bmr(m, BmrEquation::MifflinStJeor)
    }
}

fn bmr_inputs(m: &Measurements, equation: BmrEquation) -> CalculationResult<BmrInputs> {
    let calculation = match equation {
        BmrEquation::HarrisBenedict => "Harris-Benedict BMR",
        BmrEquation::MifflinStJeor => "Mifflin-St Jeor BMR",
    };

    let age = m.age.ok_or(CalculationError::MissingMeasurement {
        calculation,
        fields: "Age is",
    })?;
    let gender = m.gender.ok_or(CalculationError::MissingGender(calculation))?;

    for (field, value) in [("weight", m.weight), ("height", m.height), ("age", age)] {
        if value <= 0.0 {
            return Err(CalculationError::NonPositive {
                calculation,
                field,
                value,
            });
        }
    }

    Ok(BmrInputs {
        weight_kg: m.weight,
        height_cm: meters_to_cm(m.height),
        age,
        gender,
    })
}

fn harris_benedict(inputs: &BmrInputs) -> f64 {
    let c = match inputs.gender {
        Gender::Male => HARRIS_BENEDICT_MALE,
        Gender::Female => HARRIS_BENEDICT_FEMALE,
    };
    c.constant + c.weight * inputs.weight_kg + c.height * inputs.height_cm - c.age * inputs.age
}

fn mifflin_st_jeor(inputs: &BmrInputs) -> f64 {
    let gender_offset = match inputs.gender {
        Gender::Male => MIFFLIN_ST_JEOR_MALE_OFFSET,
        Gender::Female => MIFFLIN_ST_JEOR_FEMALE_OFFSET,
    };
    10.0 * inputs.weight_kg + 6.25 * inputs.height_cm - 5.0 * inputs.age + gender_offset
}
