//! Unit handling module
//!
//! Imperial to metric conversion of user records.

pub mod constants;
pub mod converter;

pub use constants::{
    feet_to_meters, inches_to_cm, lbs_to_kg, meters_to_cm, CM_PER_IN, CM_PER_M, KG_PER_LB,
    M_PER_FT,
};
pub use converter::to_metric;
