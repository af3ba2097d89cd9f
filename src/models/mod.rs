//! Data models
//!
//! The user record in its raw and validated forms.

mod user;

pub use user::{ActivityLevel, Gender, Measurements, UnitSystem, UserRecord};
