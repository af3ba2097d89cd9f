//! Package name, version and compile time
//!
//! Attached to every [`HealthReport`](crate::health::HealthReport) so a saved
//! report can be traced to the calculator release that produced it.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// RFC 3339 UTC timestamp, or `"unknown"` outside a cargo build
    pub built_at: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        built_at: match option_env!("HEALTHCALC_BUILT_AT") {
            Some(built_at) => built_at,
            None => "unknown",
        },
    };
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} (built {})", self.name, self.version, self.built_at)
    }
}
