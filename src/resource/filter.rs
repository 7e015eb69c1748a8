//! Resource filters
//!
//! A filter scopes a data-access call to a parent, e.g. `DetectorId=abc`
//! when listing GuardDuty findings.

use serde::Serialize;
use std::fmt;

/// Filter for resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceFilter {
    pub param: String,
    pub values: Vec<String>,
}

impl ResourceFilter {
    pub fn new(param: &str, values: Vec<String>) -> Self {
        Self {
            param: param.to_string(),
            values,
        }
    }

    /// First value, which is the only one for parent filters
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

impl fmt::Display for ResourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.param, self.values.join(","))
    }
}
