//! Grant and award entries for the CV view

use crate::de;
use serde::{Deserialize, Serialize};

/// One grant or award line: a year and a free-text description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantAward {
    /// Award year; 0 when absent.
    #[serde(default, deserialize_with = "de::lenient_year")]
    pub year: i32,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub description: String,
}

impl GrantAward {
    pub fn new(year: i32, description: String) -> Self {
        Self { year, description }
    }
}
