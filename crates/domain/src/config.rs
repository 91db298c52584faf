// crates/domain/src/config.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use user_query_shared_kernel::{ConfigResult, DomainError, DomainResult};

/// Rule used to pick a single last name when several share the highest count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The name whose first occurrence in the input comes earliest.
    #[default]
    #[serde(rename = "first")]
    FirstEncountered,
    /// The name whose first occurrence in the input comes latest.
    #[serde(rename = "last")]
    LastEncountered,
    /// The lexicographically smallest name.
    Alphabetical,
}

impl FromStr for TieBreak {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_encountered" => Ok(Self::FirstEncountered),
            "last" | "last_encountered" => Ok(Self::LastEncountered),
            "alphabetical" | "alpha" => Ok(Self::Alphabetical),
            other => Err(DomainError::InvalidTieBreak { value: other.to_string() }),
        }
    }
}

/// Tunables for the query operations. The defaults reproduce the reference
/// behaviour: names must occur at least twice, ties go to the first name seen,
/// and an empty average is `-1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub min_last_name_occurrences: usize,
    pub tie_break: TieBreak,
    pub empty_average: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            min_last_name_occurrences: 2,
            tie_break: TieBreak::FirstEncountered,
            empty_average: -1.0,
        }
    }
}

impl QueryConfig {
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.min_last_name_occurrences == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "min_last_name_occurrences must be at least 1".to_string(),
            });
        }
        if !self.empty_average.is_finite() {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("empty_average must be finite, got {}", self.empty_average),
            });
        }
        Ok(())
    }
}
