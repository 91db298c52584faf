// crates/shared-kernel/src/value_objects/age.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Age in whole years. Negative ages are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    #[inline]
    pub const fn new(years: u32) -> Self {
        Self(years)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_older_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl From<u32> for Age {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Age> for u32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

impl From<Age> for f64 {
    fn from(value: Age) -> Self {
        f64::from(value.0)
    }
}

impl PartialEq<u32> for Age {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed.parse::<u32>().map(Self::new).map_err(|e| DomainError::InvalidAge {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })
    }
}
