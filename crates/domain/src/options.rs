// crates/domain/src/options.rs
use std::str::FromStr;

use user_query_shared_kernel::DomainError;

use crate::analytics::{SortSpec, SortStrategy};

/// Sorting keys available for ordering users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Age,
    FirstName,
    LastName,
    PrivilegeCount,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "age" => Ok(Self::Age),
            "first_name" | "first" | "name" => Ok(Self::FirstName),
            "last_name" | "last" => Ok(Self::LastName),
            "privileges" | "privilege_count" => Ok(Self::PrivilegeCount),
            _ => Err(DomainError::InvalidSortSpec { spec: s.to_string() }),
        }
    }
}

/// Sort specification. Example: `age:desc,first_name`.
impl FromStr for SortStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        if specs.is_empty() {
            return Err(DomainError::InvalidSortSpec { spec: s.to_string() });
        }
        Ok(SortStrategy::new(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<SortSpec, DomainError> {
    let (key_str, desc) =
        part.split_once(':').map_or((part, false), |(k, d)| (k.trim(), d.trim().eq_ignore_ascii_case("desc")));

    let key = key_str.parse::<SortKey>()?;
    Ok(SortSpec::new(key, desc.into()))
}
