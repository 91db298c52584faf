//! In-memory queries over user records: sorting, grouping, filtering,
//! aggregation and joining.
//!
//! ```
//! use user_query::{Privilege, User, UserQueryService};
//!
//! let users = vec![
//!     User::new("Bob", "Smith", 30u32, [Privilege::Create]),
//!     User::new("Amy", "Smith", 25u32, [Privilege::Create, Privilege::Read]),
//!     User::new("Zoe", "Lee", 30u32, []),
//! ];
//!
//! let service = UserQueryService::new();
//! assert_eq!(service.names_reverse_sorted(&users), vec!["Zoe", "Bob", "Amy"]);
//! assert_eq!(service.most_frequent_last_name(&users), Some("Smith"));
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use user_query_domain::{
    QueryConfig, TieBreak,
    analytics::{LastNameTally, SortOrder, SortSpec, SortStrategy},
    filtering::{self, AgeRange, UserFilter, UserPredicate},
    model::{Privilege, User, UserBuilder},
    options::SortKey,
};
pub use user_query_shared_kernel::{
    Age, ConfigError, DomainError, ErrorContext, FirstName, LastName, Result, UserQueryError,
};
pub use user_query_usecase::UserQueryService;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a service from JSON configuration text.
pub fn service_from_json(config: &str) -> Result<UserQueryService> {
    let parsed = QueryConfig::from_json_str(config).context("parsing query configuration")?;
    log::debug!("user_query v{VERSION}: loaded {parsed:?}");
    UserQueryService::with_config(parsed).context("validating query configuration")
}

/// Builds a service from YAML configuration text.
#[cfg(feature = "yaml")]
pub fn service_from_yaml(config: &str) -> Result<UserQueryService> {
    let parsed = QueryConfig::from_yaml_str(config).context("parsing query configuration")?;
    log::debug!("user_query v{VERSION}: loaded {parsed:?}");
    UserQueryService::with_config(parsed).context("validating query configuration")
}
