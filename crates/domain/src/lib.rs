//! # Domain
//!
//! User records and the pure query operations over them:
//!
//! - [`model`]: `User`, `Privilege`, `UserBuilder`
//! - [`analytics`]: multi-key sorting and aggregation (averages, last-name counts)
//! - [`grouping`]: privilege-based grouping and deduplication
//! - [`filtering`]: predicate conjunction and stock predicates
//! - [`projection`]: name listings and string joining
//! - [`config`]: tunables for tie-breaks and sentinels
//!
//! Nothing here mutates its input; results borrow from the slice passed in.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod filtering;
pub mod grouping;
pub mod model;
pub mod options;
pub mod projection;
pub mod value_objects;

pub use config::{QueryConfig, TieBreak};
pub use model::{Privilege, User, UserBuilder};
