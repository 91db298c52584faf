// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConfigError, ConfigResult, DomainError, DomainResult, ErrorContext, Result, UserQueryError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Age, FirstName, LastName};
