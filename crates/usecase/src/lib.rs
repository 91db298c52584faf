//! # Use Cases
//!
//! The query surface callers use:
//!
//! - [`service`]: [`UserQueryService`], one method per query, logging each call
//!   through the `log` facade
//!
//! Use cases depend on the domain and the shared kernel only.

#![allow(clippy::multiple_crate_versions)]

pub mod service;

pub use service::UserQueryService;
