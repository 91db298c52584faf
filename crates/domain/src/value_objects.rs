//! Value objects shared with the kernel crate.

pub use user_query_shared_kernel::value_objects::{Age, FirstName, LastName};
