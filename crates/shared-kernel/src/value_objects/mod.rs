// crates/shared-kernel/src/value_objects/mod.rs
pub mod age;
pub mod person_name;

pub use age::Age;
pub use person_name::{FirstName, LastName};
