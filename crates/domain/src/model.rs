pub mod privilege;
pub mod user;

pub use privilege::Privilege;
pub use user::{User, UserBuilder};
