// crates/domain/src/model/user.rs
use serde::{Deserialize, Serialize};

use super::Privilege;
use crate::value_objects::{Age, FirstName, LastName};

/// Immutable user record. Two users are equal when all fields are equal.
///
/// `privileges` keeps the caller's order and may contain duplicates; nothing
/// in this crate deduplicates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    first_name: FirstName,
    last_name: LastName,
    age: Age,
    #[serde(default)]
    privileges: Vec<Privilege>,
}

impl User {
    pub fn new(
        first_name: impl Into<FirstName>,
        last_name: impl Into<LastName>,
        age: impl Into<Age>,
        privileges: impl IntoIterator<Item = Privilege>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
            privileges: privileges.into_iter().collect(),
        }
    }

    pub fn builder(first_name: impl Into<FirstName>, last_name: impl Into<LastName>) -> UserBuilder {
        UserBuilder::new(first_name, last_name)
    }

    #[inline]
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    #[inline]
    pub fn age(&self) -> Age {
        self.age
    }

    #[inline]
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    /// Size of the privilege collection, duplicates included.
    #[inline]
    pub fn privilege_count(&self) -> usize {
        self.privileges.len()
    }

    #[inline]
    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }
}

/// Fluent builder for [`User`]; age defaults to zero and privileges to none.
#[derive(Debug, Clone)]
pub struct UserBuilder {
    first_name: FirstName,
    last_name: LastName,
    age: Age,
    privileges: Vec<Privilege>,
}

impl UserBuilder {
    pub fn new(first_name: impl Into<FirstName>, last_name: impl Into<LastName>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: Age::default(),
            privileges: Vec::new(),
        }
    }

    pub fn age(mut self, age: impl Into<Age>) -> Self {
        self.age = age.into();
        self
    }

    pub fn privilege(mut self, privilege: Privilege) -> Self {
        self.privileges.push(privilege);
        self
    }

    pub fn privileges(mut self, privileges: impl IntoIterator<Item = Privilege>) -> Self {
        self.privileges.extend(privileges);
        self
    }

    pub fn build(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            privileges: self.privileges,
        }
    }
}
