// crates/domain/src/filtering.rs
use std::fmt;

use crate::{
    model::{Privilege, User},
    value_objects::Age,
};

/// Predicate over a borrowed user.
pub type UserPredicate<'p> = dyn Fn(&User) -> bool + 'p;

/// Users matching every predicate, in input order. No predicates means every
/// user matches.
pub fn filter_by<'a>(users: &'a [User], predicates: &[&UserPredicate<'_>]) -> Vec<&'a User> {
    users.iter().filter(|&u| predicates.iter().all(|p| p(u))).collect()
}

/// First user, in input order, strictly older than `age`. The threshold is
/// signed, so a negative value matches the first user.
pub fn first_user_older_than(users: &[User], age: i64) -> Option<&User> {
    users.iter().find(|u| i64::from(u.age().value()) > age)
}

/// Owned conjunction of predicates, for callers that build filters up front.
#[derive(Default)]
pub struct UserFilter<'p> {
    predicates: Vec<Box<UserPredicate<'p>>>,
}

impl<'p> UserFilter<'p> {
    pub fn new() -> Self {
        Self { predicates: Vec::new() }
    }

    pub fn with(mut self, predicate: impl Fn(&User) -> bool + 'p) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[inline]
    pub fn matches(&self, user: &User) -> bool {
        self.predicates.iter().all(|p| p(user))
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|&u| self.matches(u)).collect()
    }
}

impl fmt::Debug for UserFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFilter").field("predicates", &self.predicates.len()).finish()
    }
}

/// Inclusive age range; an open bound matches everything on that side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: Option<Age>,
    pub max: Option<Age>,
}

impl AgeRange {
    pub fn new(min: Option<Age>, max: Option<Age>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, age: Age) -> bool {
        self.min.is_none_or(|m| age >= m) && self.max.is_none_or(|m| age <= m)
    }
}

pub fn older_than(age: impl Into<Age>) -> impl Fn(&User) -> bool {
    let age = age.into();
    move |u| u.age().is_older_than(age)
}

pub fn age_between(range: AgeRange) -> impl Fn(&User) -> bool {
    move |u| range.contains(u.age())
}

pub fn has_privilege(privilege: Privilege) -> impl Fn(&User) -> bool {
    move |u| u.has_privilege(privilege)
}

pub fn last_name_is(name: impl Into<String>) -> impl Fn(&User) -> bool {
    let name = name.into();
    move |u| u.last_name().as_str() == name
}
