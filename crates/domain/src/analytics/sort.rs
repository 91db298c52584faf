// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::{model::User, options::SortKey};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// One sort key with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// Ordered chain of sort specs; later specs only break ties left by earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    /// Creates a strategy from ordered specs.
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    /// Age descending, then first name ascending.
    pub fn age_desc_then_first_name() -> Self {
        Self::new(vec![SortSpec::descending(SortKey::Age), SortSpec::ascending(SortKey::FirstName)])
    }

    /// Whether the strategy has no keys.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    /// Returns borrowed users in sorted order. The sort is stable, so users that
    /// compare equal on every key keep their input order.
    pub fn sorted<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut view: Vec<&User> = users.iter().collect();
        if !self.specs.is_empty() {
            view.sort_by(|a, b| self.compare(a, b));
        }
        view
    }

    /// Compares two users key by key.
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::age_desc_then_first_name()
    }
}

impl SortKey {
    #[inline]
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Age => a.age().cmp(&b.age()),
            Self::FirstName => a.first_name().cmp(b.first_name()),
            Self::LastName => a.last_name().cmp(b.last_name()),
            Self::PrivilegeCount => a.privilege_count().cmp(&b.privilege_count()),
        }
    }
}

/// Sorts users by age descending, then first name ascending.
pub fn sort_by_age_desc_then_name_asc(users: &[User]) -> Vec<&User> {
    SortStrategy::age_desc_then_first_name().sorted(users)
}
