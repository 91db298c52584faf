use std::collections::HashMap;

use crate::{
    config::{QueryConfig, TieBreak},
    model::User,
};

/// Sentinel returned by [`average_age`] for an empty input.
pub const EMPTY_AVERAGE: f64 = -1.0;

/// Mean age of `users`, or `-1.0` when there are none.
pub fn average_age(users: &[User]) -> f64 {
    average_age_or(users, EMPTY_AVERAGE)
}

/// Mean age of `users`, or `empty` when there are none.
pub fn average_age_or(users: &[User], empty: f64) -> f64 {
    if users.is_empty() {
        return empty;
    }
    let total: f64 = users.iter().map(|u| f64::from(u.age())).sum();
    total / users.len() as f64
}

/// Number of users per distinct last name.
pub fn count_by_last_name(users: &[User]) -> HashMap<String, usize> {
    let mut map: HashMap<String, usize> = HashMap::new();
    for user in users {
        *map.entry(user.last_name().to_string()).or_insert(0) += 1;
    }
    map
}

/// Most frequent last name among names occurring at least twice.
/// Ties go to the name seen first in `users`.
pub fn most_frequent_last_name(users: &[User]) -> Option<&str> {
    most_frequent_last_name_with(users, &QueryConfig::default())
}

pub fn most_frequent_last_name_with<'a>(users: &'a [User], config: &QueryConfig) -> Option<&'a str> {
    LastNameTally::from_users(users).most_frequent(config.min_last_name_occurrences, config.tie_break)
}

/// Last names with their counts, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastNameTally<'a> {
    entries: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> LastNameTally<'a> {
    pub fn from_users(users: &'a [User]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<(&'a str, usize)> = Vec::new();
        for user in users {
            let name = user.last_name().as_str();
            match index.get(name) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(name, entries.len());
                    entries.push((name, 1));
                }
            }
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[(&'a str, usize)] {
        &self.entries
    }

    pub fn count_of(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-count name among those with at least `min_occurrences`.
    pub fn most_frequent(&self, min_occurrences: usize, tie_break: TieBreak) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(name, count) in &self.entries {
            if count < min_occurrences {
                continue;
            }
            best = match best {
                None => Some((name, count)),
                Some((_, top)) if count > top => Some((name, count)),
                Some((current, top)) if count == top && replaces_on_tie(tie_break, current, name) => {
                    log::trace!("tie at count {count}: {name:?} replaces {current:?} ({tie_break:?})");
                    Some((name, count))
                }
                keep => keep,
            };
        }
        best.map(|(name, _)| name)
    }
}

fn replaces_on_tie(tie_break: TieBreak, current: &str, candidate: &str) -> bool {
    match tie_break {
        TieBreak::FirstEncountered => false,
        TieBreak::LastEncountered => true,
        TieBreak::Alphabetical => candidate < current,
    }
}
