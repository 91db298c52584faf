use std::collections::{BTreeMap, HashMap};

use user_query_domain::{
    QueryConfig,
    analytics::{self, LastNameTally, SortStrategy},
    filtering::{self, UserPredicate},
    grouping,
    model::{Privilege, User},
    projection,
};
use user_query_shared_kernel::Result;

/// Read-only queries over a list of users.
///
/// The service owns nothing but its [`QueryConfig`]; every query borrows the
/// input slice and hands back borrowed views into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQueryService {
    config: QueryConfig,
}

impl UserQueryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QueryConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("user query service configured: {config:?}");
        Ok(Self { config })
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn names_reverse_sorted<'a>(&self, users: &'a [User]) -> Vec<&'a str> {
        let names = projection::names_reverse_sorted(users);
        log::debug!("names_reverse_sorted: {} users", users.len());
        names
    }

    pub fn sort_by_age_desc_then_name_asc<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        self.sort_by(users, &SortStrategy::age_desc_then_first_name())
    }

    pub fn sort_by<'a>(&self, users: &'a [User], strategy: &SortStrategy) -> Vec<&'a User> {
        log::debug!("sort_by: {} users, {} keys", users.len(), strategy.specs().len());
        strategy.sorted(users)
    }

    pub fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        let privileges = grouping::distinct_privileges(users);
        log::debug!("distinct_privileges: {} users -> {} privileges", users.len(), privileges.len());
        privileges
    }

    pub fn first_user_older_than<'a>(&self, users: &'a [User], age: i64) -> Option<&'a User> {
        let found = filtering::first_user_older_than(users, age);
        log::debug!("first_user_older_than({age}): found={}", found.is_some());
        found
    }

    pub fn group_by_privilege_count<'a>(&self, users: &'a [User]) -> BTreeMap<usize, Vec<&'a User>> {
        let groups = grouping::group_by_privilege_count(users);
        log::debug!("group_by_privilege_count: {} users -> {} groups", users.len(), groups.len());
        groups
    }

    pub fn average_age(&self, users: &[User]) -> f64 {
        let average = analytics::average_age_or(users, self.config.empty_average);
        log::debug!("average_age: {} users -> {average}", users.len());
        average
    }

    pub fn most_frequent_last_name<'a>(&self, users: &'a [User]) -> Option<&'a str> {
        let tally = LastNameTally::from_users(users);
        let name = tally.most_frequent(self.config.min_last_name_occurrences, self.config.tie_break);
        log::debug!("most_frequent_last_name: {} distinct names -> {name:?}", tally.len());
        name
    }

    pub fn filter_by<'a>(&self, users: &'a [User], predicates: &[&UserPredicate<'_>]) -> Vec<&'a User> {
        let kept = filtering::filter_by(users, predicates);
        log::debug!("filter_by: {} predicates kept {}/{}", predicates.len(), kept.len(), users.len());
        kept
    }

    pub fn join_by<F>(&self, users: &[User], delimiter: &str, map_fn: F) -> String
    where
        F: Fn(&User) -> String,
    {
        log::debug!("join_by: {} users with {delimiter:?}", users.len());
        projection::join_by(users, delimiter, map_fn)
    }

    pub fn group_by_privilege<'a>(&self, users: &'a [User]) -> BTreeMap<Privilege, Vec<&'a User>> {
        let groups = grouping::group_by_privilege(users);
        log::debug!("group_by_privilege: {} users -> {} privileges", users.len(), groups.len());
        groups
    }

    pub fn count_by_last_name(&self, users: &[User]) -> HashMap<String, usize> {
        let counts = analytics::count_by_last_name(users);
        log::debug!("count_by_last_name: {} users -> {} names", users.len(), counts.len());
        counts
    }
}
