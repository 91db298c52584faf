use std::collections::{BTreeMap, HashSet};

use crate::model::{Privilege, User};

/// Every privilege held by any user, each once, in order of first appearance
/// (users in input order, then each user's privileges in their given order).
pub fn distinct_privileges(users: &[User]) -> Vec<Privilege> {
    let mut seen: HashSet<Privilege> = HashSet::new();
    users
        .iter()
        .flat_map(|u| u.privileges().iter().copied())
        .filter(|p| seen.insert(*p))
        .collect()
}

/// Groups users by the size of their privilege collection. Duplicate
/// privileges on one user count towards the size.
pub fn group_by_privilege_count(users: &[User]) -> BTreeMap<usize, Vec<&User>> {
    group_by_key(users, User::privilege_count)
}

/// Maps each privilege to every user holding it. A user with several
/// privileges appears under each of them, but only once per privilege.
pub fn group_by_privilege(users: &[User]) -> BTreeMap<Privilege, Vec<&User>> {
    let mut map: BTreeMap<Privilege, Vec<&User>> = BTreeMap::new();
    for user in users {
        let mut held: Vec<Privilege> = user.privileges().to_vec();
        held.sort_unstable();
        held.dedup();
        for privilege in held {
            map.entry(privilege).or_default().push(user);
        }
    }
    map
}

/// Stable grouping: users keep their input order inside each bucket.
pub fn group_by_key<K, F>(users: &[User], key_fn: F) -> BTreeMap<K, Vec<&User>>
where
    K: Ord,
    F: Fn(&User) -> K,
{
    let mut map: BTreeMap<K, Vec<&User>> = BTreeMap::new();
    for user in users {
        map.entry(key_fn(user)).or_default().push(user);
    }
    map
}
