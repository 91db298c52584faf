use std::cmp::Reverse;

use crate::model::User;

/// First names in descending lexicographic order. Duplicates are kept.
pub fn names_reverse_sorted(users: &[User]) -> Vec<&str> {
    let mut names: Vec<&str> = users.iter().map(|u| u.first_name().as_str()).collect();
    names.sort_by_key(|&name| Reverse(name));
    names
}

/// Maps each user through `map_fn` and joins the results with `delimiter`.
/// Empty input gives an empty string.
pub fn join_by<F>(users: &[User], delimiter: &str, map_fn: F) -> String
where
    F: Fn(&User) -> String,
{
    let mut out = String::new();
    for (i, user) in users.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&map_fn(user));
    }
    out
}
