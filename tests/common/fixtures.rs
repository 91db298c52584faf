// tests/common/fixtures.rs
// User fixtures for integration tests.
use user_query::{Privilege, User};

/// Bob/Amy Smith and Zoe Lee.
#[allow(dead_code)]
pub fn scenario_users() -> Vec<User> {
    vec![
        User::new("Bob", "Smith", 30u32, [Privilege::Create]),
        User::new("Amy", "Smith", 25u32, [Privilege::Create, Privilege::Read]),
        User::new("Zoe", "Lee", 30u32, []),
    ]
}

/// A larger roster with two last names tied at the top.
#[allow(dead_code)]
pub fn office_roster() -> Vec<User> {
    vec![
        User::builder("Hana", "Sato").age(41u32).privileges([Privilege::Read, Privilege::Update]).build(),
        User::builder("Ken", "Tanaka").age(29u32).privilege(Privilege::Read).build(),
        User::builder("Yui", "Sato").age(35u32).build(),
        User::builder("Ren", "Tanaka").age(52u32).privileges(Privilege::ALL).build(),
        User::builder("Mio", "Ito").age(23u32).privilege(Privilege::Delete).build(),
    ]
}

#[allow(dead_code)]
pub fn first_names<'a>(users: &[&'a User]) -> Vec<&'a str> {
    users.iter().map(|u| u.first_name().as_str()).collect()
}
