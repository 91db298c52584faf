// tests/integration/end_to_end.rs
use user_query::{
    AgeRange, Privilege, SortStrategy, User, UserFilter, UserQueryService,
    filtering::{age_between, has_privilege},
};

#[path = "../common/mod.rs"]
mod common;
use common::{first_names, office_roster, scenario_users};

#[test]
fn scenario_matches_expected_results() {
    let users = scenario_users();
    let service = UserQueryService::new();

    assert_eq!(service.names_reverse_sorted(&users), vec!["Zoe", "Bob", "Amy"]);
    assert_eq!(first_names(&service.sort_by_age_desc_then_name_asc(&users)), vec!["Bob", "Zoe", "Amy"]);
    assert_eq!(service.most_frequent_last_name(&users), Some("Smith"));

    let by_count = service.group_by_privilege_count(&users);
    assert_eq!(first_names(&by_count[&0]), vec!["Zoe"]);
    assert_eq!(first_names(&by_count[&1]), vec!["Bob"]);
    assert_eq!(first_names(&by_count[&2]), vec!["Amy"]);

    let counts = service.count_by_last_name(&users);
    assert_eq!(counts.get("Smith"), Some(&2));
    assert_eq!(counts.get("Lee"), Some(&1));
}

#[test]
fn queries_leave_input_untouched() {
    let users = office_roster();
    let snapshot = users.clone();
    let service = UserQueryService::new();

    let _ = service.sort_by_age_desc_then_name_asc(&users);
    let _ = service.names_reverse_sorted(&users);
    let _ = service.group_by_privilege(&users);
    let _ = service.distinct_privileges(&users);

    assert_eq!(users, snapshot);
}

#[test]
fn tied_last_names_go_to_first_seen() {
    let users = office_roster();
    assert_eq!(UserQueryService::new().most_frequent_last_name(&users), Some("Sato"));
}

#[test]
fn filters_compose_from_stock_predicates() {
    let users = office_roster();
    let service = UserQueryService::new();

    let readers = has_privilege(Privilege::Read);
    let thirties_plus = age_between(AgeRange::new(Some(30u32.into()), None));
    assert_eq!(first_names(&service.filter_by(&users, &[&readers, &thirties_plus])), vec!["Hana", "Ren"]);

    let owned = UserFilter::new().with(has_privilege(Privilege::Delete)).with(|u: &User| u.age().value() < 30);
    assert_eq!(first_names(&owned.apply(&users)), vec!["Mio"]);
}

#[test]
fn group_by_privilege_lists_every_holder() {
    let users = office_roster();
    let groups = UserQueryService::new().group_by_privilege(&users);

    assert_eq!(groups.len(), 4);
    assert_eq!(first_names(&groups[&Privilege::Read]), vec!["Hana", "Ken", "Ren"]);
    assert_eq!(first_names(&groups[&Privilege::Create]), vec!["Ren"]);
    assert_eq!(first_names(&groups[&Privilege::Delete]), vec!["Ren", "Mio"]);
}

#[test]
fn distinct_privileges_follow_traversal_order() {
    let users = office_roster();
    assert_eq!(
        UserQueryService::new().distinct_privileges(&users),
        vec![Privilege::Read, Privilege::Update, Privilege::Create, Privilege::Delete]
    );
}

#[test]
fn parsed_strategy_drives_sorting() {
    let users = office_roster();
    let strategy: SortStrategy = "last_name,age:desc".parse().expect("strategy parses");
    let sorted = UserQueryService::new().sort_by(&users, &strategy);
    assert_eq!(first_names(&sorted), vec!["Mio", "Hana", "Yui", "Ren", "Ken"]);
}

#[test]
fn join_renders_roster_line() {
    let users = scenario_users();
    let line = UserQueryService::new().join_by(&users, " | ", |u| format!("{} ({})", u.first_name(), u.age()));
    assert_eq!(line, "Bob (30) | Amy (25) | Zoe (30)");
}

#[test]
fn users_round_trip_through_json() {
    let users = scenario_users();
    let json = serde_json::to_string(&users).expect("serializes");
    assert!(json.contains(r#""firstName":"Amy""#));
    assert!(json.contains(r#""privileges":["CREATE","READ"]"#));

    let decoded: Vec<User> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, users);
}
