// tests/integration/configuration.rs
use user_query::{ConfigError, DomainError, TieBreak, UserQueryError, service_from_json};

#[path = "../common/mod.rs"]
mod common;
use common::office_roster;

#[test]
fn empty_json_gives_default_service() {
    let service = service_from_json("{}").expect("defaults are valid");
    assert_eq!(service.config().tie_break, TieBreak::FirstEncountered);
    assert_eq!(service.average_age(&[]), -1.0);
}

#[test]
fn json_config_changes_tie_break() {
    let service = service_from_json(r#"{"tie_break":"last"}"#).expect("config is valid");
    assert_eq!(service.most_frequent_last_name(&office_roster()), Some("Tanaka"));
}

#[test]
fn malformed_json_is_wrapped_with_context() {
    let err = service_from_json("{ tie_break").expect_err("malformed json must fail");
    assert!(err.to_string().starts_with("parsing query configuration"));
    let UserQueryError::Context { source, .. } = err else {
        panic!("expected context wrapper");
    };
    assert!(matches!(*source, UserQueryError::Config(ConfigError::Parse { .. })));
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let err = service_from_json(r#"{"min_last_name_occurrences":0}"#).expect_err("zero threshold must fail");
    let UserQueryError::Context { context, source } = err else {
        panic!("expected context wrapper");
    };
    assert_eq!(context, "validating query configuration");
    assert!(matches!(*source, UserQueryError::Domain(DomainError::InvalidConfiguration { .. })));
}

#[test]
fn misspelled_key_surfaces_as_parse_error() {
    let err = service_from_json(r#"{"tiebreak":"last"}"#).expect_err("unknown key must fail");
    let UserQueryError::Context { source, .. } = err else {
        panic!("expected context wrapper");
    };
    assert!(matches!(*source, UserQueryError::Config(ConfigError::Parse { .. })));
}

#[test]
fn unknown_tie_break_fails_to_parse() {
    assert!(service_from_json(r#"{"tie_break":"coin-flip"}"#).is_err());
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_config_is_supported() {
    let service = user_query::service_from_yaml("tie_break: alphabetical\n").expect("yaml config is valid");
    assert_eq!(service.config().tie_break, TieBreak::Alphabetical);
}
