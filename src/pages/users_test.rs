use super::*;

#[test]
fn next_status_toggles_between_active_and_disabled() {
    assert_eq!(next_status("active"), "disabled");
    assert_eq!(next_status("disabled"), "active");
}

#[test]
fn next_status_enables_unknown_states() {
    assert_eq!(next_status("suspended"), "active");
}

#[test]
fn validate_new_user_trims_both_fields() {
    assert_eq!(
        validate_new_user("  alice  ", "  key-1  "),
        Ok(("alice".to_owned(), "key-1".to_owned()))
    );
}

#[test]
fn validate_new_user_requires_both_fields() {
    assert_eq!(
        validate_new_user("", "key-1"),
        Err("Enter both a username and an API key.")
    );
    assert_eq!(
        validate_new_user("alice", "   "),
        Err("Enter both a username and an API key.")
    );
}
