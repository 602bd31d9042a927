use super::*;

#[test]
fn validate_key_input_trims_surrounding_whitespace() {
    assert_eq!(validate_key_input("  key-123  "), Ok("key-123".to_owned()));
}

#[test]
fn validate_key_input_rejects_empty_input() {
    assert_eq!(validate_key_input(""), Err("Enter an admin API key first."));
    assert_eq!(validate_key_input("   "), Err("Enter an admin API key first."));
}
