use super::*;

#[test]
fn validate_new_model_trims_both_fields() {
    assert_eq!(
        validate_new_model("  Claude  ", "  claude-sonnet  "),
        Ok(("Claude".to_owned(), "claude-sonnet".to_owned()))
    );
}

#[test]
fn validate_new_model_requires_both_fields() {
    assert_eq!(
        validate_new_model("", "claude-sonnet"),
        Err("Enter both a title and a model id.")
    );
    assert_eq!(
        validate_new_model("Claude", "  "),
        Err("Enter both a title and a model id.")
    );
}

#[test]
fn parse_cost_defaults_empty_to_free() {
    assert_eq!(parse_cost(""), Some(0.0));
    assert_eq!(parse_cost("   "), Some(0.0));
}

#[test]
fn parse_cost_accepts_decimals() {
    assert_eq!(parse_cost("0.003"), Some(0.003));
    assert_eq!(parse_cost(" 1.5 "), Some(1.5));
}

#[test]
fn parse_cost_rejects_garbage_and_negatives() {
    assert_eq!(parse_cost("free"), None);
    assert_eq!(parse_cost("-0.1"), None);
}
