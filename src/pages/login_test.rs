use super::*;

#[test]
fn validate_token_input_trims() {
    assert_eq!(validate_token_input("  tok123 \n"), Ok("tok123".to_owned()));
}

#[test]
fn validate_token_input_requires_value() {
    assert_eq!(validate_token_input("   "), Err("Enter a token first."));
}

#[test]
fn validate_token_input_rejects_inner_whitespace() {
    assert_eq!(validate_token_input("tok 123"), Err("Tokens cannot contain spaces."));
}
