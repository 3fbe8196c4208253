use super::*;

#[test]
fn request_headers_include_defaults() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer tok123");
    let headers = request_headers(&defaults, &[]);
    assert_eq!(headers, vec![("Authorization".to_owned(), "Bearer tok123".to_owned())]);
}

#[test]
fn request_headers_without_credential_has_no_authorization() {
    let defaults = RequestDefaults::new();
    let headers = request_headers(&defaults, &[("Accept", "application/json")]);
    assert_eq!(headers, vec![("Accept".to_owned(), "application/json".to_owned())]);
}

#[test]
fn per_request_header_overrides_default() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer tok123");
    let headers = request_headers(&defaults, &[("authorization", "Basic xyz")]);
    assert_eq!(headers, vec![("authorization".to_owned(), "Basic xyz".to_owned())]);
}

#[test]
fn json_request_headers_carry_credential_and_accept() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer tok123");
    assert_eq!(
        json_request_headers(&defaults),
        vec![
            ("Authorization".to_owned(), "Bearer tok123".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ]
    );
}

#[test]
fn json_request_headers_follow_credential_removal() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer tok123");
    defaults.remove_default("Authorization");
    assert_eq!(json_request_headers(&defaults), vec![("Accept".to_owned(), "application/json".to_owned())]);
}

#[test]
fn profile_summary_tolerates_missing_email() {
    let profile: ProfileSummary = serde_json::from_str(r#"{ "name": "Ada" }"#).unwrap();
    assert_eq!(profile, ProfileSummary { name: "Ada".to_owned(), email: None });
}
