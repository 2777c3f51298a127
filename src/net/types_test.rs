use super::*;

// =============================================================
// AuthMode
// =============================================================

#[test]
fn endpoint_path_maps_modes_to_segments() {
    assert_eq!(AuthMode::Signup.endpoint_path(), "signup");
    assert_eq!(AuthMode::Signin.endpoint_path(), "signin");
}

#[test]
fn modes_are_distinct() {
    assert_ne!(AuthMode::Signup, AuthMode::Signin);
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn response_decodes_jwt_field() {
    let resp: AuthResponse = serde_json::from_str(r#"{"jwt":"abc123"}"#).expect("decode");
    assert_eq!(resp.jwt, "abc123");
}

#[test]
fn response_ignores_extra_fields() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"jwt":"abc123","user":{"id":1}}"#).expect("decode");
    assert_eq!(resp.jwt, "abc123");
}

#[test]
fn response_without_jwt_fails_to_decode() {
    let result = serde_json::from_str::<AuthResponse>(r#"{"message":"ok"}"#);
    assert!(result.is_err());
}

#[test]
fn response_with_non_string_jwt_fails_to_decode() {
    let result = serde_json::from_str::<AuthResponse>(r#"{"jwt":null}"#);
    assert!(result.is_err());
}
