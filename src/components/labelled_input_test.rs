use super::*;

#[test]
fn omitted_type_defaults_to_plain_text() {
    assert_eq!(resolve_input_type(""), "text");
}

#[test]
fn explicit_type_passes_through() {
    assert_eq!(resolve_input_type("password"), "password");
    assert_eq!(resolve_input_type("email"), "email");
}
