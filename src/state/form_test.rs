use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_record_has_all_fields_empty() {
    let fields = AuthFields::default();
    assert_eq!(fields.name, "");
    assert_eq!(fields.email, "");
    assert_eq!(fields.password, "");
}

// =============================================================
// with_field
// =============================================================

#[test]
fn with_field_updates_only_the_addressed_field() {
    let fields = AuthFields::default()
        .with_field(AuthField::Name, "Ada")
        .with_field(AuthField::Email, "ada@example.com");

    let updated = fields.clone().with_field(AuthField::Password, "hunter2");
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.password, "hunter2");

    // The source record is not mutated in place.
    assert_eq!(fields.password, "");
}

#[test]
fn with_field_replaces_an_existing_value() {
    let fields = AuthFields::default()
        .with_field(AuthField::Email, "first@example.com")
        .with_field(AuthField::Email, "second@example.com");
    assert_eq!(fields.email, "second@example.com");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn payload_always_carries_all_three_keys() {
    // A signin submission leaves `name` untouched; the wire payload
    // still includes it as an empty string.
    let fields = AuthFields::default()
        .with_field(AuthField::Email, "ada@example.com")
        .with_field(AuthField::Password, "hunter2");

    let json = serde_json::to_value(&fields).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "",
            "email": "ada@example.com",
            "password": "hunter2",
        })
    );
}
