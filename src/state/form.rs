//! Field record for the auth form.
//!
//! DESIGN
//! ======
//! The record is replaced wholesale on every keystroke via
//! `with_field`, so components never hold per-field state. It also
//! serializes directly as the request payload: the backend receives
//! all three keys regardless of mode, with unused fields empty.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;

/// Current values of the auth form's inputs.
///
/// All three fields are always present; a field the user has not
/// touched is the empty string, never absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Addressable fields of [`AuthFields`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthFields {
    /// Return a new record with `field` replaced by `value` and every
    /// other field unchanged.
    #[must_use]
    pub fn with_field(mut self, field: AuthField, value: &str) -> Self {
        match field {
            AuthField::Name => self.name = value.to_owned(),
            AuthField::Email => self.email = value.to_owned(),
            AuthField::Password => self.password = value.to_owned(),
        }
        self
    }
}
