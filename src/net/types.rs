//! Wire schema for the auth endpoints.
//!
//! DESIGN
//! ======
//! The request payload is the form's field record itself
//! (`state::form::AuthFields`); only the response shape and the
//! signup/signin discriminator live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Which auth operation the form performs.
///
/// Fixed for the lifetime of a form instance: it selects the endpoint
/// path segment, which fields are shown, and the surrounding UI copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    Signin,
}

impl AuthMode {
    /// Path segment under `/api/v1/user/` for this operation.
    #[must_use]
    pub fn endpoint_path(self) -> &'static str {
        match self {
            AuthMode::Signup => "signup",
            AuthMode::Signin => "signin",
        }
    }
}

/// Successful auth response body.
///
/// A 2xx body without a string `jwt` field fails to decode and is
/// treated as a failed request rather than storing a bogus token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Opaque token for subsequent authenticated requests.
    pub jwt: String,
}
