//! Registration route hosting the auth form in signup mode.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::net::types::AuthMode;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Signup/> }
}
