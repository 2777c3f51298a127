//! Login route hosting the auth form in signin mode.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::net::types::AuthMode;

#[component]
pub fn SigninPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Signin/> }
}
