//! Signup/signin form: field entry, one POST to the auth endpoint,
//! then token persistence and redirect.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::labelled_input::LabelledInput;
use crate::config::AppConfig;
use crate::net::types::AuthMode;
use crate::state::form::{AuthField, AuthFields};
use crate::state::session::Session;

/// Path the user lands on after a successful login.
#[cfg(any(test, feature = "hydrate"))]
const BLOGS_PATH: &str = "/blogs";

/// Mode-dependent copy: heading, submit label, toggle prompt, toggle
/// link label, toggle link path.
fn mode_copy(mode: AuthMode) -> (&'static str, &'static str, &'static str, &'static str, &'static str) {
    match mode {
        AuthMode::Signup => (
            "Create Your Account",
            "Sign Up",
            "Already have an account?",
            "Sign in",
            "/signin",
        ),
        AuthMode::Signin => (
            "Sign In to Your Account",
            "Sign In",
            "Don't have an account?",
            "Sign up",
            "/signup",
        ),
    }
}

/// The name field is collected during registration only.
fn shows_name_field(mode: AuthMode) -> bool {
    mode == AuthMode::Signup
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_alert(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Signup => "Error while signing up",
        AuthMode::Signin => "Error while signing in",
    }
}

/// Apply a finished auth request: on success persist the token and
/// request navigation to the blogs feed; on failure log the cause and
/// surface a single alert. The field record is left untouched either
/// way, so the form stays usable after a failure.
#[cfg(any(test, feature = "hydrate"))]
fn apply_auth_outcome(
    mode: AuthMode,
    result: Result<String, String>,
    session: &Session,
    navigate: impl FnOnce(&str),
    alert: impl FnOnce(&str),
) {
    match result {
        Ok(jwt) => {
            session.store_token(&jwt);
            navigate(BLOGS_PATH);
        }
        Err(err) => {
            leptos::logging::error!("auth request failed: {err}");
            alert(auth_failed_alert(mode));
        }
    }
}

/// Authentication form, parameterized over signup vs signin.
///
/// Renders the mode-appropriate heading and fields, and submits the
/// full field record to the backend. There is no in-flight guard:
/// overlapping submissions each run to completion and race to store
/// the token and navigate.
#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<Session>();
    let fields = RwSignal::new(AuthFields::default());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let (heading, submit_label, toggle_prompt, toggle_link_label, toggle_link_path) =
        mode_copy(mode);

    let field_input = move |field: AuthField| {
        Callback::new(move |value: String| {
            fields.set(fields.get_untracked().with_field(field, &value));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let payload = fields.get_untracked();
            let backend_url = config.backend_url.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::authenticate(&backend_url, mode, &payload).await;
                apply_auth_outcome(
                    mode,
                    result,
                    &session,
                    |path| navigate(path, NavigateOptions::default()),
                    |message| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(message);
                        }
                    },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">{heading}</h1>
                <p class="auth-card__toggle">
                    {toggle_prompt}
                    " "
                    <a class="auth-card__toggle-link" href=toggle_link_path>
                        {toggle_link_label}
                    </a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    {shows_name_field(mode)
                        .then(|| {
                            view! {
                                <LabelledInput
                                    label="Name"
                                    placeholder="Name"
                                    name="name"
                                    value=Signal::derive(move || fields.with(|f| f.name.clone()))
                                    on_input=field_input(AuthField::Name)
                                />
                            }
                        })}
                    <LabelledInput
                        label="Email"
                        placeholder="Email"
                        name="email"
                        value=Signal::derive(move || fields.with(|f| f.email.clone()))
                        on_input=field_input(AuthField::Email)
                    />
                    <LabelledInput
                        label="Password"
                        placeholder="Password"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || fields.with(|f| f.password.clone()))
                        on_input=field_input(AuthField::Password)
                    />
                    <button class="auth-form__submit" type="submit">
                        {submit_label}
                    </button>
                </form>
            </div>
        </div>
    }
}
