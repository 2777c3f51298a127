//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{blogs::BlogsPage, signin::SigninPage, signup::SignupPage};
use crate::state::session::Session;

/// Root application component.
///
/// Resolves configuration and the credential store once, provides both
/// via context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::from_env());
    provide_context(Session::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css"/>
        <Title text="Inkpost"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignupPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("blogs") view=BlogsPage/>
            </Routes>
        </Router>
    }
}
