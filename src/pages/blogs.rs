//! Post-login landing page.
//!
//! The auth form redirects here after a successful signup or signin.
//! The feed itself is served by other parts of the product; this
//! screen only anchors the route.

use leptos::prelude::*;

#[component]
pub fn BlogsPage() -> impl IntoView {
    view! {
        <div class="blogs-page">
            <h1>"Blogs"</h1>
            <p class="blogs-page__placeholder">"Signed in. Your feed will appear here."</p>
        </div>
    }
}
