//! Labeled text-entry control shared by all auth form fields.

#[cfg(test)]
#[path = "labelled_input_test.rs"]
mod labelled_input_test;

use leptos::prelude::*;

/// Resolve the entry type for the input element; an omitted type means
/// plain text.
fn resolve_input_type(input_type: &str) -> &str {
    if input_type.is_empty() { "text" } else { input_type }
}

/// A label plus a native `<input required>` wired to a change
/// callback. Pure presentation: no state, no validation, no side
/// effects.
#[component]
pub fn LabelledInput(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = resolve_input_type(&input_type).to_owned();

    view! {
        <div class="labelled-input">
            <label class="labelled-input__label" for=name.clone()>
                {label}
            </label>
            <input
                class="labelled-input__control"
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
