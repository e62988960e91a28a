//! Task Input Component
//!
//! Controlled text field for the add-task bar.

use leptos::prelude::*;

/// Controlled text input
///
/// # Arguments
/// * `value` - Current text, owned by the parent
/// * `on_change` - Called with the new text on every input event
/// * `on_enter` - Called with the field's text when Enter is pressed
#[component]
pub fn TaskInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_enter: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="input"
            placeholder="Today I will..."
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_enter.run(event_target_value(&ev));
                }
            }
        />
    }
}
