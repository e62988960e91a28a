//! Text and Button Primitives

use leptos::prelude::*;

/// Inline text span
#[component]
pub fn Text(children: Children) -> impl IntoView {
    view! { <span>{children()}</span> }
}

/// Button whose label is wrapped in `Text`
#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button on:click=move |_| on_click.run(())>
            <Text>{children()}</Text>
        </button>
    }
}
