//! Add Task Bar Component
//!
//! Draft input plus "Add Task" button. Enter submits with a counter suffix,
//! the button submits the text as typed.

use leptos::prelude::*;

use crate::components::{Button, TaskInput};
use crate::tasks::TaskDraft;

/// Input row that reports new task labels upward
#[component]
pub fn AddTaskBar(#[prop(into)] on_create: Callback<String>) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::new());
    let text = Signal::derive(move || draft.with(|d| d.text().to_string()));

    let on_change = move |value: String| draft.update(|d| d.set_text(value));

    let on_enter = move |value: String| {
        let label = draft.try_update(|d| {
            d.set_text(value);
            d.submit_enter()
        });
        if let Some(label) = label {
            on_create.run(label);
        }
    };

    let on_add = move |_| {
        if let Some(label) = draft.try_update(|d| d.submit_button()) {
            on_create.run(label);
        }
    };

    view! {
        <div class="add-task-container">
            <TaskInput value=text on_change=on_change on_enter=on_enter />
            <Button on_click=on_add>"Add Task"</Button>
        </div>
    }
}
