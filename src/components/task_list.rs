//! Task List Component
//!
//! Renders tasks in order, each with a delete button bound to its text.

use leptos::prelude::*;

use crate::components::Button;
use crate::tasks::Task;

/// Ordered list of tasks
#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    // Text alone is not unique once the button path adds a duplicate, so the
    // key pairs it with its occurrence index among equal labels.
    let keyed = move || {
        let tasks = tasks.get();
        let mut keyed = Vec::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            let seen = tasks[..i].iter().filter(|t| *t == task).count();
            keyed.push((task.clone(), seen));
        }
        keyed
    };

    view! {
        <ul>
            <For
                each=keyed
                key=|entry| entry.clone()
                children=move |(task, _)| view! { <TaskItem task=task on_delete=on_delete /> }
            />
        </ul>
    }
}

/// A single task row
#[component]
pub fn TaskItem(task: Task, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let value = task.clone();
    view! {
        <li class="task-item">
            {task}
            <Button on_click=move |_| on_delete.run(value.clone())>"Delete"</Button>
        </li>
    }
}
