//! Demo Page App
//!
//! Root component: owns the task list and the layout flag, and swaps the
//! interactive editor for a static image on narrow viewports.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddTaskBar, NavBar, StickyFooter, TaskList};
use crate::config::use_config;
use crate::store::{
    store_create_task, store_delete_task, store_set_viewport_width, view_for, DemoState,
    DemoStateStoreFields, DemoView,
};

#[component]
pub fn App() -> impl IntoView {
    let config = use_config();

    // State
    let store = Store::new(DemoState::new());

    // Layout flag follows the viewport for as long as the app is mounted
    let breakpoint = config.mobile_breakpoint_px;
    leptos_viewport::bind_window_resize_scoped(move |width| {
        store_set_viewport_width(&store, width, breakpoint);
    });

    log::info!("[APP] mounted");

    let on_create = move |value: String| store_create_task(&store, &value);
    let on_delete = move |value: String| store_delete_task(&store, &value);
    let tasks = Signal::derive(move || store.tasks().get());
    let demo_image_src = config.demo_image_src;

    view! {
        <div class="app-container">
            <div class="main-content">
                <NavBar />

                <p>
                    "React Scan \"scans\" your React app for problematic renders. "
                    "It's just JavaScript, so you drop it in anywhere – script tag, npm, you name it!"
                </p>

                {move || match view_for(store.is_mobile().get()) {
                    DemoView::StaticImage => view! {
                        <div class="demo-section">
                            <img src=demo_image_src alt="React Scan Demo" class="demo-gif" />
                        </div>
                    }.into_any(),
                    DemoView::Editor => view! {
                        <div class="task-section">
                            <p>"Try interacting with this input to see it in action:"</p>
                            <AddTaskBar on_create=on_create />
                            <TaskList tasks=tasks on_delete=on_delete />
                        </div>
                    }.into_any(),
                }}
            </div>

            <StickyFooter />
        </div>
    }
}
