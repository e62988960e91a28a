//! Demo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::tasks::{self, Task};

/// Which variant of the task section renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoView {
    /// Add-bar plus task list
    Editor,
    /// Static illustration for narrow viewports
    StaticImage,
}

/// Root-owned page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DemoState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    /// Viewport is at or below the mobile breakpoint
    pub is_mobile: bool,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Section variant for the layout flag
pub fn view_for(is_mobile: bool) -> DemoView {
    if is_mobile {
        DemoView::StaticImage
    } else {
        DemoView::Editor
    }
}

/// Type alias for the store
pub type DemoStore = Store<DemoState>;

// ========================
// Store Helper Functions
// ========================

/// Append a task unless the value is empty
pub fn store_create_task(store: &DemoStore, value: &str) {
    if tasks::create_task(&mut store.tasks().write(), value) {
        log::debug!("[TASKS] created {:?}", value);
    } else {
        log::debug!("[TASKS] ignoring empty task");
    }
}

/// Remove every task matching the value
pub fn store_delete_task(store: &DemoStore, value: &str) {
    let removed = tasks::delete_task(&mut store.tasks().write(), value);
    log::debug!("[TASKS] deleted {} x {:?}", removed, value);
}

/// Recompute the layout flag, writing only when it flips
pub fn store_set_viewport_width(store: &DemoStore, width: f64, breakpoint: f64) {
    let is_mobile = leptos_viewport::is_narrow(width, breakpoint);
    if store.is_mobile().get_untracked() != is_mobile {
        log::debug!("[VIEWPORT] width {} -> mobile={}", width, is_mobile);
        store.is_mobile().set(is_mobile);
    }
}
