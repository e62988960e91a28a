//! Copy Button Component
//!
//! Copies a fixed text to the clipboard and shows "Copied!" for a while.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::{self, CopyFeedback};

/// A button that copies text to clipboard with visual feedback
///
/// A new copy replaces the pending reset timer, so the label reverts
/// `reset_ms` after the most recent successful copy. Failed writes leave the
/// label alone and are only logged.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
    /// Delay before the label reverts to "Copy"
    reset_ms: u32,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let pending_reset = StoredValue::new_local(None::<Timeout>);

    let on_copy = move |_| {
        let text = text.clone();
        spawn_local(async move {
            if let Err(e) = clipboard::write_text(&text).await {
                log::warn!("[COPY] {}", e);
                return;
            }

            // The button may have been unmounted while the write was pending.
            let Some(ticket) = feedback.try_update(|f| f.trigger()) else {
                return;
            };
            log::debug!("[COPY] copied, reset ticket {}", ticket);

            let timeout = Timeout::new(reset_ms, move || {
                feedback.try_update(|f| f.expire(ticket));
            });
            // Replacing the handle drops, and so cancels, the previous timer.
            pending_reset.try_update_value(|slot| *slot = Some(timeout));
        });
    };

    view! {
        <button class="copy-button" on:click=on_copy>
            {move || feedback.with(|f| f.label())}
        </button>
    }
}
