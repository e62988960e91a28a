//! Clipboard
//!
//! Browser clipboard binding and the copy button's label state.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Write `text` to the system clipboard
pub async fn write_text(text: &str) -> Result<(), String> {
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write rejected: {:?}", e))
}

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Copy button label with generation tickets
///
/// Each successful copy hands out a new ticket; a reset only applies when it
/// carries the newest one, so an early timer cannot cut a later "Copied!"
/// short and the label never stays stuck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// Show "Copied!" and return the ticket for the matching reset
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Revert to "Copy" if `ticket` is the latest one. Returns whether it applied.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_then_expire() {
        let mut feedback = CopyFeedback::default();
        assert_eq!(feedback.label(), "Copy");

        let ticket = feedback.trigger();
        assert_eq!(feedback.label(), "Copied!");

        assert!(feedback.expire(ticket));
        assert_eq!(feedback.label(), "Copy");
    }

    #[test]
    fn test_second_copy_outlives_first_timer() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.trigger();
        let second = feedback.trigger();

        assert!(!feedback.expire(first));
        assert_eq!(feedback.label(), "Copied!");

        assert!(feedback.expire(second));
        assert_eq!(feedback.label(), "Copy");
    }

    #[test]
    fn test_stale_ticket_after_reset_is_ignored() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.trigger();
        let second = feedback.trigger();
        feedback.expire(second);

        assert!(!feedback.expire(first));
        assert_eq!(feedback.label(), "Copy");
    }
}
