//! Task Operations
//!
//! Pure list and draft logic behind the task editor.

/// A to-do label; two tasks with the same text are the same task
pub type Task = String;

/// Append `value` to the end of `tasks`
///
/// Empty values are ignored. Returns whether the list changed.
pub fn create_task(tasks: &mut Vec<Task>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    tasks.push(value.to_string());
    true
}

/// Remove every task equal to `value`, keeping the order of the rest
///
/// Returns how many entries were removed.
pub fn delete_task(tasks: &mut Vec<Task>, value: &str) -> usize {
    let before = tasks.len();
    tasks.retain(|task| task != value);
    before - tasks.len()
}

/// Uncommitted add-bar input
///
/// The counter only moves on Enter submissions, which suffix it to the label
/// so repeated entries stay distinct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    text: String,
    counter: u32,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Replace the draft text verbatim
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Enter path: label is `"<text> (<counter>)"`, even for an empty draft
    pub fn submit_enter(&mut self) -> Task {
        let label = format!("{} ({})", self.text, self.counter);
        self.text.clear();
        self.counter += 1;
        label
    }

    /// Button path: label is the text as typed
    pub fn submit_button(&mut self) -> Task {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_appends_in_call_order() {
        let mut tasks = Vec::new();
        for label in ["write", "review", "ship"] {
            assert!(create_task(&mut tasks, label));
        }
        assert_eq!(tasks, vec!["write", "review", "ship"]);
    }

    #[test]
    fn test_create_ignores_empty() {
        let mut tasks = vec!["a".to_string()];
        assert!(!create_task(&mut tasks, ""));
        let absent: Option<String> = None;
        assert!(!create_task(&mut tasks, absent.as_deref().unwrap_or_default()));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_create_keeps_whitespace_labels() {
        let mut tasks = Vec::new();
        assert!(create_task(&mut tasks, " "));
        assert_eq!(tasks, vec![" "]);
    }

    #[test]
    fn test_delete_removes_every_match() {
        let mut tasks: Vec<Task> = ["a", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(delete_task(&mut tasks, "a"), 2);
        assert_eq!(tasks, vec!["b"]);
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut tasks: Vec<Task> = ["x", "gone", "y", "gone", "z"].iter().map(|s| s.to_string()).collect();
        delete_task(&mut tasks, "gone");
        assert_eq!(tasks, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut tasks = vec!["a".to_string()];
        assert_eq!(delete_task(&mut tasks, "b"), 0);
        assert_eq!(tasks, vec!["a"]);
    }

    #[test]
    fn test_enter_suffixes_counter() {
        let mut draft = TaskDraft::new();
        assert_eq!(draft.submit_enter(), " (0)");
        assert_eq!(draft.submit_enter(), " (1)");
        assert_eq!(draft.counter(), 2);
    }

    #[test]
    fn test_enter_clears_text() {
        let mut draft = TaskDraft::new();
        draft.set_text("buy milk");
        assert_eq!(draft.submit_enter(), "buy milk (0)");
        assert_eq!(draft.text(), "");
        assert_eq!(draft.counter(), 1);
    }

    #[test]
    fn test_button_never_touches_counter() {
        let mut draft = TaskDraft::new();
        draft.set_text("first");
        draft.submit_enter();

        draft.set_text("  padded  ");
        assert_eq!(draft.submit_button(), "  padded  ");
        assert_eq!(draft.text(), "");
        assert_eq!(draft.counter(), 1);

        assert_eq!(draft.submit_button(), "");
        assert_eq!(draft.counter(), 1);
    }
}
