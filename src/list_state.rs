//! List View State Helpers
//!
//! Pure transitions for the to-do list: edit-mode tracking, order-slot
//! computation and input gating. Edit mode is held outside the task
//! collection as the id of the task being edited, so at most one task can
//! ever be in edit mode.

use crate::models::Task;

/// Trim form input; `None` blocks submission.
pub fn normalized_input(input: &str) -> Option<String> {
    let text = input.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Click on a row's edit control: the clicked task becomes the only one in
/// edit mode, or leaves edit mode if it was already being edited.
pub fn toggle_edit(editing: Option<&str>, clicked: &str) -> Option<String> {
    if editing == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

/// Order slot for a newly created task: one past the current maximum, or
/// zero for an empty list.
pub fn next_task_order(tasks: &[Task]) -> i64 {
    tasks
        .iter()
        .map(|t| t.task_order)
        .max()
        .map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, order: i64) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {id}"),
            is_completed: false,
            task_order: order,
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_normalized_input_trims() {
        assert_eq!(normalized_input("  buy milk  "), Some("buy milk".to_string()));
        assert_eq!(normalized_input("buy milk"), Some("buy milk".to_string()));
    }

    #[test]
    fn test_normalized_input_blocks_empty() {
        assert_eq!(normalized_input(""), None);
        assert_eq!(normalized_input("   "), None);
        assert_eq!(normalized_input("\t\n"), None);
    }

    #[test]
    fn test_toggle_edit_enters_edit_mode() {
        assert_eq!(toggle_edit(None, "a"), Some("a".to_string()));
    }

    #[test]
    fn test_toggle_edit_moves_edit_mode() {
        // Editing A while B is in edit mode leaves only A editing.
        assert_eq!(toggle_edit(Some("b"), "a"), Some("a".to_string()));
    }

    #[test]
    fn test_toggle_edit_exits_on_same_task() {
        assert_eq!(toggle_edit(Some("a"), "a"), None);
    }

    #[test]
    fn test_next_order_empty() {
        assert_eq!(next_task_order(&[]), 0);
    }

    #[test]
    fn test_next_order_is_max_plus_one() {
        let tasks = vec![task("a", 0), task("b", 5), task("c", 2)];
        assert_eq!(next_task_order(&tasks), 6);
    }

    #[test]
    fn test_next_order_holds_both_fetched_tasks() {
        // A fetched collection of two items is seen in full by the helper.
        let tasks = vec![task("a", 0), task("b", 1)];
        assert_eq!(tasks.len(), 2);
        assert_eq!(next_task_order(&tasks), 2);
    }
}
