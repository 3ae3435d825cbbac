//! Task Endpoints
//!
//! CRUD bindings for the session's task collection.

use web_sys::AbortSignal;

use super::{request_json, request_unit, ApiError};
use crate::models::{CreateTaskRequest, Task};

/// `GET /v1/tasks`: list the session's tasks.
pub async fn list_tasks(signal: Option<&AbortSignal>) -> Result<Vec<Task>, ApiError> {
    request_json("GET", "/v1/tasks", None::<&()>, signal).await
}

/// `POST /v1/tasks`: create a task.
pub async fn create_task(req: &CreateTaskRequest<'_>) -> Result<(), ApiError> {
    request_unit("POST", "/v1/tasks", Some(req), None).await
}

/// `PUT /v1/tasks/{id}`: replace the task's fields.
pub async fn update_task(task: &Task) -> Result<(), ApiError> {
    request_unit("PUT", &format!("/v1/tasks/{}", task.id), Some(task), None).await
}

/// Completion endpoint chosen from the task's current state.
pub fn toggle_path(task: &Task) -> String {
    if task.is_completed {
        format!("/v1/tasks/{}/mark-not-completed", task.id)
    } else {
        format!("/v1/tasks/{}/mark-completed", task.id)
    }
}

/// `PUT /v1/tasks/{id}/mark-(not-)completed`: flip completion.
pub async fn toggle_task(task: &Task) -> Result<(), ApiError> {
    request_unit("PUT", &toggle_path(task), None::<&()>, None).await
}

/// `DELETE /v1/tasks/{id}`: remove a task.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    request_unit("DELETE", &format!("/v1/tasks/{id}"), None::<&()>, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> Task {
        Task {
            id: "t1".to_string(),
            text: "walk the dog".to_string(),
            is_completed: completed,
            task_order: 0,
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_incomplete_task_marks_completed() {
        assert_eq!(toggle_path(&task(false)), "/v1/tasks/t1/mark-completed");
    }

    #[test]
    fn test_complete_task_marks_not_completed() {
        assert_eq!(toggle_path(&task(true)), "/v1/tasks/t1/mark-not-completed");
    }
}
