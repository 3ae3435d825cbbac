//! Wire Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// A single to-do entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    #[serde(default)]
    pub task_order: i64,
    #[serde(default)]
    pub user_id: String,
}

/// Body for task creation; the order slot is computed client-side
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest<'a> {
    pub text: &'a str,
    pub task_order: i64,
}
