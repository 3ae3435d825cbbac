//! Task Row Component
//!
//! Display variant of a single task: clicking the text flips completion,
//! the controls switch to edit mode or delete the task.

use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TodoItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let completed = task.is_completed;
    let toggle_id = task.id.clone();
    let edit_id = task.id.clone();
    let delete_id = task.id.clone();

    view! {
        <div class="todo">
            <p
                class=move || if completed { "todo-text completed" } else { "todo-text" }
                on:click=move |_| on_toggle.run(toggle_id.clone())
            >
                {task.text.clone()}
            </p>
            <div class="todo-controls">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_id.clone())>
                    "✎"
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(delete_id.clone())>
                    "×"
                </button>
            </div>
        </div>
    }
}
