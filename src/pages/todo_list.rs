//! Protected List Page

use leptos::prelude::*;

use crate::components::{RequireAuth, TodoList};

#[component]
pub fn TodoListPage() -> impl IntoView {
    view! {
        <div class="page">
            <RequireAuth>
                <TodoList />
            </RequireAuth>
        </div>
    }
}
