//! UI Components
//!
//! Reusable Leptos components.

mod edit_todo_form;
mod require_auth;
mod sign_in_form;
mod sign_up_form;
mod todo_form;
mod todo_item;
mod todo_list;

pub use edit_todo_form::EditTodoForm;
pub use require_auth::RequireAuth;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
