//! Edit Task Form Component
//!
//! Inline replacement for a task row while it is in edit mode. Enter
//! submits the trimmed text; Escape cancels back to display mode without
//! saving.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list_state;
use crate::models::Task;

#[component]
pub fn EditTodoForm(
    task: Task,
    #[prop(into)] on_update: Callback<(String, String)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let id = task.id.clone();
    let (input, set_input) = signal(task.text.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = input.with(|i| list_state::normalized_input(i)) else {
            return;
        };
        on_update.run((id.clone(), text));
    };

    let cancel_on_esc = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                placeholder="Type your task here and press Enter"
                autofocus=true
                prop:value=move || input.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input.set(input.value());
                }
                on:keydown=cancel_on_esc
            />
        </form>
    }
}
