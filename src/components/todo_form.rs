//! New Task Form Component
//!
//! Single-field form for creating tasks. Submission is gated on the
//! trimmed input being non-empty; Escape clears the field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list_state;

#[component]
pub fn TodoForm(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let (input, set_input) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = input.with(|i| list_state::normalized_input(i)) else {
            return;
        };
        on_add.run(text);
        set_input.set(String::new());
    };

    let clear_on_esc = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_input.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                placeholder="Type your task and press Enter or press ESC to cancel"
                prop:value=move || input.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input.set(input.value());
                }
                on:keydown=clear_on_esc
            />
        </form>
    }
}
