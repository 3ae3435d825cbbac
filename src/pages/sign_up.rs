//! Sign-Up Page

use leptos::prelude::*;

use crate::components::SignUpForm;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="page">
            <SignUpForm />
        </div>
    }
}
