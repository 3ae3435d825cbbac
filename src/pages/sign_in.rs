//! Sign-In Page

use leptos::prelude::*;

use crate::components::SignInForm;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="page">
            <SignInForm />
        </div>
    }
}
