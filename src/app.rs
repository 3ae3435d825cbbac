//! Application Shell
//!
//! Router assembly and the session context provider.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{NotFoundPage, SignInPage, SignUpPage, TodoListPage};
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    // Session context for all routes; populated by the guard or sign-in
    session::provide_session();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=TodoListPage />
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/signup") view=SignUpPage />
                </Routes>
            </main>
        </Router>
    }
}
