//! Route Guard
//!
//! Resolves the backend session before rendering protected content.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use send_wrapper::SendWrapper;

use crate::api;
use crate::session::use_session;

/// Gate that resolves the current session before showing its children.
///
/// If no user is held, asks the backend who the cookie belongs to. While
/// resolving, a loading placeholder is shown; afterwards unauthenticated
/// visitors are redirected to the sign-in page with the requested path
/// preserved for the post-login redirect. The in-flight request is aborted
/// if the guard unmounts first, so a late response never touches state.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let (resolving, set_resolving) = signal(true);
    let children = StoredValue::new(children);

    let controller = web_sys::AbortController::new().ok();
    let abort_signal = controller.as_ref().map(|c| c.signal());

    Effect::new(move |_| {
        if session.user_untracked().is_some() {
            set_resolving.set(false);
            return;
        }
        let Some(signal) = abort_signal.clone() else {
            set_resolving.set(false);
            return;
        };
        spawn_local(async move {
            match api::current_user(&signal).await {
                Ok(user) => {
                    session.set_user(user);
                    set_resolving.set(false);
                }
                Err(err) => {
                    if !signal.aborted() {
                        web_sys::console::warn_1(
                            &format!("session resolution failed: {err}").into(),
                        );
                        set_resolving.set(false);
                    }
                }
            }
        });
    });

    let controller = SendWrapper::new(controller);
    on_cleanup(move || {
        if let Some(controller) = controller.take() {
            controller.abort();
        }
    });

    view! {
        <Show
            when=move || !resolving.get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            {move || {
                if session.is_authenticated() {
                    children.with_value(|children| children())
                } else {
                    let from = location.pathname.get_untracked();
                    view! { <Redirect path=format!("/signin?from={from}") /> }.into_any()
                }
            }}
        </Show>
    }
}
