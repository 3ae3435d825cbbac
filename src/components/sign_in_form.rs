//! Sign-In Form Component
//!
//! Collects credentials, validates them client-side and exchanges them for
//! a session cookie.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::validate;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Server outcome mapped to user-facing text.
fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network => "Network error.",
        ApiError::Status(400) => "Missing email or password.",
        ApiError::Status(401) => INVALID_CREDENTIALS,
        _ => "Something went wrong.",
    }
}

#[component]
pub fn SignInForm() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (err_msg, set_err_msg) = signal("");

    let valid_email = Memo::new(move |_| email.with(|e| validate::is_valid_email(e)));
    let valid_password = Memo::new(move |_| password.with(|p| validate::is_valid_password(p)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();

        if !validate::is_valid_email(&email_value) || !validate::is_valid_password(&password_value)
        {
            set_err_msg.set(INVALID_CREDENTIALS);
            return;
        }

        // Where the guard sent us from, for the post-login redirect
        let target = query.with_untracked(|q| q.get("from")).unwrap_or_else(|| "/".to_string());
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(()) => {
                    set_email.set(String::new());
                    set_password.set(String::new());
                    navigate(
                        &target,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => set_err_msg.set(login_error_message(&err)),
            }
        });
    };

    let submit_disabled = move || !valid_email.get() || !valid_password.get();

    view! {
        <section class="auth-form">
            <h1>"Sign In"</h1>
            <Show when=move || !err_msg.get().is_empty()>
                <p class="error">{move || err_msg.get()}</p>
            </Show>
            <form on:submit=on_submit>
                <div>
                    <label for="email">
                        "Email:"
                        <span class=move || if valid_email.get() { "valid" } else { "hide" }>"✓"</span>
                        <span class=move || {
                            if valid_email.get() || email.with(|e| e.is_empty()) { "hide" } else { "invalid" }
                        }>"✗"</span>
                    </label>
                    <input
                        type="email"
                        id="email"
                        placeholder="Email"
                        autocomplete="off"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                            set_err_msg.set("");
                        }
                    />
                </div>
                <div>
                    <label for="password">
                        "Password:"
                        <span class=move || if valid_password.get() { "valid" } else { "hide" }>"✓"</span>
                        <span class=move || {
                            if valid_password.get() || password.with(|p| p.is_empty()) { "hide" } else { "invalid" }
                        }>"✗"</span>
                    </label>
                    <input
                        type="password"
                        id="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                            set_err_msg.set("");
                        }
                    />
                </div>
                <button type="submit" disabled=submit_disabled>
                    "Sign In"
                </button>
            </form>
            <p>
                "Don't have an account yet? "
                <A href="/signup">"Sign Up"</A>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_maps_to_network_error() {
        assert_eq!(login_error_message(&ApiError::Network), "Network error.");
    }

    #[test]
    fn test_400_maps_to_missing_credentials() {
        assert_eq!(
            login_error_message(&ApiError::Status(400)),
            "Missing email or password."
        );
    }

    #[test]
    fn test_401_maps_to_invalid_credentials() {
        assert_eq!(
            login_error_message(&ApiError::Status(401)),
            "Invalid email or password."
        );
    }

    #[test]
    fn test_other_failures_map_to_generic_text() {
        assert_eq!(login_error_message(&ApiError::Status(500)), "Something went wrong.");
        assert_eq!(
            login_error_message(&ApiError::Decode("bad".to_string())),
            "Something went wrong."
        );
    }
}
