//! Sign-Up Form Component
//!
//! Registration form with inline validity marks, focus-gated hints and a
//! success panel linking back to sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::validate;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Server outcome mapped to user-facing text.
fn signup_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network => "Network error.",
        ApiError::Status(409) => "Email already exists.",
        _ => "An error occurred.",
    }
}

#[component]
pub fn SignUpForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (email_focus, set_email_focus) = signal(false);

    let (password, set_password) = signal(String::new());
    let (password_focus, set_password_focus) = signal(false);

    let (match_password, set_match_password) = signal(String::new());
    let (match_focus, set_match_focus) = signal(false);

    let (err_msg, set_err_msg) = signal("");
    let (succeeded, set_succeeded) = signal(false);

    let valid_email = Memo::new(move |_| email.with(|e| validate::is_valid_email(e)));
    let valid_password = Memo::new(move |_| password.with(|p| validate::is_valid_password(p)));
    let valid_match = Memo::new(move |_| password.get() == match_password.get());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();

        if !validate::is_valid_email(&email_value)
            || !validate::is_valid_password(&password_value)
            || password_value != match_password.get()
        {
            set_err_msg.set(INVALID_CREDENTIALS);
            return;
        }

        spawn_local(async move {
            match api::register(&email_value, &password_value).await {
                Ok(()) => {
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_match_password.set(String::new());
                    set_succeeded.set(true);
                }
                Err(err) => {
                    set_succeeded.set(false);
                    set_err_msg.set(signup_error_message(&err));
                }
            }
        });
    };

    let submit_disabled =
        move || !valid_email.get() || !valid_password.get() || !valid_match.get();

    view! {
        <Show
            when=move || succeeded.get()
            fallback=move || view! {
                <section class="auth-form">
                    <h1>"Sign Up"</h1>
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
                                on:focus=move |_| set_email_focus.set(true)
                                on:blur=move |_| set_email_focus.set(false)
                            />
                        </div>
                        <Show when=move || {
                            email_focus.get() && !valid_email.get() && email.with(|e| !e.is_empty())
                        }>
                            <p class="info">"Email must be a valid email address."</p>
                        </Show>
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
                                on:focus=move |_| set_password_focus.set(true)
                                on:blur=move |_| set_password_focus.set(false)
                            />
                        </div>
                        <Show when=move || {
                            password_focus.get() && !valid_password.get() && password.with(|p| !p.is_empty())
                        }>
                            <p class="info">
                                "Password must be at least 8 characters long, contain at least one \
                                 lowercase letter, one uppercase letter, and one number."
                            </p>
                        </Show>
                        <div>
                            <label for="match-password">
                                "Confirm Password:"
                                <span class=move || {
                                    if valid_match.get() && match_password.with(|m| !m.is_empty()) { "valid" } else { "hide" }
                                }>"✓"</span>
                                <span class=move || {
                                    if !valid_match.get() && match_password.with(|m| !m.is_empty()) { "invalid" } else { "hide" }
                                }>"✗"</span>
                            </label>
                            <input
                                type="password"
                                id="match-password"
                                placeholder="Confirm Password"
                                prop:value=move || match_password.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_match_password.set(input.value());
                                    set_err_msg.set("");
                                }
                                on:focus=move |_| set_match_focus.set(true)
                                on:blur=move |_| set_match_focus.set(false)
                            />
                        </div>
                        <Show when=move || {
                            match_focus.get() && !valid_match.get() && match_password.with(|m| !m.is_empty())
                        }>
                            <p class="info">"Passwords must match."</p>
                        </Show>
                        <button type="submit" disabled=submit_disabled>
                            "Sign Up"
                        </button>
                    </form>
                    <p>
                        "Already have an account? "
                        <A href="/signin">"Sign In"</A>
                    </p>
                </section>
            }
        >
            <section class="auth-form">
                <h1>"Success!"</h1>
                <p>
                    "You have successfully signed up. Please "
                    <A href="/signin">"Sign In"</A>
                    "."
                </p>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_maps_to_network_error() {
        assert_eq!(signup_error_message(&ApiError::Network), "Network error.");
    }

    #[test]
    fn test_409_maps_to_duplicate_email() {
        assert_eq!(signup_error_message(&ApiError::Status(409)), "Email already exists.");
    }

    #[test]
    fn test_other_failures_map_to_generic_text() {
        assert_eq!(signup_error_message(&ApiError::Status(500)), "An error occurred.");
        assert_eq!(signup_error_message(&ApiError::Status(400)), "An error occurred.");
    }
}
