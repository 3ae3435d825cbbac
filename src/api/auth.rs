//! Authentication Endpoints
//!
//! Sign-in, sign-up, session resolution and logout.

use serde::Serialize;
use web_sys::AbortSignal;

use super::{request_json, request_unit, ApiError};
use crate::models::User;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /login`: a 200 sets the session cookie.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    request_unit("POST", "/login", Some(&Credentials { email, password }), None).await
}

/// `POST /v1/users`: register a new account; 409 means duplicate email.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    request_unit(
        "POST",
        "/v1/users",
        Some(&Credentials { email, password }),
        None,
    )
    .await
}

/// `GET /users-current`: resolve the session from the cookie.
pub async fn current_user(signal: &AbortSignal) -> Result<User, ApiError> {
    request_json("GET", "/users-current", None::<&()>, Some(signal)).await
}

/// `POST /v1/users/logout`: end the session.
pub async fn logout() -> Result<(), ApiError> {
    request_unit("POST", "/v1/users/logout", None::<&()>, None).await
}
