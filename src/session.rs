//! Session Context
//!
//! App-wide holder of the authenticated user, provided via the Leptos
//! Context API. The session lives in memory only: on reload it is
//! re-resolved from the backend cookie by the route guard.

use leptos::prelude::*;

use crate::models::User;

/// Session state shared by every component
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
}

impl SessionContext {
    fn new() -> Self {
        let (user, set_user) = signal(None);
        Self { user, set_user }
    }

    /// Current user without registering a reactive dependency
    pub fn user_untracked(&self) -> Option<User> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Populate the session after sign-in or session resolution
    pub fn set_user(&self, user: User) {
        self.set_user.set(Some(user));
    }

    /// Tear the session down on logout or auth failure
    pub fn clear(&self) {
        self.set_user.set(None);
    }
}

/// Create the session context at application start
pub fn provide_session() {
    provide_context(SessionContext::new());
}

/// Get the session context from any descendant component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
