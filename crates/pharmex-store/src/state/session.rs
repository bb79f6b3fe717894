//! # Session State
//!
//! Holds the current session user, if any. Set by the login stub, cleared on
//! logout. The role on the user gates which layout the frontend renders;
//! the store performs no permission checks of its own.

use std::sync::{Arc, Mutex};

use pharmex_core::User;

/// Shared session state: the currently "logged in" user.
#[derive(Debug)]
pub struct SessionState {
    user: Arc<Mutex<Option<User>>>,
}

impl SessionState {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        SessionState {
            user: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the current user.
    pub fn set_user(&self, user: Option<User>) {
        let mut current = self.user.lock().expect("Session mutex poisoned");
        *current = user;
    }

    /// Returns a clone of the current user, if logged in.
    pub fn user(&self) -> Option<User> {
        let current = self.user.lock().expect("Session mutex poisoned");
        current.clone()
    }

    /// Checks whether anyone is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
