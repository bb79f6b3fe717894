//! # Session Operations
//!
//! The role gate: a login stub that records who is acting and under which
//! role. There is no credential check anywhere; selecting a role IS the
//! login.
//!
//! ## Role Gate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Login Stub                                    │
//! │                                                                     │
//! │  Admin tab ─────► login_admin(username) ─────► User { Admin }       │
//! │                                                                     │
//! │  Delivery tab ──► login_delivery(username) ──► User { Delivery }    │
//! │                        │                                            │
//! │                        └── resolves the roster entry by first name  │
//! │                            so delivery views can filter orders      │
//! │                                                                     │
//! │  Customer tab ──► login_customer(username) ──► User { Customer }    │
//! │                                                                     │
//! │  The role only decides which layout renders; the store performs     │
//! │  no permission checks.                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::state::{DeliveryState, SessionState};
use pharmex_core::{Role, User};

/// Logs in as the admin.
pub fn login_admin(session: &SessionState, username: &str) -> User {
    debug!(username = %username, "login_admin");

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: "Admin User".to_string(),
        username: Some(username.to_string()),
        role: Role::Admin,
    };
    session.set_user(Some(user.clone()));

    info!(role = %user.role, "Logged in");
    user
}

/// Logs in as a delivery staff member.
///
/// ## Behavior
/// Resolves the roster entry whose first name matches the username
/// (case-insensitive); falls back to the first roster entry when nothing
/// matches, so any username works for the demo. The resolved staff id
/// becomes the session user id, which is what delivery views filter
/// orders by.
///
/// ## Errors
/// Only an empty roster fails.
pub fn login_delivery(
    session: &SessionState,
    delivery: &DeliveryState,
    username: &str,
) -> StoreResult<User> {
    debug!(username = %username, "login_delivery");

    let needle = username.trim().to_lowercase();
    let staff = delivery
        .with_staff(|staff| {
            staff
                .iter()
                .find(|s| {
                    s.name
                        .split_whitespace()
                        .next()
                        .is_some_and(|first| first.to_lowercase() == needle)
                })
                .or_else(|| staff.first())
                .cloned()
        })
        .ok_or_else(|| StoreError::not_found("Delivery staff", username))?;

    let user = User {
        id: staff.id.clone(),
        name: staff.name.clone(),
        username: Some(username.to_string()),
        role: Role::Delivery,
    };
    session.set_user(Some(user.clone()));

    info!(role = %user.role, staff = %staff.name, "Logged in");
    Ok(user)
}

/// Logs in as a customer.
pub fn login_customer(session: &SessionState, username: &str) -> User {
    debug!(username = %username, "login_customer");

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: "Customer User".to_string(),
        username: Some(username.to_string()),
        role: Role::Customer,
    };
    session.set_user(Some(user.clone()));

    info!(role = %user.role, "Logged in");
    user
}

/// Clears the session.
pub fn logout(session: &SessionState) {
    debug!("logout");
    session.set_user(None);
    info!("Logged out");
}

/// Returns the current session user, if any.
pub fn current_user(session: &SessionState) -> Option<User> {
    session.user()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pharmex_core::DeliveryStaff;

    fn roster() -> DeliveryState {
        DeliveryState::from_staff(vec![
            DeliveryStaff {
                id: "s1".to_string(),
                name: "John Smith".to_string(),
                contact: "555-123-4567".to_string(),
                assigned_orders: 2,
                completed_orders: 15,
                image_url: String::new(),
            },
            DeliveryStaff {
                id: "s2".to_string(),
                name: "Michael Johnson".to_string(),
                contact: "555-987-6543".to_string(),
                assigned_orders: 1,
                completed_orders: 23,
                image_url: String::new(),
            },
        ])
    }

    #[test]
    fn test_login_sets_role_and_logout_clears() {
        let session = SessionState::new();
        assert!(current_user(&session).is_none());

        let user = login_admin(&session, "admin");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(current_user(&session).unwrap().role, Role::Admin);

        logout(&session);
        assert!(current_user(&session).is_none());
    }

    #[test]
    fn test_delivery_login_resolves_roster_entry() {
        let session = SessionState::new();
        let delivery = roster();

        let user = login_delivery(&session, &delivery, "MICHAEL").unwrap();
        assert_eq!(user.id, "s2");
        assert_eq!(user.name, "Michael Johnson");
        assert_eq!(user.role, Role::Delivery);
    }

    #[test]
    fn test_delivery_login_falls_back_to_first_entry() {
        let session = SessionState::new();
        let delivery = roster();

        let user = login_delivery(&session, &delivery, "someone-else").unwrap();
        assert_eq!(user.id, "s1");
    }

    #[test]
    fn test_delivery_login_empty_roster_fails() {
        let session = SessionState::new();
        let delivery = DeliveryState::new();

        assert!(login_delivery(&session, &delivery, "john").is_err());
        assert!(current_user(&session).is_none());
    }

    #[test]
    fn test_relogin_replaces_user() {
        let session = SessionState::new();
        login_customer(&session, "emma");
        assert_eq!(current_user(&session).unwrap().role, Role::Customer);

        login_admin(&session, "admin");
        assert_eq!(current_user(&session).unwrap().role, Role::Admin);
    }
}
