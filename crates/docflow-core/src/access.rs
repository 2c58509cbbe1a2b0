//! Access control gate.
//!
//! The single place where role/department authorization lives. Every
//! dashboard-route entry goes through [`authorize`]; no component
//! reimplements the role check ad hoc.

use crate::session::AuthState;
use serde::{Deserialize, Serialize};

/// Departments with a dashboard in the portal.
pub const KNOWN_DEPARTMENTS: &[&str] = &["engineering", "procurement", "finance", "hr"];

/// Outcome of an authorization check for a dashboard route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The user may enter the requested department dashboard.
    Allow,
    /// Authenticated, but the session's department does not grant access.
    /// Rendered as a denial view; the session is never mutated or logged out.
    Deny,
    /// Not authenticated; the client should navigate to the given path.
    Redirect(String),
}

/// Decides whether a session may enter a department dashboard.
///
/// Pure function of (state, requested department):
/// - unauthenticated states redirect to the landing page
/// - `Role::Admin` is allowed into every department
/// - otherwise allowed iff the session's department matches
///
/// Whether the department actually exists is a rendering concern; an allowed
/// request for an unknown department gets a not-found view downstream.
pub fn authorize(state: &AuthState, requested_department: &str) -> AccessDecision {
    let Some(session) = state.session() else {
        return AccessDecision::Redirect("/".to_string());
    };

    if session.role == crate::session::Role::Admin {
        return AccessDecision::Allow;
    }

    if session.department == requested_department {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}

/// Returns true if the department has a dashboard.
pub fn is_known_department(department: &str) -> bool {
    KNOWN_DEPARTMENTS.contains(&department)
}
