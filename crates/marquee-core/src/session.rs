//! Session state.

use crate::user::User;

/// The derived login state.
///
/// A session is never stored as its own entity: it is derived from the
/// presence or absence of the current-user record, so there is at most one
/// per store. The tagged variant keeps the admin flag from existing without
/// a user attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No current user.
    LoggedOut,

    /// A current user is set.
    LoggedIn {
        /// The user's email.
        email: String,
        /// Whether the user is an administrator.
        is_admin: bool,
    },
}

impl Session {
    /// Derive a session from an optional current-user record.
    #[must_use]
    pub fn from_record(record: Option<&User>) -> Self {
        match record {
            Some(user) => Self::LoggedIn {
                email: user.email.clone(),
                is_admin: user.is_admin,
            },
            None => Self::LoggedOut,
        }
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    /// The logged-in email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { email, .. } => Some(email),
            Self::LoggedOut => None,
        }
    }

    /// Whether the logged-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::LoggedIn { is_admin: true, .. })
    }
}
