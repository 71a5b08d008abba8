//! User account records.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Email is the identity key. Passwords are stored and compared in plain
/// text; this is demo-grade account keeping, not an authentication layer.
/// The password is optional because the current-user record persists the
/// identity without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The unique email this user signs in with.
    pub email: String,

    /// Plain-text password; absent on session records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Whether this user is an administrator.
    #[serde(default, rename = "isAdmin", skip_serializing_if = "is_false")]
    pub is_admin: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires the reference signature
fn is_false(flag: &bool) -> bool {
    !*flag
}

impl User {
    /// Create a sign-up record with email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
            is_admin: false,
        }
    }

    /// The record persisted as the current user: identity only, no password.
    #[must_use]
    pub fn session_record(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: None,
            is_admin: self.is_admin,
        }
    }

    /// Compare a login attempt against the stored password.
    ///
    /// A record without a password matches nothing.
    #[must_use]
    pub fn password_matches(&self, attempt: &str) -> bool {
        self.password.as_deref() == Some(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_record_layout() {
        let user = User::new("ana@example.com", "secret");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"email":"ana@example.com","password":"secret"}"#);
    }

    #[test]
    fn session_record_drops_password() {
        let user = User::new("ana@example.com", "secret");
        let record = user.session_record();

        assert_eq!(record.email, "ana@example.com");
        assert!(record.password.is_none());

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"email":"ana@example.com"}"#);
    }

    #[test]
    fn admin_flag_defaults_to_false() {
        let parsed: User = serde_json::from_str(r#"{"email":"ana@example.com"}"#).unwrap();
        assert!(!parsed.is_admin);

        let parsed: User =
            serde_json::from_str(r#"{"email":"root@example.com","isAdmin":true}"#).unwrap();
        assert!(parsed.is_admin);
    }

    #[test]
    fn admin_flag_survives_session_record() {
        let mut user = User::new("root@example.com", "secret");
        user.is_admin = true;

        let record = user.session_record();
        assert!(record.is_admin);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"email":"root@example.com","isAdmin":true}"#
        );
    }

    #[test]
    fn password_comparison() {
        let user = User::new("ana@example.com", "secret");
        assert!(user.password_matches("secret"));
        assert!(!user.password_matches("wrong"));
        assert!(!user.session_record().password_matches("secret"));
    }
}
