//! User registry and the current-session record.
//!
//! Registered users live as a JSON array under `users`. The logged-in user
//! is a single JSON object under `currentUser`, holding the session record
//! (email and admin flag, never the password). Logout removes the key
//! entirely rather than writing an empty record.

use std::sync::Arc;

use marquee_core::{Session, User};

use crate::error::Result;
use crate::{decode, encode, keys, KeyValue};

/// Store for registered users and the active session.
#[derive(Clone)]
pub struct AccountStore {
    kv: Arc<dyn KeyValue>,
}

impl AccountStore {
    /// Creates a store over the given backend.
    pub fn new(kv: Arc<dyn KeyValue>) -> Self {
        Self { kv }
    }

    /// Reads all registered users, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn users(&self) -> Result<Vec<User>> {
        match self.kv.get(keys::USERS)? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Looks up a registered user by exact email.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn find_user(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users()?.into_iter().find(|u| u.email == email))
    }

    /// Appends `user` to the registry.
    ///
    /// Uniqueness is not checked here: callers look the email up first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn add_user(&self, user: &User) -> Result<()> {
        let mut users = self.users()?;
        users.push(user.clone());

        let value = encode(&users)?;
        tracing::debug!(email = %user.email, count = users.len(), "Persisting user registry");
        self.kv.set(keys::USERS, &value)
    }

    /// Reads the session record of the logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn current_user(&self) -> Result<Option<User>> {
        match self.kv.get(keys::CURRENT_USER)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Marks `user` as logged in.
    ///
    /// Only the session record is persisted, so the password never reaches
    /// the `currentUser` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn set_current_user(&self, user: &User) -> Result<()> {
        let record = user.session_record();

        let value = encode(&record)?;
        tracing::debug!(email = %record.email, "Persisting session record");
        self.kv.set(keys::CURRENT_USER, &value)
    }

    /// Logs the current user out. A no-op when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn clear_current_user(&self) -> Result<()> {
        self.kv.remove(keys::CURRENT_USER)
    }

    /// Derives the login state from the `currentUser` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::from_record(self.current_user()?.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryKv;

    fn create_store() -> (AccountStore, Arc<MemoryKv>) {
        let kv = Arc::new(MemoryKv::new());
        (AccountStore::new(Arc::clone(&kv) as Arc<dyn KeyValue>), kv)
    }

    #[test]
    fn registry_starts_empty() {
        let (store, _kv) = create_store();
        assert!(store.users().unwrap().is_empty());
        assert_eq!(store.find_user("ana@example.com").unwrap(), None);
    }

    #[test]
    fn added_users_can_be_found_by_email() {
        let (store, _kv) = create_store();

        store.add_user(&User::new("ana@example.com", "secret")).unwrap();
        store.add_user(&User::new("bob@example.com", "hunter2")).unwrap();

        let found = store.find_user("bob@example.com").unwrap().unwrap();
        assert_eq!(found.email, "bob@example.com");

        assert_eq!(store.find_user("carol@example.com").unwrap(), None);
        assert_eq!(store.users().unwrap().len(), 2);
    }

    #[test]
    fn session_record_never_carries_the_password() {
        let (store, kv) = create_store();
        let user = User::new("ana@example.com", "secret");

        store.set_current_user(&user).unwrap();

        let raw = kv.get("currentUser").unwrap().unwrap();
        assert_eq!(raw, r#"{"email":"ana@example.com"}"#);

        let current = store.current_user().unwrap().unwrap();
        assert_eq!(current.email, "ana@example.com");
        assert_eq!(current.password, None);
    }

    #[test]
    fn session_follows_the_current_user_key() {
        let (store, _kv) = create_store();

        assert!(!store.session().unwrap().is_logged_in());

        store.set_current_user(&User::new("ana@example.com", "secret")).unwrap();
        let session = store.session().unwrap();
        assert_eq!(session.email(), Some("ana@example.com"));

        store.clear_current_user().unwrap();
        assert!(!store.session().unwrap().is_logged_in());
    }

    #[test]
    fn clearing_without_a_session_is_a_noop() {
        let (store, _kv) = create_store();
        store.clear_current_user().unwrap();
        assert!(!store.session().unwrap().is_logged_in());
    }

    #[test]
    fn registry_uses_the_expected_layout() {
        let (store, kv) = create_store();

        store.add_user(&User::new("ana@example.com", "secret")).unwrap();

        let raw = kv.get("users").unwrap().unwrap();
        assert_eq!(raw, r#"[{"email":"ana@example.com","password":"secret"}]"#);
    }
}
