//! Sign-up, login, and logout flows.

use marquee_core::{Result, Session, TicketingError, User};
use marquee_store::AccountStore;

/// Account registration and session flows.
#[derive(Clone)]
pub struct SessionManager {
    accounts: AccountStore,
}

impl SessionManager {
    /// Creates a manager over the given account store.
    pub fn new(accounts: AccountStore) -> Self {
        Self { accounts }
    }

    /// Registers a new account.
    ///
    /// Registration does not log the user in: a fresh account goes through
    /// the login flow like any other.
    ///
    /// # Errors
    ///
    /// Returns [`TicketingError::EmailTaken`] if the email is already
    /// registered, or a storage error if the backend fails.
    pub fn sign_up(&self, email: &str, password: &str) -> Result<()> {
        if self.accounts.find_user(email)?.is_some() {
            return Err(TicketingError::EmailTaken {
                email: email.to_string(),
            });
        }

        self.accounts.add_user(&User::new(email, password))?;
        tracing::info!(email, "User registered");

        Ok(())
    }

    /// Logs a user in, replacing any existing session.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Errors
    ///
    /// Returns [`TicketingError::InvalidCredentials`] if the credentials do
    /// not match a registered account, or a storage error if the backend
    /// fails.
    pub fn log_in(&self, email: &str, password: &str) -> Result<Session> {
        let user = self
            .accounts
            .find_user(email)?
            .filter(|u| u.password_matches(password))
            .ok_or(TicketingError::InvalidCredentials)?;

        self.accounts.set_current_user(&user)?;
        tracing::info!(email, "User logged in");

        Ok(Session::from_record(Some(&user)))
    }

    /// Logs the current user out. A no-op when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn log_out(&self) -> Result<()> {
        self.accounts.clear_current_user()?;
        tracing::info!("User logged out");

        Ok(())
    }

    /// The current login state.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn session(&self) -> Result<Session> {
        Ok(self.accounts.session()?)
    }
}
