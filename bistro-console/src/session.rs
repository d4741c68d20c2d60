//! Login session (local flag only, no credential check)

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Accept any non-empty username and password
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), LoginError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginError::MissingUsername);
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        tracing::info!(user = %username, "Signed in");
        self.user = Some(username.to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user, "Signed out");
        }
    }
}
