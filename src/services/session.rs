//! Principal session
//!
//! A [`Session`] only exists after the backend accepted a login. It holds
//! the plaintext credentials, which the backend expects on every
//! authorized call; there is no token, expiry or refresh.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{Credentials, PrincipalCredentials};

#[derive(Clone)]
pub struct Session {
    username: String,
    password: String,
    logged_in_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            logged_in_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }

    /// `username`/`password` fields
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            username: &self.username,
            password: &self.password,
        }
    }

    /// `principalusername`/`principalpassword` fields
    pub fn principal_credentials(&self) -> PrincipalCredentials<'_> {
        PrincipalCredentials {
            principalusername: &self.username,
            principalpassword: &self.password,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("logged_in_at", &self.logged_in_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let session = Session::new("head", "s3cret!");
        let printed = format!("{:?}", session);
        assert!(printed.contains("head"));
        assert!(!printed.contains("s3cret!"));
    }

    #[test]
    fn test_credential_field_names() {
        let session = Session::new("head", "pw");
        let plain = serde_json::to_value(session.credentials()).unwrap();
        assert_eq!(plain["username"], "head");
        assert_eq!(plain["password"], "pw");

        let principal = serde_json::to_value(session.principal_credentials()).unwrap();
        assert_eq!(principal["principalusername"], "head");
        assert_eq!(principal["principalpassword"], "pw");
    }
}
