//! Principal account payloads

use serde::Serialize;

/// Form body for `POST /register_principal`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPrincipalForm<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Form body for `POST /login_principal`
#[derive(Clone, Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `username`/`password` pair sent as form fields or query parameters
#[derive(Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Credentials under the field names the event endpoints expect
#[derive(Clone, Serialize)]
pub struct PrincipalCredentials<'a> {
    pub principalusername: &'a str,
    pub principalpassword: &'a str,
}
