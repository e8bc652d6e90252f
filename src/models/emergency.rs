//! Emergency request model

use serde::{Deserialize, Serialize};

use super::de::{opt_int, opt_text};
use super::status::RequestStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyRequest {
    #[serde(default, deserialize_with = "opt_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub roll: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub emergency_type: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default, deserialize_with = "opt_text")]
    pub response: Option<String>,
}

/// Form body for `POST /update_emergency_status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEmergencyForm<'a> {
    pub id: i64,
    pub status: &'a RequestStatus,
    pub response: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}
