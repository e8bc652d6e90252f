//! Student model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de::opt_text;

/// Format the backend uses for `registered_at`
pub const REGISTERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub roll: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub registered_at: Option<String>,
}

impl Student {
    pub fn registered_at_parsed(&self) -> Option<NaiveDateTime> {
        self.registered_at
            .as_deref()
            .and_then(|ts| NaiveDateTime::parse_from_str(ts, REGISTERED_AT_FORMAT).ok())
    }
}

/// Form body for `POST /register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterStudentForm<'a> {
    pub name: &'a str,
    pub roll: &'a str,
}

/// Form body for `PUT /update`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStudentForm<'a> {
    pub old_roll: &'a str,
    pub new_name: &'a str,
    pub new_roll: &'a str,
}
