//! Leave request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::{opt_int, opt_text};
use super::status::LeaveStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(default, deserialize_with = "opt_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub roll: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub return_date: Option<String>,
    #[serde(default, deserialize_with = "opt_int")]
    pub total_days: Option<i64>,
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    #[serde(default, deserialize_with = "opt_text")]
    pub response: Option<String>,
}

impl LeaveRequest {
    pub fn start_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(self.start_date.as_deref())
    }

    pub fn return_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(self.return_date.as_deref())
    }
}

pub(crate) fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
}

/// Form body for `POST /view_requests`
#[derive(Debug, Clone, Serialize)]
pub struct ViewRequestsForm<'a> {
    pub role: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Form body for `POST /update_status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateLeaveStatusForm<'a> {
    pub request_id: i64,
    pub status: &'a LeaveStatus,
    pub response: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}
