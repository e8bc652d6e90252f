//! Event request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::{opt_int, opt_text};
use super::leave::parse_date;
use super::status::RequestStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(default, deserialize_with = "opt_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default, deserialize_with = "opt_text")]
    pub response: Option<String>,
}

impl EventRequest {
    pub fn date_parsed(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_deref())
    }
}

/// Edited event fields; absent fields keep the displayed value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventEdit {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: Option<RequestStatus>,
}

/// Complete set of event fields sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct EventUpdate {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub status: RequestStatus,
}

impl EventUpdate {
    /// Apply `edit` on top of the currently displayed record
    pub fn from_current(current: &EventRequest, edit: EventEdit) -> Self {
        Self {
            title: edit.title.or_else(|| current.title.clone()).unwrap_or_default(),
            date: edit.date.or_else(|| current.date.clone()).unwrap_or_default(),
            location: edit.location.or_else(|| current.location.clone()).unwrap_or_default(),
            description: edit
                .description
                .or_else(|| current.description.clone())
                .unwrap_or_default(),
            status: edit
                .status
                .or_else(|| current.status.clone().filter(RequestStatus::is_selectable))
                .unwrap_or(RequestStatus::Approved),
        }
    }
}

/// Form body for `POST /update_event`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEventForm<'a> {
    #[serde(rename = "eventId")]
    pub event_id: i64,
    pub title: &'a str,
    pub date: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub status: &'a RequestStatus,
    pub principalusername: &'a str,
    pub principalpassword: &'a str,
}

/// Form body for `POST /delete_event`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEventForm<'a> {
    #[serde(rename = "eventId")]
    pub event_id: i64,
    pub principalusername: &'a str,
    pub principalpassword: &'a str,
}
