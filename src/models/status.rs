//! Request status values
//!
//! Statuses travel as the exact strings the backend stores ("Approved",
//! "Rejected", ...). Values this client does not know are kept verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a leave request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveStatus {
    Approved,
    Rejected,
    Paused,
    Pending,
    Other(String),
}

/// Status of an event or emergency request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Approved,
    Rejected,
    Pending,
    Other(String),
}

impl LeaveStatus {
    /// Statuses a principal can choose when answering a leave request
    pub const SELECTABLE: [LeaveStatus; 3] =
        [LeaveStatus::Approved, LeaveStatus::Rejected, LeaveStatus::Paused];

    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Paused => "Paused",
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Other(other) => other,
        }
    }

    pub fn is_selectable(&self) -> bool {
        Self::SELECTABLE.contains(self)
    }
}

impl RequestStatus {
    /// Statuses a principal can choose for events and emergencies
    pub const SELECTABLE: [RequestStatus; 3] =
        [RequestStatus::Approved, RequestStatus::Rejected, RequestStatus::Pending];

    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Pending => "Pending",
            RequestStatus::Other(other) => other,
        }
    }

    pub fn is_selectable(&self) -> bool {
        Self::SELECTABLE.contains(self)
    }
}

impl From<String> for LeaveStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Approved" => LeaveStatus::Approved,
            "Rejected" => LeaveStatus::Rejected,
            "Paused" => LeaveStatus::Paused,
            "Pending" => LeaveStatus::Pending,
            _ => LeaveStatus::Other(value),
        }
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Approved" => RequestStatus::Approved,
            "Rejected" => RequestStatus::Rejected,
            "Pending" => RequestStatus::Pending,
            _ => RequestStatus::Other(value),
        }
    }
}

/// Error for status names typed by the principal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for LeaveStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            "paused" => Ok(LeaveStatus::Paused),
            "pending" => Ok(LeaveStatus::Pending),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            "pending" => Ok(RequestStatus::Pending),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LeaveStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(LeaveStatus::from)
    }
}

impl Serialize for RequestStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(RequestStatus::from)
    }
}
