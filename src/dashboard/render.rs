//! Plain-text views of the dashboard tables

use crate::models::{EmergencyRequest, EventRequest, LeaveRequest, Student};
use crate::utils::helpers::{display_or, format_timestamp};

use super::table::{Table, TextTable};

/// Placeholder for missing student branch or year
pub const NOT_AVAILABLE: &str = "N/A";

pub fn students_table(students: &[Student]) -> TextTable {
    let mut table = TextTable::new(["Name", "Roll", "Branch", "Year", "Registered"]);
    for student in students {
        table.push_row(vec![
            display_or(student.name.as_ref(), ""),
            display_or(student.roll.as_ref(), ""),
            display_or(student.branch.as_ref(), NOT_AVAILABLE),
            display_or(student.year.as_ref(), NOT_AVAILABLE),
            display_or(student.registered_at.as_ref(), ""),
        ]);
    }
    table
}

pub fn leave_requests_table(requests: &[LeaveRequest]) -> TextTable {
    let mut table = TextTable::new([
        "ID", "Name", "Roll", "Reason", "Start", "Return", "Days", "Status", "Response",
    ]);
    for request in requests {
        table.push_row(vec![
            display_or(request.id.as_ref(), ""),
            display_or(request.name.as_ref(), ""),
            display_or(request.roll.as_ref(), ""),
            display_or(request.reason.as_ref(), ""),
            display_or(request.start_date.as_ref(), ""),
            display_or(request.return_date.as_ref(), ""),
            display_or(request.total_days.as_ref(), ""),
            display_or(request.status.as_ref(), ""),
            display_or(request.response.as_ref(), ""),
        ]);
    }
    table
}

pub fn event_requests_table(events: &[EventRequest]) -> TextTable {
    let mut table = TextTable::new([
        "ID", "Title", "Date", "Location", "Description", "Status", "Response",
    ]);
    for event in events {
        table.push_row(vec![
            display_or(event.id.as_ref(), ""),
            display_or(event.title.as_ref(), ""),
            display_or(event.date.as_ref(), ""),
            display_or(event.location.as_ref(), ""),
            display_or(event.description.as_ref(), ""),
            display_or(event.status.as_ref(), ""),
            display_or(event.response.as_ref(), ""),
        ]);
    }
    table
}

pub fn emergencies_table(emergencies: &[EmergencyRequest]) -> TextTable {
    let mut table = TextTable::new([
        "ID", "Name", "Roll", "Type", "Description", "Status", "Response",
    ]);
    for emergency in emergencies {
        table.push_row(vec![
            display_or(emergency.id.as_ref(), ""),
            display_or(emergency.name.as_ref(), ""),
            display_or(emergency.roll.as_ref(), ""),
            display_or(emergency.emergency_type.as_ref(), ""),
            display_or(emergency.description.as_ref(), ""),
            display_or(emergency.status.as_ref(), ""),
            display_or(emergency.response.as_ref(), ""),
        ]);
    }
    table
}

/// Titled section with its refresh time
pub fn section<T>(title: &str, table: &Table<T>, layout: TextTable) -> String {
    let refreshed = table
        .refreshed_at()
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string());

    let mut out = format!("== {} ({} rows, refreshed {}) ==\n", title, table.len(), refreshed);
    if table.is_empty() {
        out.push_str("(no records)\n");
    } else {
        out.push_str(&layout.render());
    }
    out
}
