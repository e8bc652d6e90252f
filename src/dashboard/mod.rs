//! Presentation layer
//!
//! [`Dashboard`] owns the principal session and the four displayed tables.
//! Data comes from [`DashboardClient`]; every load replaces its table
//! wholesale and every mutation is followed by a reload of the table it
//! touched. Outcomes that the principal should see are queued as
//! [`Notice`]s.

pub mod notice;
pub mod render;
pub mod table;

use tracing::{error, info, warn};

use crate::models::{
    ApiMessage, EmergencyRequest, EventEdit, EventRequest, EventUpdate, LeaveRequest, LeaveStatus,
    RequestStatus, Student,
};
use crate::services::{DashboardClient, Session};
use crate::utils::errors::{DashboardError, Result};
use crate::utils::logging;

pub use notice::{Notice, NoticeLevel};
pub use table::{Table, TextTable};

/// Shown when a reply carries none of `message`, `detail` or `error`
pub const NO_MESSAGE: &str = "No message returned";
pub const EVENT_UPDATED: &str = "Event updated";
pub const EVENT_DELETED: &str = "Event deleted";

pub struct Dashboard {
    client: DashboardClient,
    session: Option<Session>,
    students: Table<Student>,
    leave_requests: Table<LeaveRequest>,
    event_requests: Table<EventRequest>,
    emergencies: Table<EmergencyRequest>,
    register_message: Option<String>,
    login_error: Option<String>,
    notices: Vec<Notice>,
}

impl Dashboard {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            session: None,
            students: Table::default(),
            leave_requests: Table::default(),
            event_requests: Table::default(),
            emergencies: Table::default(),
            register_message: None,
            login_error: None,
            notices: Vec::new(),
        }
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn students(&self) -> &Table<Student> {
        &self.students
    }

    pub fn leave_requests(&self) -> &Table<LeaveRequest> {
        &self.leave_requests
    }

    pub fn event_requests(&self) -> &Table<EventRequest> {
        &self.event_requests
    }

    pub fn emergencies(&self) -> &Table<EmergencyRequest> {
        &self.emergencies
    }

    pub fn register_message(&self) -> Option<&str> {
        self.register_message.as_deref()
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain queued notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn require_session(&self) -> Result<Session> {
        self.session.clone().ok_or(DashboardError::NotLoggedIn)
    }

    /// Register a principal; the reply text becomes the register message
    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> Result<()> {
        match self.client.register(username, email, password).await {
            Ok(message) => {
                self.register_message = message;
                Ok(())
            }
            Err(e) => {
                logging::log_api_error("register_principal", &e.to_string(), Some(username));
                Err(e)
            }
        }
    }

    /// Log in and load all four tables. A rejected login sets the login
    /// error and changes nothing else.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        match self.client.login(username, password).await {
            Ok(session) => {
                self.session = Some(session);
                self.login_error = None;
                self.load_all().await;
                Ok(())
            }
            Err(DashboardError::Authentication(message)) => {
                self.login_error = Some(message.clone());
                Err(DashboardError::Authentication(message))
            }
            Err(e) => {
                logging::log_api_error("login_principal", &e.to_string(), Some(username));
                Err(e)
            }
        }
    }

    /// Forget the session and everything loaded with it
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(principal = session.username(), "Principal logged out");
        }
        self.students.clear();
        self.leave_requests.clear();
        self.event_requests.clear();
        self.emergencies.clear();
        self.login_error = None;
        self.notices.clear();
    }

    /// Run the four loads concurrently; failures are logged per table
    pub async fn load_all(&mut self) {
        let Some(session) = self.session.clone() else {
            warn!("Skipping dashboard load without a session");
            return;
        };

        let client = &self.client;
        let (students, leave_requests, event_requests, emergencies) = tokio::join!(
            client.list_students(),
            client.list_leave_requests(&session),
            client.list_event_requests(&session),
            client.list_emergencies(&session),
        );

        let _ = apply_load(&mut self.students, "students", students);
        let _ = apply_load(&mut self.leave_requests, "leave requests", leave_requests);
        let _ = apply_load(&mut self.event_requests, "event requests", event_requests);
        let _ = apply_load(&mut self.emergencies, "emergency requests", emergencies);
    }

    pub async fn load_students(&mut self) -> Result<()> {
        let result = self.client.list_students().await;
        apply_load(&mut self.students, "students", result)
    }

    pub async fn load_leave_requests(&mut self) -> Result<()> {
        let session = self.require_session()?;
        let result = self.client.list_leave_requests(&session).await;
        apply_load(&mut self.leave_requests, "leave requests", result)
    }

    pub async fn load_event_requests(&mut self) -> Result<()> {
        let session = self.require_session()?;
        let result = self.client.list_event_requests(&session).await;
        apply_load(&mut self.event_requests, "event requests", result)
    }

    pub async fn load_emergencies(&mut self) -> Result<()> {
        let session = self.require_session()?;
        let result = self.client.list_emergencies(&session).await;
        apply_load(&mut self.emergencies, "emergency requests", result)
    }

    /// Delete a student by roll, then reload students
    pub async fn delete_student(&mut self, roll: &str) -> Result<()> {
        let reply = self
            .client
            .delete_student(roll)
            .await
            .map_err(|e| log_failure("delete_student", e))?;
        self.notify_reply(&reply, NO_MESSAGE);
        self.reload_students().await;
        Ok(())
    }

    /// Add a student to the roster, then reload students
    pub async fn register_student(&mut self, name: &str, roll: &str) -> Result<()> {
        let reply = self
            .client
            .register_student(name, roll)
            .await
            .map_err(|e| log_failure("register_student", e))?;
        self.notify_reply(&reply, NO_MESSAGE);
        self.reload_students().await;
        Ok(())
    }

    /// Rename or re-number a student, then reload students
    pub async fn update_student(&mut self, old_roll: &str, new_name: &str, new_roll: &str) -> Result<()> {
        let reply = self
            .client
            .update_student(old_roll, new_name, new_roll)
            .await
            .map_err(|e| log_failure("update_student", e))?;
        self.notify_reply(&reply, NO_MESSAGE);
        self.reload_students().await;
        Ok(())
    }

    /// Answer a leave request. Without `response` the displayed response
    /// is resent.
    pub async fn submit_leave_status(
        &mut self,
        request_id: i64,
        status: LeaveStatus,
        response: Option<String>,
    ) -> Result<()> {
        let session = self.require_session()?;
        if !status.is_selectable() {
            return Err(DashboardError::InvalidInput(format!(
                "leave status must be one of Approved, Rejected, Paused (got {})",
                status
            )));
        }

        let response = response.unwrap_or_else(|| {
            self.leave_requests
                .find(|r| r.id == Some(request_id))
                .and_then(|r| r.response.clone())
                .unwrap_or_default()
        });

        let reply = self
            .client
            .update_leave_status(&session, request_id, &status, &response)
            .await
            .map_err(|e| log_failure("update_status", e))?;
        self.notify_reply(&reply, NO_MESSAGE);
        if let Err(e) = self.load_leave_requests().await {
            error!(error = %e, "Reload after leave status update failed");
        }
        Ok(())
    }

    /// Edit a displayed event request; fields left out of `edit` keep
    /// their displayed values
    pub async fn update_event(&mut self, event_id: i64, edit: EventEdit) -> Result<()> {
        let session = self.require_session()?;
        let current = self
            .event_requests
            .find(|e| e.id == Some(event_id))
            .cloned()
            .ok_or_else(|| DashboardError::RecordNotFound {
                kind: "Event request",
                id: event_id.to_string(),
            })?;
        let update = EventUpdate::from_current(&current, edit);

        match self.client.update_event(&session, event_id, &update).await {
            Ok(reply) => {
                self.notify_reply(&reply, EVENT_UPDATED);
                self.reload_event_requests().await;
                Ok(())
            }
            Err(e) => Err(self.alert_failure("update_event", e)),
        }
    }

    /// Delete an event request. Callers confirm with the principal first.
    pub async fn delete_event(&mut self, event_id: i64) -> Result<()> {
        let session = self.require_session()?;
        match self.client.delete_event(&session, event_id).await {
            Ok(reply) => {
                self.notify_reply(&reply, EVENT_DELETED);
                self.reload_event_requests().await;
                Ok(())
            }
            Err(e) => Err(self.alert_failure("delete_event", e)),
        }
    }

    /// Answer an emergency request. Without `response` the displayed
    /// response is resent.
    pub async fn update_emergency(
        &mut self,
        id: i64,
        status: RequestStatus,
        response: Option<String>,
    ) -> Result<()> {
        let session = self.require_session()?;
        if !status.is_selectable() {
            return Err(DashboardError::InvalidInput(format!(
                "emergency status must be one of Approved, Rejected, Pending (got {})",
                status
            )));
        }

        let response = response.unwrap_or_else(|| {
            self.emergencies
                .find(|e| e.id == Some(id))
                .and_then(|e| e.response.clone())
                .unwrap_or_default()
        });

        match self
            .client
            .update_emergency_status(&session, id, &status, &response)
            .await
        {
            Ok(reply) => {
                self.notify_reply(&reply, NO_MESSAGE);
                if let Err(e) = self.load_emergencies().await {
                    error!(error = %e, "Reload after emergency update failed");
                }
                Ok(())
            }
            Err(e) => Err(self.alert_failure("update_emergency_status", e)),
        }
    }

    /// Every table as text, in dashboard order
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(session) = &self.session {
            out.push_str(&format!("Logged in as {}\n\n", session.username()));
        }
        out.push_str(&self.render_students());
        out.push('\n');
        out.push_str(&render::section(
            "Leave Requests",
            &self.leave_requests,
            render::leave_requests_table(self.leave_requests.rows()),
        ));
        out.push('\n');
        out.push_str(&render::section(
            "Event Requests",
            &self.event_requests,
            render::event_requests_table(self.event_requests.rows()),
        ));
        out.push('\n');
        out.push_str(&render::section(
            "Emergency Requests",
            &self.emergencies,
            render::emergencies_table(self.emergencies.rows()),
        ));
        out
    }

    pub fn render_students(&self) -> String {
        render::section(
            "Students",
            &self.students,
            render::students_table(self.students.rows()),
        )
    }

    async fn reload_students(&mut self) {
        if let Err(e) = self.load_students().await {
            error!(error = %e, "Reload of students failed");
        }
    }

    async fn reload_event_requests(&mut self) {
        if let Err(e) = self.load_event_requests().await {
            error!(error = %e, "Reload of event requests failed");
        }
    }

    fn notify_reply(&mut self, reply: &ApiMessage, fallback: &str) {
        let text = reply.resolve_or(fallback);
        if reply.is_failure() {
            logging::log_rejection("mutation", &text);
        }
        self.notices.push(Notice::info(text));
    }

    fn alert_failure(&mut self, action: &str, e: DashboardError) -> DashboardError {
        logging::log_api_error(action, &e.to_string(), None);
        self.notices.push(Notice::error(format!("Error: {}", e)));
        e
    }
}

fn apply_load<T>(table: &mut Table<T>, what: &str, result: Result<Vec<T>>) -> Result<()> {
    match result {
        Ok(rows) => {
            info!(table = what, count = rows.len(), "Table refreshed");
            table.replace(rows);
            Ok(())
        }
        Err(e) => {
            error!(table = what, error = %e, "Failed to load table");
            Err(e)
        }
    }
}

fn log_failure(action: &str, e: DashboardError) -> DashboardError {
    logging::log_api_error(action, &e.to_string(), None);
    e
}
