//! Typed data layer for the principal dashboard
//!
//! One async function per backend operation. Functions that need
//! authorization take the [`Session`] produced by [`DashboardClient::login`]
//! and resend its credentials under the field names each endpoint expects.

use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::models::{
    ApiMessage, DeleteEventForm, EmergencyRequest, EventRequest, EventUpdate, LeaveRequest,
    LeaveStatus, LoginForm, RegisterPrincipalForm, RegisterStudentForm, RequestStatus, Student,
    UpdateEmergencyForm, UpdateEventForm, UpdateLeaveStatusForm, UpdateStudentForm,
    ViewRequestsForm,
};
use crate::services::api::ApiClient;
use crate::services::session::Session;
use crate::utils::errors::{DashboardError, Result};
use crate::utils::helpers::encode_path_segment;
use crate::utils::logging;

/// Role value `/view_requests` expects for the principal view
pub const PRINCIPAL_ROLE: &str = "principal";

/// Fallback shown when a rejected login carries no text
pub const LOGIN_FAILED: &str = "Login failed";

/// Client for every dashboard operation
#[derive(Debug, Clone)]
pub struct DashboardClient {
    api: ApiClient,
}

impl DashboardClient {
    /// Create a new DashboardClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Backend welcome message from `GET /`
    pub async fn ping(&self) -> Result<Option<String>> {
        let reply: ApiMessage = self.api.get("/").await?;
        Ok(reply.resolve_message())
    }

    /// Register a principal account. The outcome is only a message.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Option<String>> {
        debug!(username = username, "Registering principal");

        let form = RegisterPrincipalForm { username, email, password };
        let reply: ApiMessage = self.api.post_form("/register_principal", &form).await?;

        let message = reply.resolve_message();
        info!(username = username, message = ?message, "Principal registration answered");
        Ok(message)
    }

    /// Log in; only an explicit `success: true` yields a session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        debug!(username = username, "Logging in principal");

        let form = LoginForm { username, password };
        let reply: ApiMessage = self.api.post_form("/login_principal", &form).await?;

        if reply.is_success() {
            logging::log_principal_action(username, "login", None);
            return Ok(Session::new(username, password));
        }

        // `error` is not consulted for login failures
        let message = ApiMessage {
            error: None,
            ..reply
        }
        .resolve_or(LOGIN_FAILED);
        warn!(username = username, message = %message, "Login rejected");
        Err(DashboardError::Authentication(message))
    }

    /// `GET /students`
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        let students: Vec<Student> = self.api.fetch_list("/students").await?;
        debug!(count = students.len(), "Loaded students");
        Ok(students)
    }

    /// `DELETE /delete_student/{roll}`
    pub async fn delete_student(&self, roll: &str) -> Result<ApiMessage> {
        let path = format!("/delete_student/{}", encode_path_segment(roll));
        let reply: ApiMessage = self.api.delete(&path).await?;
        info!(roll = roll, message = ?reply.resolve_message(), "Delete student answered");
        Ok(reply)
    }

    /// `POST /register` with `name`, `roll`
    pub async fn register_student(&self, name: &str, roll: &str) -> Result<ApiMessage> {
        let form = RegisterStudentForm { name, roll };
        let reply: ApiMessage = self.api.post_form("/register", &form).await?;
        info!(roll = roll, message = ?reply.resolve_message(), "Register student answered");
        Ok(reply)
    }

    /// `PUT /update` with `old_roll`, `new_name`, `new_roll`
    pub async fn update_student(&self, old_roll: &str, new_name: &str, new_roll: &str) -> Result<ApiMessage> {
        let form = UpdateStudentForm { old_roll, new_name, new_roll };
        let reply: ApiMessage = self.api.put_form("/update", &form).await?;
        info!(old_roll = old_roll, new_roll = new_roll, message = ?reply.resolve_message(), "Update student answered");
        Ok(reply)
    }

    /// `POST /view_requests` with `role=principal` and credentials
    pub async fn list_leave_requests(&self, session: &Session) -> Result<Vec<LeaveRequest>> {
        let credentials = session.credentials();
        let form = ViewRequestsForm {
            role: PRINCIPAL_ROLE,
            username: credentials.username,
            password: credentials.password,
        };
        let requests: Vec<LeaveRequest> = self.api.fetch_list_with_form("/view_requests", &form).await?;
        debug!(count = requests.len(), "Loaded leave requests");
        Ok(requests)
    }

    /// `POST /update_status`
    pub async fn update_leave_status(
        &self,
        session: &Session,
        request_id: i64,
        status: &LeaveStatus,
        response: &str,
    ) -> Result<ApiMessage> {
        let credentials = session.credentials();
        let form = UpdateLeaveStatusForm {
            request_id,
            status,
            response,
            username: credentials.username,
            password: credentials.password,
        };
        let reply: ApiMessage = self.api.post_form("/update_status", &form).await?;
        logging::log_principal_action(session.username(), "update_leave_status", Some(request_id.to_string().as_str()));
        Ok(reply)
    }

    /// `GET /get_event_requests?username=..&password=..`
    pub async fn list_event_requests(&self, session: &Session) -> Result<Vec<EventRequest>> {
        let events: Vec<EventRequest> = self
            .api
            .fetch_list_with_query("/get_event_requests", &session.credentials())
            .await?;
        debug!(count = events.len(), "Loaded event requests");
        Ok(events)
    }

    /// `POST /update_event`
    pub async fn update_event(&self, session: &Session, event_id: i64, update: &EventUpdate) -> Result<ApiMessage> {
        let principal = session.principal_credentials();
        let form = UpdateEventForm {
            event_id,
            title: &update.title,
            date: &update.date,
            location: &update.location,
            description: &update.description,
            status: &update.status,
            principalusername: principal.principalusername,
            principalpassword: principal.principalpassword,
        };
        let reply: ApiMessage = self.api.post_form("/update_event", &form).await?;
        logging::log_principal_action(session.username(), "update_event", Some(event_id.to_string().as_str()));
        Ok(reply)
    }

    /// `POST /delete_event`
    pub async fn delete_event(&self, session: &Session, event_id: i64) -> Result<ApiMessage> {
        let principal = session.principal_credentials();
        let form = DeleteEventForm {
            event_id,
            principalusername: principal.principalusername,
            principalpassword: principal.principalpassword,
        };
        let reply: ApiMessage = self.api.post_form("/delete_event", &form).await?;
        logging::log_principal_action(session.username(), "delete_event", Some(event_id.to_string().as_str()));
        Ok(reply)
    }

    /// `GET /get_emergencies?username=..&password=..`
    pub async fn list_emergencies(&self, session: &Session) -> Result<Vec<EmergencyRequest>> {
        let emergencies: Vec<EmergencyRequest> = self
            .api
            .fetch_list_with_query("/get_emergencies", &session.credentials())
            .await?;
        debug!(count = emergencies.len(), "Loaded emergency requests");
        Ok(emergencies)
    }

    /// `POST /update_emergency_status`
    pub async fn update_emergency_status(
        &self,
        session: &Session,
        id: i64,
        status: &RequestStatus,
        response: &str,
    ) -> Result<ApiMessage> {
        let credentials = session.credentials();
        let form = UpdateEmergencyForm {
            id,
            status,
            response,
            username: credentials.username,
            password: credentials.password,
        };
        let reply: ApiMessage = self.api.post_form("/update_emergency_status", &form).await?;
        logging::log_principal_action(session.username(), "update_emergency_status", Some(id.to_string().as_str()));
        Ok(reply)
    }
}
