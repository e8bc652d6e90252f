//! Mock dashboard backend for testing
//!
//! This module provides a mock HTTP server that simulates the principal
//! dashboard backend. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_string, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use principal_dashboard::config::ApiConfig;
use principal_dashboard::{Dashboard, DashboardClient};

/// Mock backend server
pub struct BackendMock {
    pub server: MockServer,
}

impl BackendMock {
    /// Create a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.server.uri(),
            timeout_seconds: None,
            user_agent: "principal-dashboard-tests".to_string(),
        }
    }

    pub fn client(&self) -> DashboardClient {
        DashboardClient::new(&self.api_config()).expect("client")
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.client())
    }

    /// `POST /login_principal` accepting the test principal
    pub async fn mock_login_success(&self) {
        Mock::given(method("POST"))
            .and(path("/login_principal"))
            .and(body_string(format!(
                "username={}&password={}",
                test_username(),
                test_password()
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Login successful"
            })))
            .mount(&self.server)
            .await;
    }

    /// `POST /login_principal` answering every attempt with `body`
    pub async fn mock_login_reply(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/login_principal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `POST /login_principal` rejecting every attempt
    pub async fn mock_login_failure(&self, body: Value) {
        self.mock_login_reply(body).await;
    }

    /// `GET /students`, answered `times` times (unlimited when `None`)
    pub async fn mock_students(&self, students: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(students));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        mock.mount(&self.server).await;
    }

    /// `POST /view_requests` with the principal role and credentials
    pub async fn mock_leave_requests(&self, requests: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("POST"))
            .and(path("/view_requests"))
            .and(body_string(format!(
                "role=principal&username={}&password={}",
                test_username(),
                test_password()
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(requests));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        mock.mount(&self.server).await;
    }

    /// `GET /get_event_requests` with credentials in the query
    pub async fn mock_event_requests(&self, events: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("GET"))
            .and(path("/get_event_requests"))
            .and(query_param("username", test_username()))
            .and(query_param("password", test_password()))
            .respond_with(ResponseTemplate::new(200).set_body_json(events));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        mock.mount(&self.server).await;
    }

    /// `GET /get_emergencies` with credentials in the query
    pub async fn mock_emergencies(&self, emergencies: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("GET"))
            .and(path("/get_emergencies"))
            .and(query_param("username", test_username()))
            .and(query_param("password", test_password()))
            .respond_with(ResponseTemplate::new(200).set_body_json(emergencies));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        mock.mount(&self.server).await;
    }

    /// Every list endpoint with the default fixtures
    pub async fn setup_default_lists(&self) {
        self.mock_students(super::students_fixture(), None).await;
        self.mock_leave_requests(super::leave_requests_fixture(), None).await;
        self.mock_event_requests(super::event_requests_fixture(), None).await;
        self.mock_emergencies(super::emergencies_fixture(), None).await;
    }

    /// Login plus every list endpoint
    pub async fn setup_default_mocks(&self) {
        self.mock_login_success().await;
        self.setup_default_lists().await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Count received requests whose path contains `endpoint`
    pub async fn calls_to(&self, endpoint: &str) -> usize {
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        received_requests
            .iter()
            .filter(|req| req.url.path().contains(endpoint))
            .count()
    }

    /// Assert that `endpoint` was called exactly `times` times
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let matching_requests = self.calls_to(endpoint).await;
        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }

    /// Body of the last request sent to `endpoint`
    pub async fn last_body(&self, endpoint: &str) -> Option<String> {
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        received_requests
            .iter()
            .rev()
            .find(|req| req.url.path() == endpoint)
            .map(|req| String::from_utf8_lossy(&req.body).into_owned())
    }
}

/// Test principal username
pub fn test_username() -> &'static str {
    "head"
}

/// Test principal password
pub fn test_password() -> &'static str {
    "pw"
}
