//! Shared HTTP layer for the dashboard backend
//!
//! This module handles HTTP client setup, URL composition, form and query
//! encoding, response decoding and transport error mapping. Every
//! dashboard operation goes through [`ApiClient`].

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::models::ApiMessage;
use crate::utils::errors::{ApiError, DashboardError, Result};
use crate::utils::logging;

/// HTTP client bound to one backend origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

/// Decoded JSON reply with its HTTP status
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(DashboardError::Http)?;

        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an operation path such as `/students` against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// `GET path`
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::GET, path, |req| req).await?.into_typed()
    }

    /// `POST path` with a form-url-encoded body
    pub async fn post_form<F, R>(&self, path: &str, form: &F) -> Result<R>
    where
        F: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::POST, path, |req| req.form(form))
            .await?
            .into_typed()
    }

    /// `PUT path` with a form-url-encoded body
    pub async fn put_form<F, R>(&self, path: &str, form: &F) -> Result<R>
    where
        F: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::PUT, path, |req| req.form(form))
            .await?
            .into_typed()
    }

    /// `DELETE path`
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::DELETE, path, |req| req).await?.into_typed()
    }

    /// Fetch records with `GET path`
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.execute(Method::GET, path, |req| req).await?.into_list()
    }

    /// Fetch records with `GET path?query`
    pub async fn fetch_list_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<Vec<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, |req| req.query(query))
            .await?
            .into_list()
    }

    /// Fetch records with `POST path` and a form body
    pub async fn fetch_list_with_form<F, T>(&self, path: &str, form: &F) -> Result<Vec<T>>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, |req| req.form(form))
            .await?
            .into_list()
    }

    /// Send one request and decode its JSON body, whatever the status
    pub async fn execute<B>(&self, method: Method, path: &str, build: B) -> Result<Reply>
    where
        B: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.endpoint(path)?;
        logging::log_request(method.as_str(), path);

        let request = build(self.client.request(method.clone(), url));
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        logging::log_response(method.as_str(), path, status.as_u16());

        let text = response.text().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = text.len(), "Decoding backend reply");

        match serde_json::from_str(&text) {
            Ok(body) => Ok(Reply { status, body }),
            Err(e) if status.is_success() => Err(ApiError::InvalidResponse(e.to_string()).into()),
            Err(_) => Err(ApiError::RequestFailed(format!("HTTP {}: {}", status, text)).into()),
        }
    }
}

impl Reply {
    /// Decode the body into `R`
    pub fn into_typed<R: DeserializeOwned>(self) -> Result<R> {
        serde_json::from_value(self.body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }

    /// Decode a list body record by record; an object in place of the
    /// array is a rejection carrying the resolved message
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        match self.body {
            Value::Array(items) => Ok(decode_records(items)),
            body @ Value::Object(_) => {
                let reply: ApiMessage = serde_json::from_value(body)
                    .map_err(|e| DashboardError::from(ApiError::InvalidResponse(e.to_string())))?;
                Err(ApiError::Rejected {
                    status: self.status.as_u16(),
                    message: reply.resolve_or("Unexpected response from backend"),
                }
                .into())
            }
            other => Err(ApiError::InvalidResponse(format!(
                "expected a list of records, got {}",
                other
            ))
            .into()),
        }
    }
}

/// Records that fail to decode are skipped; the rest keep server order
fn decode_records<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index = index, error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect()
}

fn map_transport_error(e: reqwest::Error) -> DashboardError {
    if e.is_timeout() {
        DashboardError::Api(ApiError::Timeout)
    } else if e.is_connect() {
        DashboardError::Api(ApiError::ServiceUnavailable)
    } else if e.is_decode() {
        DashboardError::Api(ApiError::InvalidResponse(e.to_string()))
    } else {
        DashboardError::Api(ApiError::RequestFailed(e.to_string()))
    }
}
