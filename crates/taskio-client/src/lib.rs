//! Typed HTTP client for the task REST service.
//!
//! All requests and responses are JSON. Failures are normalized into
//! [`ClientError`]; the only statuses with operation-specific meaning are the
//! 404 exemptions on [`TaskClient::get_task`] and [`TaskClient::delete_task`].

mod error;

pub use error::ClientError;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use taskio_core::Task;
use taskio_core::filters::SearchFilters;
use taskio_core::id::TaskId;

/// Service location used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Single point of contact with the remote task service.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    http: reqwest::Client,
}

impl TaskClient {
    /// Create a client against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing connection pool.
    #[must_use]
    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full task collection.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status.
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self.http.get(self.url("/tasks")).send().await?;
        Self::parse_success(response).await
    }

    /// Fetch the subset matching `filters` via the dedicated search endpoint.
    ///
    /// Empty filters still target the search endpoint, with no query string
    /// at all.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status.
    pub async fn search_tasks(&self, filters: &SearchFilters) -> ClientResult<Vec<Task>> {
        let pairs = filters.query_pairs();
        debug!(params = pairs.len(), "searching tasks");
        let response = self
            .http
            .get(self.url("/tasks/search"))
            .query(&pairs)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// Fetch a single task. A missing task is `Ok(None)`, not an error.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status other than 404.
    pub async fn get_task(&self, id: TaskId) -> ClientResult<Option<Task>> {
        let response = self.http.get(self.url(&format!("/tasks/{id}"))).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse_success(response).await.map(Some)
    }

    /// Create `task` (its `id` must be unset) and return the stored task,
    /// including the server-assigned id.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status.
    pub async fn create_task(&self, task: &Task) -> ClientResult<Task> {
        let response = self.http.post(self.url("/tasks")).json(task).send().await?;
        Self::parse_success(response).await
    }

    /// Replace the task at `id` wholesale. A missing task is a normal error
    /// here, unlike [`Self::get_task`] and [`Self::delete_task`].
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status, 404 included.
    pub async fn update_task(&self, id: TaskId, task: &Task) -> ClientResult<Task> {
        let response = self
            .http
            .put(self.url(&format!("/tasks/{id}")))
            .json(task)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// Delete the task at `id`. A 404 means the desired end state already
    /// holds, so it counts as success.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status other than 404.
    pub async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        let response = self.http.delete(self.url(&format!("/tasks/{id}"))).send().await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            debug!(%id, status = status.as_u16(), "deleted task");
            return Ok(());
        }
        Err(error::from_response(response).await)
    }

    /// Fetch the distinct category labels currently in use.
    ///
    /// # Errors
    /// Fails on transport errors and any non-success status.
    pub async fn list_categories(&self) -> ClientResult<Vec<String>> {
        let response = self.http.get(self.url("/tasks/categories")).send().await?;
        Self::parse_success(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn parse_success<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        if !response.status().is_success() {
            return Err(error::from_response(response).await);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
