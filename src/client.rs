//! HTTP client for the Dr. Macadamia API.
//!
//! Lets the CLI answer queries from a running `dr-macadamia serve` instead of
//! loading the table itself. The base URL comes from `--server`, then
//! `DR_MACADAMIA_URL`, then [`DEFAULT_URL`](crate::config::DEFAULT_URL).

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the Dr. Macadamia API.
#[derive(Debug, Clone)]
pub struct DoctorClient {
    base_url: String,
    client: Client,
}

impl DoctorClient {
    /// Create client from `--server` or the environment.
    pub fn from_env(explicit: Option<String>) -> Self {
        Self::new(crate::config::server_url(explicit))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::BadRequest(format!("Invalid server URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::BadRequest("Server URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Request failed with {}: {}", status, body);
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let response = self.client.get(self.url(segments)?).send().await?;
        self.handle_response(response).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.url(segments)?)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // Selection lists
    // ============================================================

    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.get(&["health"]).await
    }

    pub async fn catalog(&self) -> Result<Catalog, ClientError> {
        self.get(&["catalog"]).await
    }

    pub async fn symptoms(&self) -> Result<Vec<String>, ClientError> {
        self.get(&["symptoms"]).await
    }

    pub async fn diseases(&self) -> Result<Vec<String>, ClientError> {
        self.get(&["diseases"]).await
    }

    pub async fn treatments(&self) -> Result<Vec<String>, ClientError> {
        self.get(&["treatments"]).await
    }

    // ============================================================
    // Queries
    // ============================================================

    pub async fn diseases_with(&self, symptom: &str) -> Result<Vec<String>, ClientError> {
        self.get(&["symptoms", symptom, "diseases"]).await
    }

    pub async fn treatments_for(&self, symptom: &str) -> Result<Vec<String>, ClientError> {
        self.get(&["symptoms", symptom, "treatments"]).await
    }

    pub async fn symptoms_of(&self, disease: &str) -> Result<Vec<String>, ClientError> {
        self.get(&["diseases", disease, "symptoms"]).await
    }

    pub async fn treatments_of(&self, disease: &str) -> Result<Vec<String>, ClientError> {
        self.get(&["diseases", disease, "treatments"]).await
    }

    pub async fn diagnose(&self, symptom: &str) -> Result<Diagnosis, ClientError> {
        self.get_with_query(&["diagnosis"], &[("symptom", symptom)])
            .await
    }

    pub async fn profile(&self, disease: &str) -> Result<DiseaseProfile, ClientError> {
        self.get_with_query(&["profile"], &[("disease", disease)])
            .await
    }
}
