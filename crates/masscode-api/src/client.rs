//! HTTP client wrapper for the massCode json-server API.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Result};
use crate::models::{Folder, Snippet, Tag};
use crate::params::QueryParams;

/// Default base URL of the local massCode API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3033";

/// Collection endpoints.
const TAGS: &str = "/tags";
const FOLDERS: &str = "/folders";
const SNIPPETS: &str = "/snippets";

/// Client for the json-server REST API backing massCode.
///
/// Every call goes straight to the network; caching lives one layer up.
#[derive(Debug, Clone)]
pub struct JservClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// Builder for [`JservClient`].
#[derive(Debug, Clone)]
pub struct JservClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl JservClientBuilder {
    /// Creates a builder pointing at [`DEFAULT_BASE_URL`] with no timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Sets the API base URL (no trailing slash needed).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (e.g. TLS backend initialization fails).
    pub fn build(self) -> Result<JservClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(JservClient {
            http_client: builder.build()?,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for JservClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JservClient {
    /// Creates a client for the default local API.
    pub fn new() -> Result<Self> {
        JservClientBuilder::new().build()
    }

    /// Creates a client for a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        JservClientBuilder::new().base_url(base_url).build()
    }

    /// Returns a builder for custom configuration.
    pub fn builder() -> JservClientBuilder {
        JservClientBuilder::new()
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ==================== Collections ====================

    /// `GET /tags` with the given filter parameters.
    pub async fn get_tags(&self, params: &QueryParams) -> Result<Vec<Tag>> {
        self.get(TAGS, params).await
    }

    /// `GET /folders` with the given filter parameters.
    pub async fn get_folders(&self, params: &QueryParams) -> Result<Vec<Folder>> {
        self.get(FOLDERS, params).await
    }

    /// `GET /snippets` with the given filter parameters.
    pub async fn get_snippets(&self, params: &QueryParams) -> Result<Vec<Snippet>> {
        self.get(SNIPPETS, params).await
    }

    // ==================== Partial updates ====================

    /// `PATCH /tags/:id`, returning the updated tag.
    pub async fn patch_tag<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<Tag> {
        self.patch(&format!("{}/{}", TAGS, id), body).await
    }

    /// `PATCH /folders/:id`, returning the updated folder.
    pub async fn patch_folder<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<Folder> {
        self.patch(&format!("{}/{}", FOLDERS, id), body).await
    }

    /// `PATCH /snippets/:id`, returning the updated snippet.
    pub async fn patch_snippet<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Snippet> {
        self.patch(&format!("{}/{}", SNIPPETS, id), body).await
    }

    // ==================== Raw requests ====================

    /// Performs a GET request to the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/tags")
    /// * `params` - Query parameters, sent in order
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &QueryParams) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = "GET", %url, params = %params, "Sending request");

        let response = self
            .http_client
            .get(&url)
            .query(params.pairs())
            .send()
            .await?;

        self.handle_response(endpoint, response).await
    }

    /// Performs a PATCH request to the given endpoint with a JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = "PATCH", %url, "Sending request");

        let response = self.http_client.patch(&url).json(body).send().await?;

        self.handle_response(endpoint, response).await
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(parse_error_response(endpoint, response).await.into())
    }
}

/// Parses an error response into an [`ApiError`].
async fn parse_error_response(endpoint: &str, response: reqwest::Response) -> ApiError {
    let status = response.status();
    let status_code = status.as_u16();
    let message = response.text().await.unwrap_or_default();

    match status_code {
        404 => {
            let mut segments = endpoint.trim_start_matches('/').splitn(2, '/');
            let resource = segments.next().unwrap_or_default().to_string();
            let id = segments.next().unwrap_or("unknown").to_string();
            ApiError::NotFound { resource, id }
        }
        400 => ApiError::Validation {
            message: if message.is_empty() {
                "Bad request".to_string()
            } else {
                message
            },
        },
        _ => ApiError::Http {
            status: status_code,
            message: if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                message
            },
        },
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
