//! Graylog API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{GraylogError, Result};

const USER_AGENT: &str = concat!("graylogapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Graylog API client.
///
/// Handles basic authentication and HTTP requests. Entity-specific
/// operations are implemented via the `Get`, `List`, `Create`, `Update`
/// and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use graylogapi::GraylogClient;
///
/// # fn example() -> graylogapi::Result<()> {
/// // Create from environment variables
/// let client = GraylogClient::from_env()?;
///
/// // Or configure manually
/// let client = GraylogClient::new("admin", "admin", "http://localhost:9000/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GraylogClient {
    http: Client,
    base_url: Arc<Url>,
    name: String,
    password: String,
}

impl std::fmt::Debug for GraylogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraylogClient")
            .field("base_url", &self.base_url.as_str())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl GraylogClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GRAYLOG_AUTH_NAME` and `GRAYLOG_AUTH_PASSWORD` for
    /// authentication and `GRAYLOG_WEB_ENDPOINT_URI` for the base URL
    /// (e.g. `http://localhost:9000/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three variables is not set.
    pub fn from_env() -> Result<Self> {
        let name = env::var("GRAYLOG_AUTH_NAME").map_err(|_| {
            GraylogError::ConfigMissing("GRAYLOG_AUTH_NAME environment variable not set".to_string())
        })?;
        let password = env::var("GRAYLOG_AUTH_PASSWORD").map_err(|_| {
            GraylogError::ConfigMissing(
                "GRAYLOG_AUTH_PASSWORD environment variable not set".to_string(),
            )
        })?;
        let base_url = env::var("GRAYLOG_WEB_ENDPOINT_URI").map_err(|_| {
            GraylogError::ConfigMissing(
                "GRAYLOG_WEB_ENDPOINT_URI environment variable not set".to_string(),
            )
        })?;

        Self::new(&name, &password, &base_url)
    }

    /// Create a new client with the provided credentials and base URL.
    ///
    /// # Arguments
    ///
    /// * `name` - User name (or an access token, with `"token"` as password)
    /// * `password` - Password
    /// * `base_url` - Base URL of the Graylog API (e.g., `http://localhost:9000/api`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(name: &str, password: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so Url::join keeps the last segment
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(GraylogError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            name: name.to_string(),
            password: password.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.name, Some(&self.password))
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.name, Some(&self.password))
            .query(query)
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .basic_auth(&self.name, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with no body.
    #[tracing::instrument(skip(self))]
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .basic_auth(&self.name, Some(&self.password))
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .put(url)
            .basic_auth(&self.name, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PUT request with no body.
    #[tracing::instrument(skip(self))]
    pub async fn put_empty(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .put(url)
            .basic_auth(&self.name, Some(&self.password))
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .basic_auth(&self.name, Some(&self.password))
            .send()
            .await
            .map_err(GraylogError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(GraylogError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// The server answers failures with a `{"type": ..., "message": ...}`
    /// envelope; fall back to the raw body when it doesn't parse.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("type").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}
