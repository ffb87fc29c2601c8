//! HTTP client for the platform REST API
//!
//! Thin typed wrapper over the collection and analysis endpoints. Every
//! response is checked for a success status before the body is read, so
//! a non-2xx answer surfaces as an error instead of being applied as
//! data.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::records::{InsightRecord, InsightSubmission, NewsRecord, NewsSubmission};
use crate::upload::{self, DocumentAnalysis};

/// Failures surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
  /// Transport failures and malformed response bodies
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),
  /// The server answered with a non-success status
  #[error("server returned {status}: {message}")]
  Status { status: StatusCode, message: String },
  /// The staged document could not be read
  #[error("could not read {path}: {source}")]
  File {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

/// Configuration for the platform HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the platform API (e.g. "http://localhost:8000/api")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: "http://localhost:8000/api".to_string(), timeout_secs: 30 }
  }
}

/// HTTP client for the platform REST API
pub struct ApiClient {
  client: Client,
  config: ClientConfig,
}

impl Default for ApiClient {
  fn default() -> Self {
    Self::new()
  }
}

impl ApiClient {
  /// Create a new client with default configuration
  pub fn new() -> Self {
    Self::with_config(ClientConfig::default())
  }

  /// Create a new client with custom configuration
  pub fn with_config(config: ClientConfig) -> Self {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .expect("Failed to create HTTP client");

    Self { client, config }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Fetch the full news collection
  pub async fn fetch_news(&self) -> Result<Vec<NewsRecord>, ApiError> {
    let url = format!("{}/news/", self.config.base_url);
    debug!(%url, "fetching news collection");

    let response = self.client.get(&url).send().await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
  }

  /// Submit a news record, returning the created record
  pub async fn create_news(&self, submission: &NewsSubmission) -> Result<NewsRecord, ApiError> {
    let url = format!("{}/news/", self.config.base_url);

    let response = self.client.post(&url).json(submission).send().await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
  }

  /// Fetch the full industry-insight collection
  pub async fn fetch_insights(&self) -> Result<Vec<InsightRecord>, ApiError> {
    let url = format!("{}/industry-insights/", self.config.base_url);
    debug!(%url, "fetching insight collection");

    let response = self.client.get(&url).send().await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
  }

  /// Submit an industry insight, returning the created record
  pub async fn create_insight(
    &self,
    submission: &InsightSubmission,
  ) -> Result<InsightRecord, ApiError> {
    let url = format!("{}/industry-insights/", self.config.base_url);

    let response = self.client.post(&url).json(submission).send().await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
  }

  /// Send one document as a single-part multipart payload and await
  /// its analysis
  pub async fn upload_document(&self, path: &Path) -> Result<DocumentAnalysis, ApiError> {
    let bytes = tokio::fs::read(path)
      .await
      .map_err(|source| ApiError::File { path: path.display().to_string(), source })?;

    let file_name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| "document".to_string());

    let part = reqwest::multipart::Part::bytes(bytes)
      .file_name(file_name)
      .mime_str(upload::mime_for(path))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let url = format!("{}/news/upload-document/", self.config.base_url);
    debug!(%url, "uploading document for analysis");

    let response = self.client.post(&url).multipart(form).send().await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
  }
}

/// Reject non-success responses, preferring the server's own error
/// message when the body carries one
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }

  let body = response.text().await.unwrap_or_default();
  Err(ApiError::Status { status, message: server_message(&body) })
}

/// Extract a human-readable message from an error body.
///
/// The platform reports errors as JSON with an "error" or "message"
/// field; anything else falls back to the raw body.
fn server_message(body: &str) -> String {
  if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
    for key in ["error", "message"] {
      if let Some(message) = value.get(key).and_then(|field| field.as_str()) {
        return message.to_string();
      }
    }
  }

  if body.trim().is_empty() {
    "no further detail provided".to_string()
  } else {
    body.trim().to_string()
  }
}

/// Get the configured client (checks environment variables)
pub fn get_client() -> ApiClient {
  let base_url =
    std::env::var("PULSE_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());

  let timeout_secs = std::env::var("PULSE_TIMEOUT_SECS")
    .unwrap_or_else(|_| "30".to_string())
    .parse()
    .unwrap_or(30);

  ApiClient::with_config(ClientConfig { base_url, timeout_secs })
}
