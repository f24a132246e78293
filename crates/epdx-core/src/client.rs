use crate::error::EpdError;
use crate::model::HealthStatus;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://epd-extractor-api-2025.azurewebsites.net";

/// Default request timeout. The extraction endpoint runs an LLM pass over the
/// whole document, so generous but bounded.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// HTTP client for the remote EPD extraction API.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct HealthBody {
    version: Option<String>,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, EpdError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EpdError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a PDF for extraction.
    ///
    /// Sends a multipart request with a single `pdf` field. A non-2xx
    /// response surfaces its status code and status text; the body of a
    /// successful response is returned as untyped JSON.
    pub async fn extract(&self, file_name: &str, pdf_bytes: Vec<u8>) -> Result<Value, EpdError> {
        let url = format!("{}/api/extract-epd", self.base_url);
        info!("Uploading {} ({} bytes) to {}", file_name, pdf_bytes.len(), url);

        let part = Part::bytes(pdf_bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("pdf", part);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Extraction request failed with {}", status);
            return Err(EpdError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let data: Value = response.json().await?;
        info!("Extraction complete");
        Ok(data)
    }

    /// Probe the API health endpoint.
    ///
    /// Never fails: a network error and a non-2xx response both come back as
    /// `ok = false`.
    pub async fn health_check(&self) -> HealthStatus {
        let url = format!("{}/api/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let version = response
                    .json::<HealthBody>()
                    .await
                    .ok()
                    .and_then(|body| body.version);
                match &version {
                    Some(v) => info!("API is healthy (v{v})"),
                    None => info!("API is healthy"),
                }
                HealthStatus { ok: true, version }
            }
            Ok(response) => {
                warn!("Health check returned {}", response.status());
                HealthStatus {
                    ok: false,
                    version: None,
                }
            }
            Err(e) => {
                warn!("API is not reachable: {e}");
                HealthStatus {
                    ok: false,
                    version: None,
                }
            }
        }
    }
}
