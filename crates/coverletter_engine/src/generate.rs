use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, GenerateError, LetterRequest};

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Sends one request and returns the generated letter text.
    async fn generate(&self, request: &LetterRequest) -> Result<String, GenerateError>;
}

/// Posts requests to the remote generation service. No retries and no
/// request timeout: one best-effort attempt per call.
#[derive(Debug, Clone)]
pub struct ReqwestGenerator {
    endpoint: String,
    client: reqwest::Client,
}

impl ReqwestGenerator {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("coverletter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct LetterResponse {
    #[serde(default)]
    cover_letter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<Value>,
}

#[async_trait::async_trait]
impl Generator for ReqwestGenerator {
    async fn generate(&self, request: &LetterRequest) -> Result<String, GenerateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let code = status.as_u16();
            let message = error_detail(&body)
                .unwrap_or_else(|| format!("HTTP Error {code}: Failed to generate letter."));
            return Err(GenerateError::new(FailureKind::HttpStatus(code), message));
        }

        let parsed: LetterResponse = serde_json::from_slice(&body).map_err(|err| {
            GenerateError::new(FailureKind::Decode, format!("invalid response body: {err}"))
        })?;
        parsed.cover_letter.ok_or_else(|| {
            GenerateError::new(
                FailureKind::MissingLetter,
                "response did not include a cover letter",
            )
        })
    }
}

/// Pulls the `detail` field out of an error body, if there is a usable one.
fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::String(_) | Value::Null => None,
        // Validation errors arrive as structured JSON.
        other => Some(other.to_string()),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_decode() {
        return GenerateError::new(FailureKind::Decode, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
