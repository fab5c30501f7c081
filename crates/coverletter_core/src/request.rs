use crate::FormInputs;

/// Endpoint value shipped when no real deployment URL was baked in.
pub const ENDPOINT_PLACEHOLDER: &str = "https://YOUR-CLOUD-RUN-URL/generate";
const PLACEHOLDER_MARKER: &str = "YOUR-CLOUD-RUN-URL";

/// Upstream error text emitted when the service started without its model
/// credentials.
pub const SERVER_MISCONFIGURATION_SIGNATURE: &str = "Gemini API Client is not initialized";

/// The generation endpoint together with whether it is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    raw: String,
    configured: bool,
}

impl Endpoint {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let configured = !raw.contains(PLACEHOLDER_MARKER)
            && url::Url::parse(raw.trim())
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
        Self { raw, configured }
    }

    pub fn placeholder() -> Self {
        Self::new(ENDPOINT_PLACEHOLDER)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Request body sent to the generation service. Blank optional fields are
/// `None` so "not provided" stays distinct from "provided but empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub resume_url: String,
    pub job_description_url: Option<String>,
    pub job_description_text: Option<String>,
    pub word_count: u32,
}

impl GenerationRequest {
    pub fn from_inputs(inputs: &FormInputs) -> Self {
        Self {
            resume_url: inputs.resume_url().trim().to_string(),
            job_description_url: non_blank(inputs.job_description_url()),
            job_description_text: non_blank(inputs.job_description_text()),
            word_count: inputs.word_count(),
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Why a generation attempt ended without a letter. `Display` is the text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please provide a Resume URL.")]
    MissingResume,
    #[error("Please provide either a Job Description URL or paste the job description text.")]
    MissingJobDescription,
    #[error(
        "Configuration Error: Please set COVERLETTER_API_URL to your actual deployed generation endpoint and rebuild."
    )]
    EndpointNotConfigured,
    #[error(
        "Server Error: The generation service failed due to a missing or invalid GEMINI_API_KEY environment variable. Please check your deployment settings."
    )]
    ServerMisconfiguration,
    #[error("Generation Failed: {0}")]
    Transport(String),
}

/// Checks submission preconditions in order and builds the request.
pub fn validate(inputs: &FormInputs, endpoint: &Endpoint) -> Result<GenerationRequest, SubmitError> {
    if !inputs.has_resume() {
        return Err(SubmitError::MissingResume);
    }
    if !inputs.has_job_description() {
        return Err(SubmitError::MissingJobDescription);
    }
    if !endpoint.is_configured() {
        return Err(SubmitError::EndpointNotConfigured);
    }
    Ok(GenerationRequest::from_inputs(inputs))
}

/// Maps an upstream failure message to the error shown to the user.
pub fn classify_failure(upstream: &str) -> SubmitError {
    if upstream.contains(SERVER_MISCONFIGURATION_SIGNATURE) {
        SubmitError::ServerMisconfiguration
    } else {
        SubmitError::Transport(upstream.to_string())
    }
}
