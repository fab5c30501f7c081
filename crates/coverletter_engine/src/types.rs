use std::fmt;

use serde::Serialize;

/// Wire body of a generation request. Absent optional fields serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterRequest {
    pub resume_url: String,
    pub job_description_url: Option<String>,
    pub job_description_text: Option<String>,
    pub word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Exactly one per accepted generation request.
    GenerationCompleted { result: Result<String, GenerateError> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GenerateError {
    pub kind: FailureKind,
    /// Human readable detail; upstream `detail` text for HTTP failures.
    pub message: String,
}

impl GenerateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    /// Body was not the JSON shape the service promises.
    Decode,
    MissingLetter,
    /// The request task died before producing a result.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::MissingLetter => write!(f, "missing cover letter"),
            FailureKind::Aborted => write!(f, "aborted"),
        }
    }
}
