use std::time::Duration;

use crate::view_model::AppViewModel;
use crate::{Endpoint, FormInputs, SubmitError};

/// How long the "Copied!" acknowledgment stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Lifecycle of the current generation attempt. Exactly one phase holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationResult {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAck {
    Copied,
    CopyFailed,
}

impl CopyAck {
    pub fn label(self) -> &'static str {
        match self {
            CopyAck::Copied => "Copied!",
            CopyAck::CopyFailed => "Copy Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    inputs: FormInputs,
    endpoint: Endpoint,
    result: GenerationResult,
    copy_ack: Option<CopyAck>,
    copy_seq: u64,
    dirty: bool,
}

impl AppState {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.result == GenerationResult::Loading
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        let (cover_letter, error) = match &self.result {
            GenerationResult::Success(text) => (Some(text.clone()), None),
            GenerationResult::Failure(message) => (None, Some(message.clone())),
            GenerationResult::Idle | GenerationResult::Loading => (None, None),
        };
        let can_generate = !loading
            && self.inputs.has_resume()
            && self.inputs.has_job_description()
            && self.endpoint.is_configured();

        AppViewModel {
            inputs: self.inputs.clone(),
            loading,
            can_generate,
            generate_label: if loading {
                "Generating Letter..."
            } else {
                "Generate Cover Letter"
            },
            show_placeholder: self.result == GenerationResult::Idle,
            cover_letter,
            error,
            copy_ack: self.copy_ack.map(CopyAck::label),
        }
    }

    /// Returns whether anything visible changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn replace_inputs(&mut self, inputs: FormInputs) {
        self.inputs = inputs;
        self.mark_dirty();
    }

    pub(crate) fn inputs_mut(&mut self) -> &mut FormInputs {
        self.mark_dirty();
        &mut self.inputs
    }

    pub(crate) fn fail(&mut self, error: SubmitError) {
        self.result = GenerationResult::Failure(error.to_string());
        self.mark_dirty();
    }

    pub(crate) fn start_loading(&mut self) {
        self.result = GenerationResult::Loading;
        self.copy_ack = None;
        self.mark_dirty();
    }

    pub(crate) fn succeed(&mut self, cover_letter: String) {
        self.result = GenerationResult::Success(cover_letter);
        self.mark_dirty();
    }

    pub(crate) fn cover_letter(&self) -> Option<&str> {
        match &self.result {
            GenerationResult::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Records a copy outcome and returns the sequence number of the new
    /// acknowledgment.
    pub(crate) fn acknowledge_copy(&mut self, ack: CopyAck) -> u64 {
        self.copy_seq += 1;
        self.copy_ack = Some(ack);
        self.mark_dirty();
        self.copy_seq
    }

    pub(crate) fn expire_copy_ack(&mut self, seq: u64) {
        if seq == self.copy_seq && self.copy_ack == Some(CopyAck::Copied) {
            self.copy_ack = None;
            self.mark_dirty();
        }
    }
}
