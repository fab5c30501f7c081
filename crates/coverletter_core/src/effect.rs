use std::time::Duration;

use crate::{FormInputs, GenerationRequest};

/// IO requested by [`crate::update`]; the shell runs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Debounced write of the full form snapshot.
    PersistInputs { snapshot: FormInputs },
    /// Send one generation request to the remote service.
    RequestGeneration { request: GenerationRequest },
    CopyToClipboard { text: String },
    /// Deliver `Msg::CopyAckExpired { seq }` after `after`.
    ScheduleCopyAckReset { seq: u64, after: Duration },
}
