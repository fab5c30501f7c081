//! Cover letter core: pure form state machine and view-model helpers.
mod effect;
mod form;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{
    clamp_word_count, coerce_word_count, FormField, FormInputs, UnknownField,
    DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT, SNAPSHOT_KEY,
};
pub use msg::Msg;
pub use request::{
    classify_failure, validate, Endpoint, GenerationRequest, SubmitError, ENDPOINT_PLACEHOLDER,
    SERVER_MISCONFIGURATION_SIGNATURE,
};
pub use state::{AppState, CopyAck, GenerationResult, COPY_ACK_DURATION};
pub use update::update;
pub use view_model::AppViewModel;
