use letter_logging::{letter_debug, letter_info, letter_warn};

use crate::request::{classify_failure, validate};
use crate::{AppState, CopyAck, Effect, Msg, COPY_ACK_DURATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputsRestored(inputs) => {
            // Loading never schedules a write back.
            state.replace_inputs(inputs);
            Vec::new()
        }
        Msg::FieldEdited { field, value } => {
            state.inputs_mut().set_field(field, &value);
            vec![Effect::PersistInputs {
                snapshot: state.inputs().clone(),
            }]
        }
        Msg::GenerateClicked => {
            if state.is_loading() {
                letter_debug!("Generate ignored: a request is already in flight");
                return (state, Vec::new());
            }
            match validate(state.inputs(), state.endpoint()) {
                Ok(request) => {
                    letter_info!(
                        "Requesting cover letter word_count={} jd_url={} jd_text_len={}",
                        request.word_count,
                        request.job_description_url.is_some(),
                        request
                            .job_description_text
                            .as_deref()
                            .map_or(0, str::len)
                    );
                    state.start_loading();
                    vec![Effect::RequestGeneration { request }]
                }
                Err(err) => {
                    letter_info!("Generate rejected: {}", err);
                    state.fail(err);
                    Vec::new()
                }
            }
        }
        Msg::GenerationSucceeded { cover_letter } => {
            if state.is_loading() {
                state.succeed(cover_letter);
            } else {
                letter_warn!("Dropping generation result that arrived while not loading");
            }
            Vec::new()
        }
        Msg::GenerationFailed { message } => {
            if state.is_loading() {
                letter_warn!("Generation failed: {}", message);
                state.fail(classify_failure(&message));
            } else {
                letter_warn!("Dropping generation failure that arrived while not loading");
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.cover_letter() {
            Some(text) => vec![Effect::CopyToClipboard {
                text: text.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { copied: true } => {
            let seq = state.acknowledge_copy(CopyAck::Copied);
            vec![Effect::ScheduleCopyAckReset {
                seq,
                after: COPY_ACK_DURATION,
            }]
        }
        Msg::CopyFinished { copied: false } => {
            state.acknowledge_copy(CopyAck::CopyFailed);
            Vec::new()
        }
        Msg::CopyAckExpired { seq } => {
            state.expire_copy_ack(seq);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
