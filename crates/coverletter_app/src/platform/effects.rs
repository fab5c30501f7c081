use std::sync::mpsc;
use std::thread;

use coverletter_core::{Effect, GenerationRequest, Msg};
use coverletter_engine::{EngineEvent, EngineHandle, EventSink, LetterRequest};
use letter_logging::{letter_info, letter_warn};

use super::clipboard::ClipboardWriter;
use super::persistence;
use super::ui::commands::Command;

/// Executes the effects returned by `update`. Results come back to the
/// dispatch loop as messages on `inbox`.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardWriter>,
    inbox: mpsc::Sender<Command>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn ClipboardWriter>,
        inbox: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            inbox,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistInputs { snapshot } => {
                    if let Some(text) = persistence::snapshot_text(&snapshot) {
                        self.engine.schedule_persist(text);
                    }
                }
                Effect::RequestGeneration { request } => {
                    letter_info!("Sending generation request");
                    self.engine.generate(to_letter_request(request));
                }
                Effect::CopyToClipboard { text } => {
                    let copied = self.clipboard.copy(&text);
                    self.send(Msg::CopyFinished { copied });
                }
                Effect::ScheduleCopyAckReset { seq, after } => {
                    let inbox = self.inbox.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = inbox.send(Command::Msg(Msg::CopyAckExpired { seq }));
                    });
                }
            }
        }
    }

    /// Stops the engine, writing any snapshot still waiting on its debounce.
    pub fn shutdown(self) {
        self.engine.shutdown();
    }

    fn send(&self, msg: Msg) {
        if self.inbox.send(Command::Msg(msg)).is_err() {
            letter_warn!("Dispatch loop is gone; message dropped");
        }
    }
}

/// Forwards engine events into the dispatch loop.
pub struct InboxSink {
    tx: mpsc::Sender<Command>,
}

impl InboxSink {
    pub fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Command::Msg(engine_event_to_msg(event)));
    }
}

fn to_letter_request(request: GenerationRequest) -> LetterRequest {
    LetterRequest {
        resume_url: request.resume_url,
        job_description_url: request.job_description_url,
        job_description_text: request.job_description_text,
        word_count: request.word_count,
    }
}

fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { result: Ok(cover_letter) } => {
            Msg::GenerationSucceeded { cover_letter }
        }
        EngineEvent::GenerationCompleted { result: Err(err) } => {
            letter_warn!("Generation failed ({}): {}", err.kind, err.message);
            Msg::GenerationFailed {
                message: err.message,
            }
        }
    }
}
