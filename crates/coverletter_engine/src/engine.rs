use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use letter_logging::{letter_info, letter_warn};

use crate::debounce::{PersistDebouncer, DEFAULT_DEBOUNCE_DELAY};
use crate::generate::{Generator, ReqwestGenerator};
use crate::{EngineEvent, FailureKind, GenerateError, LetterRequest, SnapshotStore};

enum EngineCommand {
    Generate { request: LetterRequest },
    SchedulePersist { snapshot: String },
    Shutdown,
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Clone)]
pub struct EngineConfig {
    pub endpoint: String,
    pub store: Arc<dyn SnapshotStore>,
    pub snapshot_key: String,
    pub debounce_delay: Duration,
}

impl EngineConfig {
    pub fn new(
        endpoint: impl Into<String>,
        store: Arc<dyn SnapshotStore>,
        snapshot_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            store,
            snapshot_key: snapshot_key.into(),
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine: {0}")]
    Start(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] GenerateError),
}

/// Owns the background thread that runs generation requests and debounced
/// snapshot writes on a tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let generator = Arc::new(ReqwestGenerator::new(config.endpoint.clone())?);
        Self::with_generator(config, generator, sink)
    }

    pub fn with_generator(
        config: EngineConfig,
        generator: Arc<dyn Generator>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("coverletter-engine".to_string())
            .spawn(move || run_engine(runtime, config, generator, sink, cmd_rx))?;

        Ok(Self {
            cmd_tx,
            worker: Some(worker),
        })
    }

    pub fn generate(&self, request: LetterRequest) {
        self.send(EngineCommand::Generate { request });
    }

    pub fn schedule_persist(&self, snapshot: String) {
        self.send(EngineCommand::SchedulePersist { snapshot });
    }

    /// Flushes any pending snapshot write and stops the engine thread.
    /// Requests still in flight are dropped.
    pub fn shutdown(mut self) {
        self.send(EngineCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                letter_warn!("Engine thread panicked during shutdown");
            }
        }
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            letter_warn!("Engine thread is gone; command dropped");
        }
    }
}

fn run_engine(
    runtime: tokio::runtime::Runtime,
    config: EngineConfig,
    generator: Arc<dyn Generator>,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut debouncer = PersistDebouncer::new(
        runtime.handle().clone(),
        config.store.clone(),
        config.snapshot_key.clone(),
        config.debounce_delay,
    );

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Generate { request } => {
                let generator = generator.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    run_generation(generator, request, sink.as_ref()).await;
                });
            }
            EngineCommand::SchedulePersist { snapshot } => debouncer.schedule(snapshot),
            EngineCommand::Shutdown => break,
        }
    }

    debouncer.flush();
    runtime.shutdown_timeout(Duration::from_millis(250));
    letter_info!("Engine stopped");
}

async fn run_generation(generator: Arc<dyn Generator>, request: LetterRequest, sink: &dyn EventSink) {
    // Run in its own task so a panic still settles the request.
    let task = tokio::spawn(async move { generator.generate(&request).await });
    let result = match task.await {
        Ok(result) => result,
        Err(err) => Err(GenerateError::new(
            FailureKind::Aborted,
            format!("generation task ended unexpectedly: {err}"),
        )),
    };
    sink.emit(EngineEvent::GenerationCompleted { result });
}
