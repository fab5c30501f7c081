//! Cover letter engine: generation transport, snapshot storage and effect
//! execution.
mod debounce;
mod engine;
mod generate;
mod persist;
mod store;
mod types;

pub use debounce::{PersistDebouncer, DEFAULT_DEBOUNCE_DELAY};
pub use engine::{ChannelEventSink, EngineConfig, EngineError, EngineHandle, EventSink};
pub use generate::{Generator, ReqwestGenerator};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use types::{EngineEvent, FailureKind, GenerateError, LetterRequest};
