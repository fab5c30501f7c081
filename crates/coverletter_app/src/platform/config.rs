//! Application configuration.
//!
//! The generation endpoint is baked in at build time through the
//! `COVERLETTER_API_URL` environment variable. `COVERLETTER_LOG` picks the
//! log destination at runtime (`file`, `terminal` or `both`).

use std::path::PathBuf;
use std::time::Duration;

use coverletter_core::{Endpoint, ENDPOINT_PLACEHOLDER};
use coverletter_engine::DEFAULT_DEBOUNCE_DELAY;
use log::LevelFilter;

use super::logging::LogDestination;

const BUILD_ENDPOINT: &str = match option_env!("COVERLETTER_API_URL") {
    Some(url) => url,
    None => ENDPOINT_PLACEHOLDER,
};

const STATE_DIR_NAME: &str = ".coverletter";
const LOG_DESTINATION_VAR: &str = "COVERLETTER_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    /// Directory holding the persisted form snapshot.
    pub state_dir: PathBuf,
    pub debounce_delay: Duration,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Self::new(Endpoint::new(BUILD_ENDPOINT), cwd.join(STATE_DIR_NAME));
        config.log_destination =
            log_destination_from(std::env::var(LOG_DESTINATION_VAR).ok().as_deref());
        config
    }

    pub fn new(endpoint: Endpoint, state_dir: PathBuf) -> Self {
        Self {
            endpoint,
            state_dir,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            log_destination: LogDestination::File,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

/// Unset or unrecognized values keep the file logger.
fn log_destination_from(raw: Option<&str>) -> LogDestination {
    match raw.map(str::parse::<LogDestination>) {
        Some(Ok(destination)) => destination,
        Some(Err(err)) => {
            eprintln!("Warning: {err}; logging to file");
            LogDestination::File
        }
        None => LogDestination::File,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_behaviour() {
        let config = AppConfig::new(Endpoint::placeholder(), PathBuf::from("/tmp/state"));
        assert_eq!(config.debounce_delay, Duration::from_millis(1000));
        assert_eq!(config.log_destination, LogDestination::File);
        assert!(!config.endpoint.is_configured());
    }

    #[test]
    fn state_dir_lives_under_working_directory() {
        let config = AppConfig::from_build();
        assert!(config.state_dir.ends_with(STATE_DIR_NAME));
    }

    #[test]
    fn log_destination_comes_from_environment_value() {
        assert_eq!(log_destination_from(None), LogDestination::File);
        assert_eq!(log_destination_from(Some("both")), LogDestination::Both);
        assert_eq!(log_destination_from(Some("terminal")), LogDestination::Terminal);
        assert_eq!(log_destination_from(Some("nonsense")), LogDestination::File);
    }
}
