use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mvi::SubscribeMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// State channel settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Deliver the current snapshot to new subscribers immediately.
    #[serde(default)]
    pub replay_latest: bool,
}

impl ChannelConfig {
    pub fn subscribe_mode(&self) -> SubscribeMode {
        if self.replay_latest {
            SubscribeMode::ReplayLatest
        } else {
            SubscribeMode::NextPublish
        }
    }
}

/// Log output settings. Logging stays off unless a file is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Base path of the log file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
