//! Game profile configuration snapshots.
//!
//! A [`GameProfile`] captures everything the pipeline needs to know about
//! one game: where position text comes from, how its log lines look, and
//! how its coordinates map onto axes. Profiles are immutable snapshots -
//! changing a setting means building a new profile and explicitly
//! restarting whatever consumes it. There are no live subscriptions.

mod file;

pub use file::{
    default_profile_path, load_profiles, save_profiles, ProfileFileError,
};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::coord::{CoordinateOrder, CoordinateSystem};
use crate::logline::DEFAULT_LOG_PATTERN;

/// Where position text is acquired from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    /// Watch the system clipboard for pasted coordinates.
    #[default]
    Clipboard,
    /// Tail the game's chat log file.
    File,
}

impl WatchMode {
    /// Lenient configuration-string parse; unknown values mean clipboard.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" | "log" | "logfile" => Self::File,
            _ => Self::Clipboard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::File => "file",
        }
    }
}

/// Immutable per-game configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile {
    pub name: String,
    pub watch_mode: WatchMode,
    pub coordinate_system: CoordinateSystem,
    /// Path of the chat log to tail; empty means nothing to watch yet.
    pub log_file_path: PathBuf,
    /// Per-game location pattern, applied case-insensitively. Falls back to
    /// the built-in numeric scan when it fails to compile or match.
    pub log_pattern: String,
    pub coordinate_order: CoordinateOrder,
}

impl Default for GameProfile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            watch_mode: WatchMode::default(),
            coordinate_system: CoordinateSystem::default(),
            log_file_path: PathBuf::new(),
            log_pattern: DEFAULT_LOG_PATTERN.to_string(),
            coordinate_order: CoordinateOrder::default(),
        }
    }
}

impl GameProfile {
    /// Create a named profile with default settings.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the watch mode.
    pub fn with_watch_mode(mut self, mode: WatchMode) -> Self {
        self.watch_mode = mode;
        self
    }

    /// Set the coordinate system handedness.
    pub fn with_coordinate_system(mut self, system: CoordinateSystem) -> Self {
        self.coordinate_system = system;
        self
    }

    /// Set the log file to tail (switches nothing by itself; restart the
    /// watcher with the new snapshot).
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_path = path.into();
        self
    }

    /// Set the location pattern.
    pub fn with_log_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.log_pattern = pattern.into();
        self
    }

    /// Set the coordinate order.
    pub fn with_coordinate_order(mut self, order: CoordinateOrder) -> Self {
        self.coordinate_order = order;
        self
    }
}
