//! MMONav - live navigation guidance from in-game position text.
//!
//! This library turns free-form positional text (pasted coordinates or lines
//! appended to a game's chat log) into a bearing, distance and compass label
//! toward a target location. The pipeline:
//!
//! ```text
//! SourceWatcher ──► raw text ──► scrub ──► coord ──► nav (+ estimator) ──► NavigationUpdate
//! ```
//!
//! Acquisition (clipboard listener, filesystem notifications) is injected by
//! the caller; the library itself has no OS-notification dependency and is
//! fully testable with channels and mock readers.

pub mod coord;
pub mod logging;
pub mod logline;
pub mod nav;
pub mod navigator;
pub mod profile;
pub mod scrub;
pub mod watcher;
