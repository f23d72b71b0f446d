//! Source watching - turning clipboard and log-file changes into location
//! events.
//!
//! [`SourceWatcher`] is a small state machine: `Idle` until started, then
//! watching either the clipboard or a log file according to the profile
//! snapshot it was started with. Change notifications arrive on an injected
//! channel (see [`source`]); for every batch of new data that yields a
//! coordinate report the watcher emits one already-scrubbed token string on
//! its update channel, ready for [`crate::coord::parse_coordinates`].
//!
//! Restarting with a new profile is always stop-then-start; the watcher
//! never reacts to configuration changes by itself.

mod cursor;
mod source;

pub use cursor::LogCursor;
pub use source::{ClipboardReader, NullClipboard, WatchEvent};

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::coord::{self, CoordinateOrder};
use crate::logline;
use crate::profile::{GameProfile, WatchMode};
use crate::scrub;

/// Observable watcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    ClipboardWatching,
    FileWatching,
}

struct ActiveWatch {
    mode: WatchMode,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

/// Tails a clipboard or log file and emits observed coordinate strings.
pub struct SourceWatcher {
    clipboard: Arc<dyn ClipboardReader>,
    active: Option<ActiveWatch>,
}

impl SourceWatcher {
    /// Create a watcher with the given clipboard access. File-only hosts can
    /// pass [`NullClipboard`].
    pub fn new(clipboard: Arc<dyn ClipboardReader>) -> Self {
        Self {
            clipboard,
            active: None,
        }
    }

    /// Current state of the watcher.
    pub fn state(&self) -> WatchState {
        match &self.active {
            None => WatchState::Idle,
            Some(active) => match active.mode {
                WatchMode::Clipboard => WatchState::ClipboardWatching,
                WatchMode::File => WatchState::FileWatching,
            },
        }
    }

    /// Start watching per the profile snapshot.
    ///
    /// Any active watch is stopped first, so calling `start` twice is safe.
    /// `events` delivers the environment's change notifications; `updates`
    /// receives one token string per observed coordinate report. Must be
    /// called from within a Tokio runtime.
    pub fn start(
        &mut self,
        profile: GameProfile,
        events: mpsc::Receiver<WatchEvent>,
        updates: mpsc::Sender<String>,
    ) {
        self.stop();

        let mode = profile.watch_mode;
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        tracing::debug!(profile = %profile.name, mode = mode.as_str(), "starting watcher");

        let task = match mode {
            WatchMode::Clipboard => {
                let clipboard = Arc::clone(&self.clipboard);
                tokio::spawn(run_clipboard_watch(
                    profile,
                    clipboard,
                    events,
                    updates,
                    shutdown_rx,
                ))
            }
            WatchMode::File => tokio::spawn(run_file_watch(profile, events, updates, shutdown_rx)),
        };

        self.active = Some(ActiveWatch {
            mode,
            shutdown_tx,
            task,
        });
    }

    /// Stop watching and return to idle. Safe to call repeatedly; a
    /// notification already being processed completes harmlessly.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!("stopping watcher");
            let _ = active.shutdown_tx.try_send(());
            // Dropping the sender also closes the shutdown channel, which the
            // task treats the same as an explicit stop.
            drop(active.shutdown_tx);
            drop(active.task);
        }
    }
}

impl Drop for SourceWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_clipboard_watch(
    profile: GameProfile,
    clipboard: Arc<dyn ClipboardReader>,
    mut events: mpsc::Receiver<WatchEvent>,
    updates: mpsc::Sender<String>,
    mut shutdown: mpsc::Receiver<()>,
) {
    tracing::debug!(profile = %profile.name, "clipboard watch started");
    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            event = events.recv() => match event {
                Some(WatchEvent::ClipboardChanged) => {
                    if let Some(tokens) =
                        clipboard_tokens(clipboard.as_ref(), profile.coordinate_order)
                    {
                        tracing::debug!(%tokens, "clipboard location observed");
                        if updates.send(tokens).await.is_err() {
                            break;
                        }
                    }
                }
                // File events have no meaning while watching the clipboard.
                Some(_) => {}
                None => break,
            }
        }
    }
    tracing::debug!("clipboard watch stopped");
}

/// Validate and scrub the clipboard's current text.
fn clipboard_tokens(clipboard: &dyn ClipboardReader, order: CoordinateOrder) -> Option<String> {
    let text = clipboard.read_text()?;
    if text.is_empty() {
        return None;
    }
    if text.chars().count() > scrub::MAX_ENTRY_LENGTH {
        tracing::trace!(len = text.len(), "clipboard text too long, ignoring");
        return None;
    }

    // Only emit text that actually parses as a coordinate under the
    // profile's order; the payload is the scrubbed form.
    coord::parse_coordinates(&text, order)?;
    Some(scrub::scrub_entry(&text))
}

async fn run_file_watch(
    profile: GameProfile,
    mut events: mpsc::Receiver<WatchEvent>,
    updates: mpsc::Sender<String>,
    mut shutdown: mpsc::Receiver<()>,
) {
    let has_path = !profile.log_file_path.as_os_str().is_empty();
    if !has_path {
        // Still "watching": we stay subscribed and inert until the caller
        // restarts us with a usable path.
        tracing::warn!(profile = %profile.name, "log file path is empty, nothing to tail");
    }

    // One lock per watched file target; overlapping notifications must not
    // interleave reads or corrupt the cursor.
    let cursor = Mutex::new(LogCursor::at_end(&profile.log_file_path));
    tracing::debug!(
        profile = %profile.name,
        path = %profile.log_file_path.display(),
        "file watch started"
    );

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            event = events.recv() => match event {
                Some(WatchEvent::FileChanged) if has_path => {
                    if let Some(tokens) = poll_file(&cursor, &profile) {
                        tracing::debug!(%tokens, "log location observed");
                        if updates.send(tokens).await.is_err() {
                            break;
                        }
                    }
                }
                Some(WatchEvent::FileRemoved) => {
                    cursor.lock().reset();
                }
                Some(_) => {}
                None => break,
            }
        }
    }
    tracing::debug!("file watch stopped");
}

/// Read newly appended lines and keep the last one that parses.
///
/// IO failures are logged and skipped; the cursor stays where it was so the
/// next notification retries.
fn poll_file(cursor: &Mutex<LogCursor>, profile: &GameProfile) -> Option<String> {
    let mut cursor = cursor.lock();
    let lines = match cursor.poll_new_lines() {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!(
                path = %cursor.path().display(),
                error = %e,
                "failed to read log file, will retry on next change"
            );
            return None;
        }
    };

    let mut last_match = None;
    for line in &lines {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(tokens) = logline::try_parse_log_line(line, &profile.log_pattern) {
            last_match = Some(tokens);
        }
    }
    last_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Clipboard stub returning a fixed text.
    struct FixedClipboard(Option<String>);

    impl ClipboardReader for FixedClipboard {
        fn read_text(&self) -> Option<String> {
            self.0.clone()
        }
    }

    fn fixed(text: &str) -> Arc<dyn ClipboardReader> {
        Arc::new(FixedClipboard(Some(text.to_string())))
    }

    async fn recv_update(rx: &mut mpsc::Receiver<String>) -> Option<String> {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .ok()
            .flatten()
    }

    async fn expect_no_update(rx: &mut mpsc::Receiver<String>) {
        let result = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(result.is_err(), "expected no update, got {result:?}");
    }

    #[tokio::test]
    async fn test_clipboard_change_emits_scrubbed_tokens() {
        let mut watcher = SourceWatcher::new(fixed("Your location is 10, 20, 30"));
        let (event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = mpsc::channel(8);

        watcher.start(GameProfile::default(), event_rx, update_tx);
        assert_eq!(watcher.state(), WatchState::ClipboardWatching);

        event_tx.send(WatchEvent::ClipboardChanged).await.unwrap();
        assert_eq!(recv_update(&mut update_rx).await.as_deref(), Some("10 20 30"));
    }

    #[tokio::test]
    async fn test_clipboard_rejects_non_coordinates() {
        let mut watcher = SourceWatcher::new(fixed("meet me at the bridge"));
        let (event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = mpsc::channel(8);

        watcher.start(GameProfile::default(), event_rx, update_tx);
        event_tx.send(WatchEvent::ClipboardChanged).await.unwrap();
        expect_no_update(&mut update_rx).await;
    }

    #[tokio::test]
    async fn test_clipboard_rejects_overlong_text() {
        let long = "1 ".repeat(60);
        let mut watcher = SourceWatcher::new(fixed(&long));
        let (event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = mpsc::channel(8);

        watcher.start(GameProfile::default(), event_rx, update_tx);
        event_tx.send(WatchEvent::ClipboardChanged).await.unwrap();
        expect_no_update(&mut update_rx).await;
    }

    #[tokio::test]
    async fn test_locked_clipboard_is_a_quiet_cycle() {
        let mut watcher = SourceWatcher::new(Arc::new(NullClipboard));
        let (event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = mpsc::channel(8);

        watcher.start(GameProfile::default(), event_rx, update_tx);
        event_tx.send(WatchEvent::ClipboardChanged).await.unwrap();
        expect_no_update(&mut update_rx).await;
        assert_eq!(watcher.state(), WatchState::ClipboardWatching);
    }

    #[tokio::test]
    async fn test_stop_is_idempotent_and_returns_to_idle() {
        let mut watcher = SourceWatcher::new(Arc::new(NullClipboard));
        let (_event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, _update_rx) = mpsc::channel(8);

        watcher.start(GameProfile::default(), event_rx, update_tx);
        assert_eq!(watcher.state(), WatchState::ClipboardWatching);

        watcher.stop();
        assert_eq!(watcher.state(), WatchState::Idle);
        watcher.stop();
        assert_eq!(watcher.state(), WatchState::Idle);
    }

    #[tokio::test]
    async fn test_start_replaces_active_watch() {
        let mut watcher = SourceWatcher::new(Arc::new(NullClipboard));

        let (_tx1, rx1) = mpsc::channel(8);
        let (update_tx1, _update_rx1) = mpsc::channel(8);
        watcher.start(GameProfile::default(), rx1, update_tx1);
        assert_eq!(watcher.state(), WatchState::ClipboardWatching);

        let (_tx2, rx2) = mpsc::channel(8);
        let (update_tx2, _update_rx2) = mpsc::channel(8);
        let profile = GameProfile::default().with_watch_mode(WatchMode::File);
        watcher.start(profile, rx2, update_tx2);
        assert_eq!(watcher.state(), WatchState::FileWatching);
    }

    #[tokio::test]
    async fn test_file_watch_with_empty_path_stays_inert() {
        let mut watcher = SourceWatcher::new(Arc::new(NullClipboard));
        let (event_tx, event_rx) = mpsc::channel(8);
        let (update_tx, mut update_rx) = mpsc::channel(8);

        let profile = GameProfile::default().with_watch_mode(WatchMode::File);
        watcher.start(profile, event_rx, update_tx);
        assert_eq!(watcher.state(), WatchState::FileWatching);

        event_tx.send(WatchEvent::FileChanged).await.unwrap();
        expect_no_update(&mut update_rx).await;
    }
}
