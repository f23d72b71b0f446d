//! Production acquisition adapters.
//!
//! The library core is notification-driven and has no OS dependency; these
//! adapters feed it from what a terminal can reach:
//! - a polling file notifier (metadata changes → `FileChanged`/`FileRemoved`)
//! - stdin paste as the clipboard stand-in (each non-blank line becomes the
//!   "clipboard" content and fires `ClipboardChanged`)

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use mmonav::watcher::{ClipboardReader, WatchEvent};

/// How often the file notifier checks for metadata changes.
pub const FILE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Clipboard stand-in fed by lines pasted on stdin.
#[derive(Debug, Default)]
pub struct StdinPaste {
    latest: Mutex<Option<String>>,
}

impl StdinPaste {
    fn set(&self, text: String) {
        *self.latest.lock() = Some(text);
    }
}

impl ClipboardReader for StdinPaste {
    fn read_text(&self) -> Option<String> {
        self.latest.lock().clone()
    }
}

/// Spawn a thread reading stdin lines into a [`StdinPaste`], firing a
/// `ClipboardChanged` notification per line. The thread ends on EOF or when
/// the notification channel closes.
pub fn spawn_stdin_paste(events: mpsc::Sender<WatchEvent>) -> Arc<StdinPaste> {
    let paste = Arc::new(StdinPaste::default());
    let feeder = Arc::clone(&paste);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            feeder.set(line);
            if events.blocking_send(WatchEvent::ClipboardChanged).is_err() {
                break;
            }
        }
        tracing::debug!("stdin paste feeder stopped");
    });

    paste
}

/// Spawn a polling notifier for `path`.
///
/// Sends `FileChanged` whenever length or modification time differ from the
/// last observation (including the first sighting of the file) and
/// `FileRemoved` when an existing file disappears. The task ends when the
/// notification channel closes.
pub fn spawn_file_poller(
    path: PathBuf,
    events: mpsc::Sender<WatchEvent>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        let mut last: Option<(u64, Option<SystemTime>)> = None;
        let mut existed = false;

        loop {
            ticker.tick().await;

            match tokio::fs::metadata(&path).await {
                Ok(meta) => {
                    existed = true;
                    let state = (meta.len(), meta.modified().ok());
                    if last.as_ref() != Some(&state) {
                        last = Some(state);
                        if events.send(WatchEvent::FileChanged).await.is_err() {
                            break;
                        }
                    }
                }
                Err(_) => {
                    if existed {
                        existed = false;
                        last = None;
                        if events.send(WatchEvent::FileRemoved).await.is_err() {
                            break;
                        }
                    }
                }
            }
        }
        tracing::debug!(path = %path.display(), "file poller stopped");
    })
}
