//! Acquisition interfaces injected into the source watcher.
//!
//! The watcher itself never talks to the OS. Whoever hosts it supplies a
//! stream of [`WatchEvent`] notifications (a clipboard listener, a
//! filesystem watcher, a polling loop - the watcher doesn't care) and, for
//! clipboard mode, something that can read the clipboard's current text.

/// A change notification from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// Clipboard content changed.
    ClipboardChanged,
    /// The watched file was created, written to, or renamed into place.
    FileChanged,
    /// The watched file was removed.
    FileRemoved,
}

/// Read access to the system clipboard.
///
/// Implementations return `None` for anything transient: an empty clipboard,
/// non-text content, or a clipboard briefly locked by another process. The
/// watcher treats `None` as "nothing to do this cycle", never as an error.
pub trait ClipboardReader: Send + Sync {
    fn read_text(&self) -> Option<String>;
}

/// A [`ClipboardReader`] that always comes up empty. Useful as the injected
/// reader when watching files, where the clipboard is never consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl ClipboardReader for NullClipboard {
    fn read_text(&self) -> Option<String> {
        None
    }
}
