//! Byte-offset cursor for tailing a growing log file.
//!
//! The cursor remembers how far into the file we have read. Appends are read
//! incrementally from that offset; a file that shrank below the offset was
//! truncated or rotated, so the cursor resets to the start. The cursor never
//! points past the file length observed at read time.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Tail position within one watched log file.
#[derive(Debug)]
pub struct LogCursor {
    path: PathBuf,
    offset: u64,
}

impl LogCursor {
    /// Cursor at the start of `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
        }
    }

    /// Cursor at the current end of `path` - history is skipped, only new
    /// appends matter. A missing file starts at 0.
    pub fn at_end(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let offset = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        tracing::debug!(path = %path.display(), offset, "log cursor initialized");
        Self { path, offset }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reset to the start of the file (deletion, rotation).
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Read the region appended since the last poll and split it into lines.
    ///
    /// A file shorter than the current offset is treated as truncated and the
    /// cursor resets to 0 before reading. On success the cursor advances past
    /// everything read, including a trailing segment not yet terminated by a
    /// newline (game clients write whole lines, so in practice the tail is
    /// complete). On error the cursor is left where it was so the next
    /// notification retries the same region.
    pub fn poll_new_lines(&mut self) -> io::Result<Vec<String>> {
        let mut file = File::open(&self.path)?;
        let len = file.metadata()?.len();

        if len < self.offset {
            tracing::debug!(
                path = %self.path.display(),
                len,
                offset = self.offset,
                "file shrank below cursor, assuming truncation"
            );
            self.offset = 0;
        }
        if len == self.offset {
            return Ok(Vec::new());
        }

        file.seek(SeekFrom::Start(self.offset))?;
        let mut bytes = Vec::with_capacity((len - self.offset) as usize);
        // Cap the read at the length observed above; the file may keep
        // growing underneath us and the overflow belongs to the next poll.
        let read = file
            .take(len - self.offset)
            .read_to_end(&mut bytes)? as u64;
        self.offset += read;

        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_owned).collect())
    }
}
