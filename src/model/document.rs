//! Document model - the ordered row buffer and file state

use std::io;
use std::path::PathBuf;

use super::row::Row;

/// Document state - the row buffer and associated file metadata.
///
/// All mutation goes through the methods here, so the dirty flag and each
/// row's render cache are maintained at one boundary. Out-of-range positions
/// are clamped or ignored, never undefined behavior.
#[derive(Debug, Clone)]
pub struct Document {
    /// Ordered rows, 0-indexed, on-disk order
    rows: Vec<Row>,
    /// Path to the file on disk (None for new/unsaved buffers)
    file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    dirty: bool,
    /// Tab stop width used for every render recomputation
    tab_stop: usize,
}

impl Document {
    /// Create a new empty document
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            file_path: None,
            dirty: false,
            tab_stop,
        }
    }

    /// Create a document with initial text, split into rows
    pub fn with_text(text: &str, tab_stop: usize) -> Self {
        let mut doc = Self::new(tab_stop);
        doc.rows = split_lines(text.as_bytes())
            .into_iter()
            .map(|line| Row::new(line, tab_stop))
            .collect();
        doc
    }

    /// Load a document from a file path.
    ///
    /// A nonexistent path yields an empty buffer that will save to that path.
    pub fn from_file(path: PathBuf, tab_stop: usize) -> io::Result<Self> {
        let mut doc = if path.exists() {
            let content = std::fs::read(&path)?;
            let mut doc = Self::new(tab_stop);
            doc.rows = split_lines(&content)
                .into_iter()
                .map(|line| Row::new(line, tab_stop))
                .collect();
            doc
        } else {
            Self::new(tab_stop)
        };
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Path this document saves to, if any
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Whether the buffer has unsaved changes
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of rows in the document
    #[inline]
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index
    #[inline]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// Length in bytes of the row at `at` (0 for the virtual row past the end)
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map(Row::size).unwrap_or(0)
    }

    /// Map a raw column on row `cy` to its render column
    pub fn cx_to_rx(&self, cy: usize, cx: usize) -> usize {
        self.rows
            .get(cy)
            .map(|row| row.cx_to_rx(cx, self.tab_stop))
            .unwrap_or(0)
    }

    /// Insert a new row holding `bytes` at position `at`, shifting subsequent
    /// rows down; `at` past the end is a no-op
    pub fn insert_row(&mut self, at: usize, bytes: impl Into<Vec<u8>>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(bytes, self.tab_stop));
        self.dirty = true;
    }

    /// Remove the row at `at`, shifting subsequent rows up; out-of-range is a
    /// no-op
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty = true;
    }

    /// Insert a byte into row `at_row` at column `at` (clamped to row length)
    pub fn insert_char(&mut self, at_row: usize, at: usize, ch: u8) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at_row) {
            row.insert(at, ch, tab_stop);
            self.dirty = true;
        }
    }

    /// Remove the byte at column `at` of row `at_row`; out-of-range is a
    /// no-op
    pub fn delete_char(&mut self, at_row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at_row) {
            if at < row.size() {
                row.delete(at, tab_stop);
                self.dirty = true;
            }
        }
    }

    /// Concatenate bytes onto the end of row `at_row`
    pub fn append_bytes(&mut self, at_row: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at_row) {
            row.append(bytes, tab_stop);
            self.dirty = true;
        }
    }

    /// Split row `at_row` at column `at`: the tail becomes a new row inserted
    /// below, the original is truncated. Used for newline insertion.
    pub fn split_row(&mut self, at_row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at_row) {
            let tail = row.split_off(at, tab_stop);
            self.rows.insert(at_row + 1, tail);
            self.dirty = true;
        }
    }

    /// Append row `at_row`'s content onto the previous row and delete it.
    ///
    /// Used for backspace at column 0. Returns the join column on the
    /// previous row (its length before the join), or None when `at_row` is 0
    /// or out of range.
    pub fn join_with_previous(&mut self, at_row: usize) -> Option<usize> {
        if at_row == 0 || at_row >= self.rows.len() {
            return None;
        }
        let moved = self.rows.remove(at_row);
        let tab_stop = self.tab_stop;
        let prev = &mut self.rows[at_row - 1];
        let join_at = prev.size();
        prev.append(moved.raw(), tab_stop);
        self.dirty = true;
        Some(join_at)
    }

    /// Serialize all rows in order, each followed by a single `\n`
    pub fn rows_to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.size() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    /// Persist the document to its file path.
    ///
    /// Returns the number of bytes written; clears the dirty flag only on
    /// success.
    pub fn save(&mut self) -> io::Result<usize> {
        let path = self
            .file_path
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no file name set"))?;
        let bytes = self.rows_to_bytes();
        std::fs::write(&path, &bytes)?;
        self.dirty = false;
        tracing::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(bytes.len())
    }
}

/// Split file content into lines, stripping the trailing `\n` / `\r` from
/// each. A final newline terminates the last row rather than opening a new
/// empty one.
fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
