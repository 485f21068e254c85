//! Row model - one line of document text plus its tab-expanded render cache

/// Default tab stop width when no configuration overrides it
pub const DEFAULT_TAB_STOP: usize = 8;

/// One line of the document.
///
/// `raw` holds the bytes as they exist on disk; `render` is the derived form
/// where every tab is expanded to spaces up to the next tab-stop boundary.
/// Every mutation goes through a method on this type, so the render cache is
/// recomputed before the mutation returns and callers never observe it stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// Create a row from raw bytes, computing its render form
    pub fn new(raw: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let mut row = Self {
            raw: raw.into(),
            render: Vec::new(),
        };
        row.update_render(tab_stop);
        row
    }

    /// The raw bytes of this row
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The tab-expanded render bytes of this row
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length of the raw content in bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Length of the render content in bytes
    #[inline]
    pub fn rsize(&self) -> usize {
        self.render.len()
    }

    /// Insert a byte at column `at`, clamped to the row length
    pub fn insert(&mut self, at: usize, ch: u8, tab_stop: usize) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, ch);
        self.update_render(tab_stop);
    }

    /// Remove the byte at column `at`; out-of-range is a no-op
    pub fn delete(&mut self, at: usize, tab_stop: usize) {
        if at >= self.raw.len() {
            return;
        }
        self.raw.remove(at);
        self.update_render(tab_stop);
    }

    /// Concatenate bytes onto the end of this row
    pub fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.raw.extend_from_slice(bytes);
        self.update_render(tab_stop);
    }

    /// Split this row at column `at`: the tail `[at, size)` is returned as a
    /// new row and this row is truncated to `[0, at)`
    pub fn split_off(&mut self, at: usize, tab_stop: usize) -> Row {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update_render(tab_stop);
        Row::new(tail, tab_stop)
    }

    /// Map a raw column index to the corresponding render column.
    ///
    /// A tab before `cx` advances the render column to the next multiple of
    /// `tab_stop`; every other byte advances it by one.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for &byte in self.raw.iter().take(cx) {
            if byte == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    /// Recompute the render cache from the raw bytes.
    ///
    /// Runs in time proportional to this row's length; mutations never
    /// trigger a full-buffer rescan.
    fn update_render(&mut self, tab_stop: usize) {
        let tabs = self.raw.iter().filter(|&&b| b == b'\t').count();
        self.render = Vec::with_capacity(self.raw.len() + tabs * (tab_stop - 1));
        for &byte in &self.raw {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
    }
}
