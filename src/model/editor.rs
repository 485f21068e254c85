//! Editor state - cursor, viewport, and scroll containment

use super::document::Document;
use crate::messages::Direction;

/// Minimum gutter width when line numbers are enabled
pub const MIN_GUTTER_WIDTH: usize = 6;

/// Cursor position in the document.
///
/// `cx` indexes the current row's raw bytes (0..=row length); `cy` indexes
/// rows, where `cy == line_count` is the virtual row past the end. `rx` is
/// the derived column into the row's render bytes and is recomputed from
/// `cx` on every scroll pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column into the row's raw bytes
    pub cx: usize,
    /// Row index
    pub cy: usize,
    /// Derived column into the row's render bytes
    pub rx: usize,
}

impl Cursor {
    /// Create a cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }
}

/// Viewport state - what window of the buffer is visible
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible row (buffer space)
    pub rowoff: usize,
    /// First visible render column
    pub coloff: usize,
    /// Rows available for content (terminal rows minus the two bars)
    pub screenrows: usize,
    /// Full terminal width in columns
    pub screencols: usize,
    /// Columns available for content after the gutter
    pub textcols: usize,
    /// Gutter width in columns (0 when line numbers are disabled)
    pub gutter_width: usize,
}

impl Viewport {
    /// Create a viewport with the given content dimensions
    pub fn new(screenrows: usize, screencols: usize) -> Self {
        Self {
            rowoff: 0,
            coloff: 0,
            screenrows,
            screencols,
            textcols: screencols,
            gutter_width: 0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

/// Editor state - cursor plus viewport, owned by the controller
#[derive(Debug, Clone)]
pub struct EditorState {
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Whether the line-number gutter is drawn
    pub number_line: bool,
}

impl EditorState {
    /// Create a new editor state
    pub fn new(number_line: bool) -> Self {
        Self {
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            number_line,
        }
    }

    /// Apply fresh terminal dimensions and recompute the gutter layout.
    ///
    /// Called every frame; the terminal may have been resized since the
    /// last one. Two rows are reserved for the status and message bars.
    pub fn update_layout(&mut self, rows: usize, cols: usize, line_count: usize) {
        self.viewport.screenrows = rows.saturating_sub(2);
        self.viewport.screencols = cols;
        self.viewport.gutter_width = if self.number_line {
            gutter_width(line_count)
        } else {
            0
        };
        self.viewport.textcols = cols.saturating_sub(self.viewport.gutter_width);
    }

    /// Recompute `rx` and clamp the scroll offsets so the cursor stays
    /// inside the visible window.
    ///
    /// Each clamp is the minimal adjustment, never a recentering, so the
    /// viewport tracks the cursor one step at a time.
    pub fn scroll(&mut self, document: &Document) {
        self.cursor.rx = if self.cursor.cy < document.line_count() {
            document.cx_to_rx(self.cursor.cy, self.cursor.cx)
        } else {
            0
        };

        let vp = &mut self.viewport;
        if self.cursor.cy < vp.rowoff {
            vp.rowoff = self.cursor.cy;
        }
        if self.cursor.cy >= vp.rowoff + vp.screenrows {
            vp.rowoff = self.cursor.cy - vp.screenrows + 1;
        }
        if self.cursor.rx < vp.coloff {
            vp.coloff = self.cursor.rx;
        }
        if self.cursor.rx >= vp.coloff + vp.textcols {
            vp.coloff = self.cursor.rx - vp.textcols + 1;
        }
    }

    /// Move the cursor one step, then clamp `cx` to the destination row.
    ///
    /// Right motion stops at the row end; down motion may land on the
    /// virtual row past the last one.
    pub fn move_cursor(&mut self, direction: Direction, document: &Document) {
        let row_len = document.row_len(self.cursor.cy);
        match direction {
            Direction::Left => {
                if self.cursor.cx != 0 {
                    self.cursor.cx -= 1;
                }
            }
            Direction::Right => {
                if self.cursor.cy < document.line_count() && self.cursor.cx < row_len {
                    self.cursor.cx += 1;
                }
            }
            Direction::Up => {
                if self.cursor.cy != 0 {
                    self.cursor.cy -= 1;
                }
            }
            Direction::Down => {
                if self.cursor.cy < document.line_count() {
                    self.cursor.cy += 1;
                }
            }
        }
        self.clamp_cx(document);
    }

    /// Clamp `cx` to the (possibly shorter) current row's length
    pub fn clamp_cx(&mut self, document: &Document) {
        let row_len = document.row_len(self.cursor.cy);
        if self.cursor.cx > row_len {
            self.cursor.cx = row_len;
        }
    }
}

/// Gutter width for a document of `line_count` rows: room for the largest
/// line number plus the separator, floored at [`MIN_GUTTER_WIDTH`]
pub fn gutter_width(line_count: usize) -> usize {
    (decimal_digits(line_count + 1) + 2).max(MIN_GUTTER_WIDTH)
}

/// Number of decimal digits in `n` (1 for 0)
fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::DEFAULT_TAB_STOP;

    fn doc(text: &str) -> Document {
        Document::with_text(text, DEFAULT_TAB_STOP)
    }

    fn editor(rows: usize, cols: usize) -> EditorState {
        let mut ed = EditorState::new(false);
        ed.viewport = Viewport::new(rows, cols);
        ed
    }

    // ========================================================================
    // Scroll containment tests
    // ========================================================================

    fn assert_contained(ed: &EditorState) {
        let vp = &ed.viewport;
        assert!(vp.rowoff <= ed.cursor.cy);
        assert!(ed.cursor.cy < vp.rowoff + vp.screenrows);
        assert!(vp.coloff <= ed.cursor.rx);
        assert!(ed.cursor.rx < vp.coloff + vp.textcols);
    }

    #[test]
    fn test_scroll_down_past_window() {
        let text = (0..40).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n");
        let d = doc(&text);
        let mut ed = editor(10, 80);
        ed.cursor.cy = 25;
        ed.scroll(&d);
        assert_eq!(ed.viewport.rowoff, 16);
        assert_contained(&ed);
    }

    #[test]
    fn test_scroll_up_above_window() {
        let d = doc(&"x\n".repeat(40));
        let mut ed = editor(10, 80);
        ed.viewport.rowoff = 20;
        ed.cursor.cy = 5;
        ed.scroll(&d);
        assert_eq!(ed.viewport.rowoff, 5);
        assert_contained(&ed);
    }

    #[test]
    fn test_scroll_horizontal_right_edge() {
        let d = doc(&"a".repeat(200));
        let mut ed = editor(10, 80);
        ed.cursor.cx = 150;
        ed.scroll(&d);
        assert_eq!(ed.viewport.coloff, 150 - 80 + 1);
        assert_contained(&ed);
    }

    #[test]
    fn test_scroll_is_minimal_not_recentering() {
        let d = doc(&"x\n".repeat(40));
        let mut ed = editor(10, 80);
        ed.cursor.cy = 10;
        ed.scroll(&d);
        // One row past the bottom edge moves the window by exactly one
        assert_eq!(ed.viewport.rowoff, 1);
    }

    #[test]
    fn test_rx_zero_on_virtual_row() {
        let d = doc("abc");
        let mut ed = editor(10, 80);
        ed.cursor.cy = 1;
        ed.cursor.cx = 0;
        ed.scroll(&d);
        assert_eq!(ed.cursor.rx, 0);
    }

    #[test]
    fn test_rx_follows_tab_expansion() {
        let d = Document::with_text("a\tb", 4);
        let mut ed = editor(10, 80);
        ed.cursor.cx = 2;
        ed.scroll(&d);
        assert_eq!(ed.cursor.rx, 4);
    }

    // ========================================================================
    // Cursor movement tests
    // ========================================================================

    #[test]
    fn test_move_right_stops_at_row_end() {
        let d = doc("ab");
        let mut ed = editor(10, 80);
        for _ in 0..5 {
            ed.move_cursor(Direction::Right, &d);
        }
        assert_eq!(ed.cursor.cx, 2);
    }

    #[test]
    fn test_move_down_reaches_virtual_row() {
        let d = doc("a\nb");
        let mut ed = editor(10, 80);
        for _ in 0..5 {
            ed.move_cursor(Direction::Down, &d);
        }
        assert_eq!(ed.cursor.cy, 2);
        assert_eq!(d.line_count(), 2);
    }

    #[test]
    fn test_move_clamps_cx_to_shorter_row() {
        let d = doc("longline\nab");
        let mut ed = editor(10, 80);
        ed.cursor.cx = 8;
        ed.move_cursor(Direction::Down, &d);
        assert_eq!(ed.cursor.cy, 1);
        assert_eq!(ed.cursor.cx, 2);
    }

    #[test]
    fn test_move_up_from_origin_is_noop() {
        let d = doc("a");
        let mut ed = editor(10, 80);
        ed.move_cursor(Direction::Up, &d);
        assert_eq!(ed.cursor.cy, 0);
    }

    // ========================================================================
    // Gutter sizing tests
    // ========================================================================

    #[test]
    fn test_gutter_width_minimum() {
        // 11 rows: digits(12) + 2 = 4, floored to the minimum of 6
        assert_eq!(gutter_width(11), 6);
        assert_eq!(gutter_width(0), 6);
    }

    #[test]
    fn test_gutter_width_grows_with_line_count() {
        assert_eq!(gutter_width(9_999), 7);
        assert_eq!(gutter_width(1_000_000), 9);
    }

    #[test]
    fn test_update_layout_reserves_bar_rows_and_gutter() {
        let mut ed = EditorState::new(true);
        ed.update_layout(24, 80, 11);
        assert_eq!(ed.viewport.screenrows, 22);
        assert_eq!(ed.viewport.gutter_width, 6);
        assert_eq!(ed.viewport.textcols, 74);
    }

    #[test]
    fn test_update_layout_without_gutter() {
        let mut ed = EditorState::new(false);
        ed.update_layout(24, 80, 11);
        assert_eq!(ed.viewport.gutter_width, 0);
        assert_eq!(ed.viewport.textcols, 80);
    }
}
