//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::model::{AppModel, Document, EditorState, Mode, Viewport, DEFAULT_TAB_STOP};

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, cy: usize, cx: usize) -> AppModel {
    test_model_with_tabstop(text, cy, cx, DEFAULT_TAB_STOP)
}

/// Create a test model with an explicit tab stop
pub fn test_model_with_tabstop(text: &str, cy: usize, cx: usize, tab_stop: usize) -> AppModel {
    let mut editor = EditorState::new(false);
    editor.viewport = Viewport::new(24, 80);
    editor.cursor.cy = cy;
    editor.cursor.cx = cx;

    AppModel {
        document: Document::with_text(text, tab_stop),
        editor,
        status: None,
        mode: Mode::Normal,
    }
}

/// Helper to get buffer content as a string (rows joined by newlines)
pub fn buffer_to_string(model: &AppModel) -> String {
    String::from_utf8_lossy(&model.document.rows_to_bytes()).into_owned()
}
