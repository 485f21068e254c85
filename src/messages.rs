//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor messages (cursor movement, viewport paging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor one step in a direction
    MoveCursor(Direction),
    /// Page up: jump to the viewport top, then move up one screen
    PageUp,
    /// Page down: jump to the viewport bottom, then move down one screen
    PageDown,
}

/// Document messages (text editing, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a byte at the cursor
    InsertChar(u8),
    /// Insert a newline at the cursor, splitting the row
    InsertNewline,
    /// Delete the byte before the cursor (Backspace)
    DeleteBackward,
    /// Delete the byte under the cursor (Delete)
    DeleteForward,
    /// Persist the document to disk
    Save,
}

/// Application messages (quit flow)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Request to quit; a dirty buffer asks for confirmation first
    Quit,
    /// Confirm a pending quit
    QuitConfirmed,
    /// Cancel a pending quit
    QuitCancelled,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    App(AppMsg),
}
