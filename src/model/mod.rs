//! Application model - the single state object owned by the editor loop

pub mod document;
pub mod editor;
pub mod row;
pub mod status_bar;

use std::path::PathBuf;
use std::time::Duration;

pub use document::Document;
pub use editor::{gutter_width, Cursor, EditorState, Viewport, MIN_GUTTER_WIDTH};
pub use row::{Row, DEFAULT_TAB_STOP};
pub use status_bar::{StatusMessage, MESSAGE_TIMEOUT};

use crate::config::EditorConfig;

/// Controller mode: quitting a dirty buffer requires confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    ConfirmQuit,
}

/// The complete editor state.
///
/// Owned by the main loop and passed by reference into the update and view
/// layers; nothing here is reachable through globals.
#[derive(Debug, Clone)]
pub struct AppModel {
    pub document: Document,
    pub editor: EditorState,
    pub status: Option<StatusMessage>,
    pub mode: Mode,
}

impl AppModel {
    /// Create the model from configuration and an optional file to open
    pub fn new(config: &EditorConfig, path: Option<PathBuf>) -> std::io::Result<Self> {
        let document = match path {
            Some(path) => Document::from_file(path, config.tabstop)?,
            None => Document::new(config.tabstop),
        };
        Ok(Self {
            document,
            editor: EditorState::new(config.numberline),
            status: None,
            mode: Mode::Normal,
        })
    }

    /// Show a message with the default timeout
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::transient(text));
    }

    /// Show a message with an explicit duration (zero = sticky)
    pub fn set_status_for(&mut self, text: impl Into<String>, duration: Duration) {
        self.status = Some(StatusMessage::new(text, duration));
    }

    /// Drop the current message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The message currently eligible for display, if any
    pub fn visible_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|msg| !msg.is_expired())
    }
}
