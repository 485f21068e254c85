//! Quill - a minimal terminal text editor
//!
//! This crate provides the core types and logic for a single-file terminal
//! editor implementing the Elm Architecture pattern: decoded key tokens map
//! to messages, update functions transform one model, and the view renders
//! the model as a single frame write.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod terminal;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
