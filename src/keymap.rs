//! Keymap - translates decoded key tokens into messages
//!
//! The mapping depends on the controller mode: while a quit confirmation is
//! pending, every key answers the prompt instead of editing.

use crate::input::{ctrl, Key};
use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};
use crate::model::Mode;

/// Map a key token to a message, or None for a no-op
pub fn key_to_msg(mode: Mode, key: Key) -> Option<Msg> {
    match mode {
        Mode::ConfirmQuit => Some(match key {
            Key::Char(b'y') | Key::Char(b'Y') => Msg::App(AppMsg::QuitConfirmed),
            _ => Msg::App(AppMsg::QuitCancelled),
        }),
        Mode::Normal => normal_key(key),
    }
}

fn normal_key(key: Key) -> Option<Msg> {
    match key {
        Key::ArrowUp => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Up))),
        Key::ArrowDown => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Down))),
        Key::ArrowLeft => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Left))),
        Key::ArrowRight => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Right))),
        Key::PageUp => Some(Msg::Editor(EditorMsg::PageUp)),
        Key::PageDown => Some(Msg::Editor(EditorMsg::PageDown)),
        Key::Backspace => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        Key::Delete => Some(Msg::Document(DocumentMsg::DeleteForward)),
        // Bare escape doubles as a quit trigger
        Key::Escape => Some(Msg::App(AppMsg::Quit)),
        Key::Char(b'\r') => Some(Msg::Document(DocumentMsg::InsertNewline)),
        Key::Char(c) if c == ctrl(b'q') => Some(Msg::App(AppMsg::Quit)),
        Key::Char(c) if c == ctrl(b's') => Some(Msg::Document(DocumentMsg::Save)),
        // Printable bytes and tabs insert; remaining control bytes are no-ops
        Key::Char(b'\t') => Some(Msg::Document(DocumentMsg::InsertChar(b'\t'))),
        Key::Char(c) if (0x20..0x7f).contains(&c) => {
            Some(Msg::Document(DocumentMsg::InsertChar(c)))
        }
        Key::Char(_) => None,
        Key::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            key_to_msg(Mode::Normal, Key::ArrowLeft),
            Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Left)))
        );
    }

    #[test]
    fn test_printable_inserts() {
        assert_eq!(
            key_to_msg(Mode::Normal, Key::Char(b'a')),
            Some(Msg::Document(DocumentMsg::InsertChar(b'a')))
        );
        assert_eq!(
            key_to_msg(Mode::Normal, Key::Char(b'\t')),
            Some(Msg::Document(DocumentMsg::InsertChar(b'\t')))
        );
    }

    #[test]
    fn test_unbound_control_byte_is_noop() {
        assert_eq!(key_to_msg(Mode::Normal, Key::Char(ctrl(b'g'))), None);
        assert_eq!(key_to_msg(Mode::Normal, Key::Unrecognized), None);
    }

    #[test]
    fn test_quit_and_save_bindings() {
        assert_eq!(
            key_to_msg(Mode::Normal, Key::Char(ctrl(b'q'))),
            Some(Msg::App(AppMsg::Quit))
        );
        assert_eq!(
            key_to_msg(Mode::Normal, Key::Escape),
            Some(Msg::App(AppMsg::Quit))
        );
        assert_eq!(
            key_to_msg(Mode::Normal, Key::Char(ctrl(b's'))),
            Some(Msg::Document(DocumentMsg::Save))
        );
    }

    #[test]
    fn test_confirm_quit_mode_answers_prompt() {
        assert_eq!(
            key_to_msg(Mode::ConfirmQuit, Key::Char(b'y')),
            Some(Msg::App(AppMsg::QuitConfirmed))
        );
        assert_eq!(
            key_to_msg(Mode::ConfirmQuit, Key::Char(b'Y')),
            Some(Msg::App(AppMsg::QuitConfirmed))
        );
        // n, escape, anything else cancels
        assert_eq!(
            key_to_msg(Mode::ConfirmQuit, Key::Char(b'n')),
            Some(Msg::App(AppMsg::QuitCancelled))
        );
        assert_eq!(
            key_to_msg(Mode::ConfirmQuit, Key::Escape),
            Some(Msg::App(AppMsg::QuitCancelled))
        );
    }
}
