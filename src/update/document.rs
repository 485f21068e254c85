//! Document update functions for text editing and persistence

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing, save)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let cursor = model.editor.cursor;
            // Typing on the virtual row past the end opens a fresh row first
            if cursor.cy == model.document.line_count() {
                model.document.insert_row(cursor.cy, Vec::new());
            }
            model.document.insert_char(cursor.cy, cursor.cx, ch);
            model.editor.cursor.cx += 1;
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertNewline => {
            let cursor = model.editor.cursor;
            if cursor.cx == 0 {
                model.document.insert_row(cursor.cy, Vec::new());
            } else {
                model.document.split_row(cursor.cy, cursor.cx);
            }
            model.editor.cursor.cy += 1;
            model.editor.cursor.cx = 0;
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteBackward => {
            let cursor = model.editor.cursor;
            if cursor.cy == model.document.line_count() || (cursor.cx == 0 && cursor.cy == 0) {
                return None;
            }
            if cursor.cx > 0 {
                model.document.delete_char(cursor.cy, cursor.cx - 1);
                model.editor.cursor.cx -= 1;
            } else if let Some(join_at) = model.document.join_with_previous(cursor.cy) {
                model.editor.cursor.cx = join_at;
                model.editor.cursor.cy -= 1;
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteForward => {
            let cursor = model.editor.cursor;
            // The virtual row past the end holds nothing to delete
            if cursor.cy >= model.document.line_count() {
                return None;
            }
            if cursor.cx < model.document.row_len(cursor.cy) {
                model.document.delete_char(cursor.cy, cursor.cx);
            } else if cursor.cy + 1 < model.document.line_count() {
                model.document.join_with_previous(cursor.cy + 1);
            } else {
                return None;
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::Save => {
            match model.document.save() {
                Ok(bytes) => {
                    model.set_status(format!("{bytes} bytes written to disk"));
                }
                Err(err) => {
                    // Recoverable: report, keep the dirty flag, keep running
                    tracing::warn!("Save failed: {err}");
                    model.set_status(format!("Save failed: {err}"));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
