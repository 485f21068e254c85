//! Editor update functions for cursor movement and paging

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, viewport paging)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            model.editor.move_cursor(direction, &model.document);
            Some(Cmd::Redraw)
        }

        EditorMsg::PageUp => {
            model.editor.cursor.cy = model.editor.viewport.rowoff;
            page_move(model, Direction::Up);
            Some(Cmd::Redraw)
        }

        EditorMsg::PageDown => {
            let vp = &model.editor.viewport;
            let bottom = vp.rowoff + vp.screenrows.saturating_sub(1);
            model.editor.cursor.cy = bottom.min(model.document.line_count());
            page_move(model, Direction::Down);
            Some(Cmd::Redraw)
        }
    }
}

/// Repeat a single-step move one screenful of times, so paging reuses the
/// per-step clamping rules
fn page_move(model: &mut AppModel, direction: Direction) {
    for _ in 0..model.editor.viewport.screenrows {
        model.editor.move_cursor(direction, &model.document);
    }
}
