//! Frame composition - renders the model into one terminal write per frame
//!
//! The whole frame (viewport rows, status bar, message bar, cursor
//! placement) is assembled into a single byte buffer and emitted with one
//! write. Input processing never interleaves with a partial frame, which is
//! what keeps the screen tear-free.

use std::io::{self, Write};

use crate::model::AppModel;

const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const CURSOR_HOME: &[u8] = b"\x1b[H";
const ERASE_LINE: &[u8] = b"\x1b[K";
const INVERT_ON: &[u8] = b"\x1b[7m";
const INVERT_OFF: &[u8] = b"\x1b[m";
/// DEC special-graphics vertical rule, then back to ASCII, then one space
const GUTTER_SEPARATOR: &[u8] = b"\x1b(0\x78\x1b(B ";

/// Longest filename prefix shown in the status bar
const STATUS_NAME_WIDTH: usize = 20;

/// Compose one complete frame for the current model state.
///
/// Pure with respect to the terminal: the result is just bytes, so tests
/// can assert on frames without a tty.
pub fn compose_frame(model: &AppModel) -> Vec<u8> {
    let vp = &model.editor.viewport;
    let mut buf = Vec::with_capacity((vp.screenrows + 2) * (vp.screencols + 8));

    buf.extend_from_slice(HIDE_CURSOR);
    buf.extend_from_slice(CURSOR_HOME);

    draw_rows(&mut buf, model);
    draw_status_bar(&mut buf, model);
    draw_message_bar(&mut buf, model);

    // Park the real cursor over its buffer position (terminal coordinates
    // are 1-based)
    let row = model.editor.cursor.cy.saturating_sub(vp.rowoff) + 1;
    let col = model.editor.cursor.rx.saturating_sub(vp.coloff) + vp.gutter_width + 1;
    buf.extend_from_slice(format!("\x1b[{row};{col}H").as_bytes());

    buf.extend_from_slice(SHOW_CURSOR);
    buf
}

/// Compose and emit a frame as a single write
pub fn render<W: Write>(out: &mut W, model: &AppModel) -> io::Result<()> {
    let frame = compose_frame(model);
    out.write_all(&frame)?;
    out.flush()
}

fn draw_rows(buf: &mut Vec<u8>, model: &AppModel) {
    let vp = &model.editor.viewport;
    for y in 0..vp.screenrows {
        let filerow = y + vp.rowoff;
        match model.document.row(filerow) {
            None => {
                // Continuation marker beyond the last document row
                buf.push(b'~');
            }
            Some(row) => {
                if model.editor.number_line {
                    draw_gutter(buf, vp.gutter_width, filerow + 1);
                }
                let render = row.render();
                let start = vp.coloff.min(render.len());
                let end = (vp.coloff + vp.textcols).min(render.len());
                buf.extend_from_slice(&render[start..end]);
            }
        }
        buf.extend_from_slice(ERASE_LINE);
        buf.extend_from_slice(b"\r\n");
    }
}

/// Right-aligned 1-based line number padded to the gutter, then the
/// separator rule
fn draw_gutter(buf: &mut Vec<u8>, gutter_width: usize, line_number: usize) {
    let number = line_number.to_string();
    let field = gutter_width.saturating_sub(2);
    for _ in number.len()..field {
        buf.push(b' ');
    }
    buf.extend_from_slice(number.as_bytes());
    buf.extend_from_slice(GUTTER_SEPARATOR);
}

fn draw_status_bar(buf: &mut Vec<u8>, model: &AppModel) {
    let vp = &model.editor.viewport;
    buf.extend_from_slice(INVERT_ON);

    let name: String = model.document.display_name().chars().take(STATUS_NAME_WIDTH).collect();
    let mut left = format!(" {} - {} lines", name, model.document.line_count());
    if model.document.is_dirty() {
        left.push_str(" (modified)");
    }
    let right = format!(
        "{}/{} ",
        model.editor.cursor.cy + 1,
        model.document.line_count()
    );

    let left: String = left.chars().take(vp.screencols).collect();
    buf.extend_from_slice(left.as_bytes());

    // Space-pad across the bar; drop the right segment in only when it fits
    // flush against the edge
    let mut len = left.len();
    while len < vp.screencols {
        if vp.screencols - len == right.len() {
            buf.extend_from_slice(right.as_bytes());
            break;
        }
        buf.push(b' ');
        len += 1;
    }

    buf.extend_from_slice(INVERT_OFF);
    buf.extend_from_slice(b"\r\n");
}

fn draw_message_bar(buf: &mut Vec<u8>, model: &AppModel) {
    buf.extend_from_slice(ERASE_LINE);
    if let Some(msg) = model.visible_status() {
        let shown: String = msg
            .text()
            .chars()
            .take(model.editor.viewport.screencols)
            .collect();
        buf.extend_from_slice(shown.as_bytes());
    }
}
