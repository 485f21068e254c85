//! Terminal control - raw mode switching, size query, bounded tty reads
//!
//! Everything here touches the real terminal; the editor core only sees the
//! [`ByteSource`] trait and plain dimensions.

use std::io::{self, Write};
use std::os::unix::io::RawFd;

use crossterm::terminal;

use crate::input::ByteSource;

const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Per-read wait on the tty, in milliseconds.
///
/// Short enough that the idle loop keeps redrawing (message-bar expiry),
/// long enough to keep escape sequences together.
const READ_TIMEOUT_MS: libc::c_int = 100;

/// Guard that puts the terminal into raw mode and restores it on drop.
///
/// Drop also clears the screen and homes the cursor, so both the clean-quit
/// and the fatal-error path leave the terminal usable.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut out = io::stdout();
        let _ = out.write_all(CLEAR_SCREEN);
        let _ = out.write_all(CURSOR_HOME);
        let _ = out.flush();
    }
}

/// Byte source reading the tty with a bounded poll
#[derive(Debug)]
pub struct TtyInput {
    fd: RawFd,
}

impl TtyInput {
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut pollfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let ready = unsafe { libc::poll(&mut pollfd, 1, READ_TIMEOUT_MS) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(err);
        }
        if ready == 0 {
            return Ok(None);
        }

        let mut byte = 0u8;
        let n = unsafe { libc::read(self.fd, &mut byte as *mut u8 as *mut libc::c_void, 1) };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::WouldBlock
                    || err.kind() == io::ErrorKind::Interrupted
                {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}

/// Current terminal size as `(rows, cols)`.
///
/// Falls back to the cursor-position query when the direct size query
/// fails: push the cursor to the bottom-right corner and ask the terminal
/// where it ended up.
pub fn window_size(input: &mut TtyInput) -> io::Result<(usize, usize)> {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 => Ok((rows as usize, cols as usize)),
        _ => cursor_position_fallback(input),
    }
}

fn cursor_position_fallback(input: &mut TtyInput) -> io::Result<(usize, usize)> {
    let mut out = io::stdout();
    out.write_all(b"\x1b[999C\x1b[999B\x1b[6n")?;
    out.flush()?;

    let mut reply = Vec::with_capacity(32);
    while reply.len() < 32 {
        match input.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    parse_cursor_report(&reply).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            "could not determine terminal size",
        )
    })
}

/// Parse a `ESC [ rows ; cols R` cursor position report (terminator already
/// consumed)
fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_report() {
        assert_eq!(parse_cursor_report(b"\x1b[24;80"), Some((24, 80)));
        assert_eq!(parse_cursor_report(b"\x1b[3;141"), Some((3, 141)));
    }

    #[test]
    fn test_parse_cursor_report_rejects_garbage() {
        assert_eq!(parse_cursor_report(b""), None);
        assert_eq!(parse_cursor_report(b"24;80"), None);
        assert_eq!(parse_cursor_report(b"\x1b[24"), None);
        assert_eq!(parse_cursor_report(b"\x1b[a;b"), None);
    }
}
