//! Key input decoding - classifies the raw terminal byte stream into tokens
//!
//! Terminals encode navigation keys as short, ambiguous escape sequences.
//! The decoder resolves them with at most three bytes of lookahead and never
//! waits past the source's bounded read interval, so the caller keeps
//! redrawing while idle.

use std::io;

/// ASCII DEL, sent by most terminals for the backspace key
const DEL: u8 = 127;
/// ASCII BS, the alternate backspace code
const BS: u8 = 0x08;
/// Escape lead byte
const ESC: u8 = 0x1b;

/// The control-key code for a letter (Ctrl-Q for `b'q'`, and so on)
pub const fn ctrl(ch: u8) -> u8 {
    ch & 0x1f
}

/// One logical input unit read from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain character or control byte
    Char(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Delete,
    Backspace,
    /// A bare escape (no sequence followed within the read window)
    Escape,
    /// An escape sequence the decoder does not know; a no-op, not an error
    Unrecognized,
}

/// A byte stream with a bounded per-read wait.
///
/// `Ok(None)` means the wait window expired with no byte available. The
/// production implementation polls the tty; tests feed scripted bytes.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Decodes the byte stream from a [`ByteSource`] into [`Key`] tokens
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read one logical input unit.
    ///
    /// Returns `Ok(None)` when no byte arrived within the read window; the
    /// caller redraws and re-invokes. Never blocks past that window, which
    /// is what keeps the message bar ticking while the editor idles.
    pub fn next_token(&mut self) -> io::Result<Option<Key>> {
        let Some(byte) = self.source.read_byte()? else {
            return Ok(None);
        };

        if byte != ESC {
            return Ok(Some(match byte {
                DEL | BS => Key::Backspace,
                other => Key::Char(other),
            }));
        }

        // Escape lead: a timeout on either following byte means the user
        // pressed the escape key itself.
        let Some(first) = self.source.read_byte()? else {
            return Ok(Some(Key::Escape));
        };
        let Some(second) = self.source.read_byte()? else {
            return Ok(Some(Key::Escape));
        };

        if first != b'[' {
            return Ok(Some(Key::Unrecognized));
        }

        let key = match second {
            b'A' => Key::ArrowUp,
            b'B' => Key::ArrowDown,
            b'C' => Key::ArrowRight,
            b'D' => Key::ArrowLeft,
            b'0'..=b'9' => {
                let Some(terminator) = self.source.read_byte()? else {
                    return Ok(Some(Key::Escape));
                };
                match (second, terminator) {
                    (b'3', b'~') => Key::Delete,
                    (b'5', b'~') => Key::PageUp,
                    (b'6', b'~') => Key::PageDown,
                    _ => Key::Unrecognized,
                }
            }
            _ => Key::Unrecognized,
        };
        Ok(Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted byte source: `None` entries simulate read timeouts
    struct Script(std::vec::IntoIter<Option<u8>>);

    impl Script {
        fn bytes(bytes: &[u8]) -> Self {
            Self(bytes.iter().map(|&b| Some(b)).collect::<Vec<_>>().into_iter())
        }

        fn steps(steps: Vec<Option<u8>>) -> Self {
            Self(steps.into_iter())
        }
    }

    impl ByteSource for Script {
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            Ok(self.0.next().unwrap_or(None))
        }
    }

    fn decode_one(bytes: &[u8]) -> Option<Key> {
        KeyDecoder::new(Script::bytes(bytes)).next_token().unwrap()
    }

    // ========================================================================
    // Plain byte classification
    // ========================================================================

    #[test]
    fn test_printable_byte_is_char() {
        assert_eq!(decode_one(b"x"), Some(Key::Char(b'x')));
        assert_eq!(decode_one(b"\t"), Some(Key::Char(b'\t')));
    }

    #[test]
    fn test_control_byte_is_char() {
        assert_eq!(decode_one(&[ctrl(b'q')]), Some(Key::Char(0x11)));
    }

    #[test]
    fn test_backspace_codes() {
        assert_eq!(decode_one(&[127]), Some(Key::Backspace));
        assert_eq!(decode_one(&[0x08]), Some(Key::Backspace));
    }

    #[test]
    fn test_idle_timeout_yields_no_token() {
        let mut decoder = KeyDecoder::new(Script::steps(vec![None]));
        assert_eq!(decoder.next_token().unwrap(), None);
    }

    // ========================================================================
    // Escape sequences
    // ========================================================================

    #[test]
    fn test_arrow_keys() {
        assert_eq!(decode_one(b"\x1b[A"), Some(Key::ArrowUp));
        assert_eq!(decode_one(b"\x1b[B"), Some(Key::ArrowDown));
        assert_eq!(decode_one(b"\x1b[C"), Some(Key::ArrowRight));
        assert_eq!(decode_one(b"\x1b[D"), Some(Key::ArrowLeft));
    }

    #[test]
    fn test_tilde_sequences() {
        assert_eq!(decode_one(b"\x1b[3~"), Some(Key::Delete));
        assert_eq!(decode_one(b"\x1b[5~"), Some(Key::PageUp));
        assert_eq!(decode_one(b"\x1b[6~"), Some(Key::PageDown));
    }

    #[test]
    fn test_unknown_tilde_digit_is_unrecognized() {
        assert_eq!(decode_one(b"\x1b[9~"), Some(Key::Unrecognized));
    }

    #[test]
    fn test_digit_without_tilde_is_unrecognized() {
        assert_eq!(decode_one(b"\x1b[3x"), Some(Key::Unrecognized));
    }

    #[test]
    fn test_unknown_letter_is_unrecognized() {
        assert_eq!(decode_one(b"\x1b[Z"), Some(Key::Unrecognized));
    }

    #[test]
    fn test_non_bracket_sequence_is_unrecognized() {
        assert_eq!(decode_one(b"\x1bOA"), Some(Key::Unrecognized));
    }

    // ========================================================================
    // Timeout mid-sequence
    // ========================================================================

    #[test]
    fn test_bare_escape_on_first_timeout() {
        let mut decoder = KeyDecoder::new(Script::steps(vec![Some(0x1b), None]));
        assert_eq!(decoder.next_token().unwrap(), Some(Key::Escape));
    }

    #[test]
    fn test_bare_escape_on_second_timeout() {
        let mut decoder = KeyDecoder::new(Script::steps(vec![Some(0x1b), Some(b'['), None]));
        assert_eq!(decoder.next_token().unwrap(), Some(Key::Escape));
    }

    #[test]
    fn test_escape_on_truncated_tilde_sequence() {
        let mut decoder =
            KeyDecoder::new(Script::steps(vec![Some(0x1b), Some(b'['), Some(b'5'), None]));
        assert_eq!(decoder.next_token().unwrap(), Some(Key::Escape));
    }

    #[test]
    fn test_decoding_consumes_exactly_one_sequence() {
        let mut decoder = KeyDecoder::new(Script::bytes(b"\x1b[Aq"));
        assert_eq!(decoder.next_token().unwrap(), Some(Key::ArrowUp));
        assert_eq!(decoder.next_token().unwrap(), Some(Key::Char(b'q')));
    }
}
