//! Raw byte -> logical key decoding.
//!
//! A lone `0x1b` and the first byte of a CSI sequence look identical, so after
//! an escape byte every further byte is awaited with a short timeout. Silence
//! means the user pressed Escape; otherwise the bytes are matched against the
//! small set of sequences we understand:
//!
//! | bytes after ESC | key      |
//! |-----------------|----------|
//! | `[A` `[B`       | Up, Down |
//! | `[C` `[D`       | Right, Left |
//! | `[5~` `[6~`     | PageUp, PageDown |
//!
//! Anything else collapses to `Key::Escape`; bytes already consumed by the
//! failed match are dropped.

use crate::source::ByteSource;
use core_events::{ESC, Key};
use std::io;
use std::time::Duration;

pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDecoder {
    escape_timeout: Duration,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_ESCAPE_TIMEOUT)
    }
}

impl KeyDecoder {
    pub fn new(escape_timeout: Duration) -> Self {
        Self { escape_timeout }
    }

    pub fn escape_timeout(&self) -> Duration {
        self.escape_timeout
    }

    /// Read the next logical key. `Ok(None)` once the source is exhausted.
    pub fn next_key<S: ByteSource + ?Sized>(&self, src: &mut S) -> io::Result<Option<Key>> {
        let Some(first) = src.read_byte()? else {
            return Ok(None);
        };
        if first != ESC {
            return Ok(Some(Key::Byte(first)));
        }
        let key = self.decode_escape(src)?;
        tracing::trace!(target: "input", %key, "escape_decoded");
        Ok(Some(key))
    }

    fn decode_escape<S: ByteSource + ?Sized>(&self, src: &mut S) -> io::Result<Key> {
        let Some(intro) = src.read_byte_timeout(self.escape_timeout)? else {
            return Ok(Key::Escape);
        };
        let Some(code) = src.read_byte_timeout(self.escape_timeout)? else {
            return Ok(Key::Escape);
        };
        if intro != b'[' {
            tracing::debug!(target: "input", intro, code, "unknown_escape_sequence");
            return Ok(Key::Escape);
        }
        let key = match code {
            b'A' => Key::Up,
            b'B' => Key::Down,
            b'C' => Key::Right,
            b'D' => Key::Left,
            b'5' | b'6' => {
                let tail = src.read_byte_timeout(self.escape_timeout)?;
                match (code, tail) {
                    (b'5', Some(b'~')) => Key::PageUp,
                    (b'6', Some(b'~')) => Key::PageDown,
                    _ => Key::Escape,
                }
            }
            _ => {
                tracing::debug!(target: "input", code, "unknown_csi_sequence");
                Key::Escape
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    fn decode_all(bytes: &[u8]) -> Vec<Key> {
        let decoder = KeyDecoder::default();
        let mut src = ScriptedSource::new(bytes);
        let mut keys = Vec::new();
        while let Some(k) = decoder.next_key(&mut src).unwrap() {
            keys.push(k);
        }
        keys
    }

    #[test]
    fn plain_bytes_pass_through() {
        assert_eq!(
            decode_all(b"i\x7f\r"),
            vec![Key::Byte(b'i'), Key::Byte(0x7f), Key::Byte(b'\r')]
        );
    }

    #[test]
    fn arrows_decode() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![Key::Up, Key::Down, Key::Right, Key::Left]
        );
    }

    #[test]
    fn page_keys_decode() {
        assert_eq!(
            decode_all(b"\x1b[5~\x1b[6~"),
            vec![Key::PageUp, Key::PageDown]
        );
    }

    #[test]
    fn lone_escape_times_out() {
        assert_eq!(decode_all(b"\x1b"), vec![Key::Escape]);
    }

    #[test]
    fn escape_then_pause_keeps_following_key() {
        let decoder = KeyDecoder::default();
        let mut src = ScriptedSource::new(b"\x1b");
        src.pause();
        src.push(b"q");
        assert_eq!(decoder.next_key(&mut src).unwrap(), Some(Key::Escape));
        assert_eq!(decoder.next_key(&mut src).unwrap(), Some(Key::Byte(b'q')));
        assert_eq!(decoder.next_key(&mut src).unwrap(), None);
    }

    #[test]
    fn truncated_sequence_is_escape() {
        assert_eq!(decode_all(b"\x1b["), vec![Key::Escape]);
        assert_eq!(decode_all(b"\x1b[5"), vec![Key::Escape]);
    }

    #[test]
    fn unknown_sequences_collapse_to_escape() {
        // non-CSI intro consumes two bytes
        assert_eq!(decode_all(b"\x1bOPx"), vec![Key::Escape, Key::Byte(b'x')]);
        // unknown CSI final byte
        assert_eq!(decode_all(b"\x1b[Zx"), vec![Key::Escape, Key::Byte(b'x')]);
        // page prefix with wrong terminator consumes the terminator
        assert_eq!(decode_all(b"\x1b[5Ax"), vec![Key::Escape, Key::Byte(b'x')]);
    }

    #[test]
    fn low_control_bytes_are_not_navigation() {
        assert_eq!(
            decode_all(&[0, 1, 2, 3, 4, 5]),
            (0u8..6).map(Key::Byte).collect::<Vec<_>>()
        );
    }

    #[test]
    fn custom_timeout_is_kept() {
        let d = KeyDecoder::new(Duration::from_millis(35));
        assert_eq!(d.escape_timeout(), Duration::from_millis(35));
    }
}
