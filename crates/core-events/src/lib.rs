//! Logical key domain shared by the input decoder and the dispatcher.
//!
//! Raw terminal bytes are decoded into `Key` before anything else sees them.
//! Navigation keys are distinct variants, so no byte value can ever be
//! mistaken for an arrow or page key.

use std::fmt;

pub const ESC: u8 = 0x1b;
pub const BACKSPACE: u8 = 0x08;
pub const DELETE: u8 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte that did not start an escape sequence.
    Byte(u8),
    /// A bare Escape press (or an unrecognized escape sequence).
    Escape,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}'", *b as char),
            Key::Byte(b) => write!(f, "0x{b:02x}"),
            other => write!(f, "{other:?}"),
        }
    }
}
