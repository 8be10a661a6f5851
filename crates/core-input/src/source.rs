//! Byte sources feeding the key decoder.
//!
//! The decoder only needs two primitives: a blocking single-byte read and a
//! single-byte read bounded by a timeout. `Ok(None)` from `read_byte` means end
//! of input; from `read_byte_timeout` it means nothing arrived in time.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

pub trait ByteSource {
    /// Block until one byte is available. `Ok(None)` signals end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Wait at most `timeout` for one byte. `Ok(None)` when none arrived.
    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// In-memory source replaying a fixed byte script.
///
/// `pause` inserts a gap: a timed read that reaches it reports a timeout,
/// while a blocking read waits it out. A timed read on an exhausted script
/// also reports a timeout, so a trailing `0x1b` decodes as a bare Escape
/// exactly as a lone key press would.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    // `None` marks a pause.
    events: VecDeque<Option<u8>>,
}

impl ScriptedSource {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        let mut src = Self::default();
        src.push(bytes);
        src
    }

    pub fn push(&mut self, bytes: impl AsRef<[u8]>) {
        self.events.extend(bytes.as_ref().iter().copied().map(Some));
    }

    pub fn pause(&mut self) {
        self.events.push_back(None);
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        while let Some(ev) = self.events.pop_front() {
            if ev.is_some() {
                return Ok(ev);
            }
        }
        Ok(None)
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Ok(self.events.pop_front().flatten())
    }
}
