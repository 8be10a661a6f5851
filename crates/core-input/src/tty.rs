//! Terminal stdin byte source.
//!
//! Timed reads use `poll(2)` on the stdin descriptor so the editor stays
//! single-threaded: no reader thread, no channel. The terminal is expected
//! to already be in raw mode (VMIN=1) so a read returns as soon as one byte
//! is available.

use crate::source::ByteSource;
use std::io;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TtySource {
    _private: (),
}

impl TtySource {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(unix)]
impl TtySource {
    fn read_one(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        loop {
            let n = unsafe { libc::read(libc::STDIN_FILENO, (&raw mut byte).cast(), 1) };
            if n == 1 {
                return Ok(Some(byte));
            }
            if n == 0 {
                return Ok(None);
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }

    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
        let mut pfd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let ready = unsafe { libc::poll(&raw mut pfd, 1, millis) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(err);
        }
        Ok(ready > 0)
    }
}

#[cfg(unix)]
impl ByteSource for TtySource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.read_one()
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if self.poll_readable(timeout)? {
            self.read_one()
        } else {
            Ok(None)
        }
    }
}

// Without poll the timed read degrades to a blocking read; escape sequences
// still decode, a bare Escape waits for the next key.
#[cfg(not(unix))]
impl ByteSource for TtySource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        use std::io::Read;
        let mut buf = [0u8; 1];
        match io::stdin().lock().read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        self.read_byte()
    }
}
