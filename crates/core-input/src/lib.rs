//! Input decoding: raw terminal bytes into logical `Key`s.
//!
//! The editor reads exactly one key per cycle, synchronously. `ByteSource`
//! abstracts where bytes come from (`TtySource` for the real terminal,
//! `ScriptedSource` for tests and replays); `KeyDecoder` owns the escape
//! disambiguation policy.

mod decoder;
mod source;
mod tty;

pub use decoder::{DEFAULT_ESCAPE_TIMEOUT, KeyDecoder};
pub use source::{ByteSource, ScriptedSource};
pub use tty::TtySource;
