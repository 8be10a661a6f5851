#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchContext, DispatchResult, dispatch};
use core_events::Key;
use core_state::{EditorState, ScreenSize};
use core_text::Buffer;
use std::path::Path;

pub fn state_with(raw: &[u8], file: &Path, rows: u16) -> EditorState {
    EditorState::new(Buffer::load(raw), file).with_screen(ScreenSize::new(80, rows))
}

/// Feed keys through the dispatcher, returning the last result.
pub fn feed(state: &mut EditorState, backup: &Path, keys: &[Key]) -> DispatchResult {
    let ctx = DispatchContext {
        backup_path: backup,
    };
    let mut last = DispatchResult::clean();
    for &k in keys {
        last = dispatch(k, state, &ctx);
    }
    last
}

pub fn bytes(s: &str) -> Vec<Key> {
    s.bytes().map(Key::Byte).collect()
}

pub fn lines(state: &EditorState) -> Vec<String> {
    state
        .buffer
        .lines()
        .map(|l| String::from_utf8_lossy(l.as_bytes()).into_owned())
        .collect()
}
