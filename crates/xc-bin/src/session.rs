//! One file, one session.
//!
//! The loop is render -> read key -> dispatch, repeated until the file is
//! quit or input ends. The screen size is re-read every cycle so a resized
//! terminal is picked up on the next key.

use anyhow::Result;
use core_actions::io_ops::{self, IoError};
use core_actions::{DispatchContext, dispatch};
use core_config::Config;
use core_input::{ByteSource, KeyDecoder};
use core_state::{EditorState, ScreenSize, viewport};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user quit this file.
    Quit,
    /// The key source is exhausted; no further files can be edited.
    InputClosed,
}

/// Load `path` and build its editor state from the config.
pub fn open_state(path: &Path, config: &Config) -> Result<EditorState, IoError> {
    let buffer = io_ops::open_file(path)?;
    Ok(EditorState::new(buffer, path)
        .with_tab_width(config.tab_width())
        .with_highlight(config.highlights(path)))
}

pub fn run_session<S, W, F>(
    state: &mut EditorState,
    source: &mut S,
    decoder: &KeyDecoder,
    out: &mut W,
    backup_path: &Path,
    mut screen_size: F,
) -> Result<SessionEnd>
where
    S: ByteSource + ?Sized,
    W: Write,
    F: FnMut() -> Option<(u16, u16)>,
{
    let ctx = DispatchContext { backup_path };
    info!(target: "runtime", file = %state.file_name.display(), lines = state.buffer.line_count(), highlight = state.highlight, "session_start");
    let mut steps: u64 = 0;
    loop {
        if let Some((cols, rows)) = screen_size()
            && (cols, rows) != (state.screen.cols, state.screen.rows)
        {
            debug!(target: "runtime", cols, rows, "screen_resized");
            state.screen = ScreenSize::new(cols, rows);
            viewport::ensure_visible(&mut state.buffer, &state.cursor, rows);
        }
        state.normalize_cursor();
        core_render::render(state, out)?;

        let Some(key) = decoder.next_key(source)? else {
            info!(target: "runtime", steps, "input_closed");
            return Ok(SessionEnd::InputClosed);
        };
        steps += 1;
        let result = dispatch(key, state, &ctx);
        if result.quit || !state.running {
            info!(target: "runtime", steps, file = %state.file_name.display(), "session_end");
            return Ok(SessionEnd::Quit);
        }
    }
}
