//! Editor state for one open file.
//!
//! An `EditorState` is created when a file is opened and dropped when editing
//! of that file ends; nothing is reused across files. It owns the buffer and
//! every piece of per-file session data: cursor, mode, dirty flag, screen
//! geometry and the one-shot status message.
//!
//! Invariants (restored by the dispatcher after every key):
//! * `cursor` is a valid position in `buffer` and `buffer.scroll` a valid line.
//! * `cur_x` equals the flat-tab visual column of `cursor`.
//! * `dirty` is set by every buffer mutation and cleared only by a successful
//!   explicit save.

use core_text::{Buffer, Position};
use std::path::PathBuf;

pub mod viewport;
pub use viewport::Motion;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys navigate, save, quit or switch to Insert.
    #[default]
    Command,
    /// Keys insert or delete text.
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub cols: u16,
    pub rows: u16,
}

impl ScreenSize {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Position,
    /// Visual column of `cursor`, recomputed every step.
    pub cur_x: usize,
    pub mode: Mode,
    pub dirty: bool,
    pub running: bool,
    pub file_name: PathBuf,
    pub highlight: bool,
    pub screen: ScreenSize,
    pub tab_width: usize,
    /// Message shown in the status bar until the next key.
    pub ephemeral_status: Option<String>,
}

impl EditorState {
    pub fn new(buffer: Buffer, file_name: impl Into<PathBuf>) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            cur_x: 0,
            mode: Mode::Command,
            dirty: false,
            running: true,
            file_name: file_name.into(),
            highlight: false,
            screen: ScreenSize::default(),
            tab_width: core_text::DEFAULT_TAB_WIDTH,
            ephemeral_status: None,
        }
    }

    pub fn with_screen(mut self, screen: ScreenSize) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S) {
        self.ephemeral_status = Some(msg.into());
    }

    /// Clamp scroll/cursor into bounds and recompute `cur_x`.
    pub fn normalize_cursor(&mut self) {
        viewport::clamp(&mut self.buffer, &mut self.cursor);
        self.refresh_cur_x();
    }

    pub fn refresh_cur_x(&mut self) {
        self.cur_x = viewport::cursor_visual_col(&self.buffer, &self.cursor, self.tab_width);
    }

    /// Cursor row relative to the viewport top.
    pub fn cur_y(&self) -> usize {
        viewport::screen_row(&self.buffer, &self.cursor)
    }

    pub fn text_rows(&self) -> usize {
        viewport::text_rows(self.screen.rows)
    }

    pub fn mark_dirty(&mut self) {
        if !self.dirty {
            tracing::trace!(target: "state", file = %self.file_name.display(), "buffer_dirty");
            self.dirty = true;
        }
    }
}
