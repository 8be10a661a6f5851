//! Full-frame rendering.
//!
//! Every key press ends with a complete redraw: `frame::build_frame` snapshots
//! the editor state, `writer::emit` clears and repaints each row, the status
//! bar and finally the cursor. No diffing or partial repaint.
//!
//! Components:
//! - `highlight`: per-line tokenizer producing contiguous `StyleSpan`s.
//! - `style`: syntax classes and their foreground colours.
//! - `status`: status bar segments and layout.
//! - `frame`: rows, gutter and cursor cell for one redraw.
//! - `writer`: ordered terminal commands flushed through crossterm.

pub mod frame;
pub mod highlight;
pub mod status;
pub mod style;
pub mod writer;

pub use frame::{Frame, FrameRow, build_frame};
pub use style::{Style, StyleSpan};

use anyhow::Result;
use core_state::EditorState;
use std::io::Write;

/// Build and emit one frame for `state`.
pub fn render<W: Write>(state: &EditorState, out: &mut W) -> Result<()> {
    let frame = build_frame(state);
    writer::emit(&frame, out)
}
