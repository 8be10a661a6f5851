//! Frame description: what one full redraw puts on screen.
//!
//! `build_frame` snapshots the editor state into plain data (rows, status
//! text, cursor cell); `writer::emit` turns that into terminal commands.
//! Keeping the two apart lets tests inspect a frame without a terminal.
//!
//! Text rows are `screen_rows - 1`; each shows either a buffer line (gutter
//! number, one space, highlighted content) or a `~` filler past the end.
//! Content is truncated to the columns left after the gutter.

use crate::highlight::{highlight_line, plain_line};
use crate::status::{StatusContext, compose_status, format_status};
use crate::style::StyleSpan;
use core_state::EditorState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRow {
    Text {
        /// 1-based line number.
        number: usize,
        current: bool,
        content: Vec<u8>,
        spans: Vec<StyleSpan>,
    },
    Filler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub gutter_width: usize,
    pub tab_width: usize,
    pub rows: Vec<FrameRow>,
    pub status: String,
    /// Terminal cell for the cursor as (column, row).
    pub cursor: (u16, u16),
}

impl Frame {
    /// Columns available to line content after the gutter and its space.
    pub fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(self.gutter_width + 1)
    }
}

/// Number of decimal digits in `count` (the gutter width).
pub fn gutter_width(count: usize) -> usize {
    let mut n = count;
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Render line bytes into display cells, spending at most `budget` cells.
///
/// Tabs become `tab_width` spaces; control and non-ASCII bytes become `?` so
/// every byte occupies the cells the cursor math assigns it.
pub fn render_cells(bytes: &[u8], tab_width: usize, budget: &mut usize) -> String {
    let mut out = String::with_capacity(bytes.len().min(*budget));
    for &b in bytes {
        if *budget == 0 {
            break;
        }
        if b == b'\t' {
            let n = tab_width.min(*budget);
            out.extend(std::iter::repeat_n(' ', n));
            *budget -= n;
        } else {
            out.push(if (0x20..=0x7e).contains(&b) { b as char } else { '?' });
            *budget -= 1;
        }
    }
    out
}

pub fn build_frame(state: &EditorState) -> Frame {
    let width = state.screen.cols;
    let height = state.screen.rows;
    let count = state.buffer.line_count();
    let gutter = gutter_width(count);
    let scroll = state.buffer.scroll;

    let rows = (0..state.text_rows())
        .map(|r| {
            let idx = scroll + r;
            match state.buffer.line(idx) {
                Some(line) => {
                    let bytes = line.as_bytes();
                    let spans = if state.highlight {
                        highlight_line(bytes)
                    } else {
                        plain_line(bytes)
                    };
                    FrameRow::Text {
                        number: idx + 1,
                        current: idx == state.cursor.line,
                        content: bytes.to_vec(),
                        spans,
                    }
                }
                None => FrameRow::Filler,
            }
        })
        .collect();

    let ctx = StatusContext::from_state(state);
    let status = format_status(&compose_status(&ctx), usize::from(width));

    let max_col = usize::from(width.saturating_sub(1));
    let max_row = state.text_rows().saturating_sub(1);
    let col = (gutter + 1 + state.cur_x).min(max_col);
    let row = state.cur_y().min(max_row);
    let cursor = (
        u16::try_from(col).unwrap_or(u16::MAX),
        u16::try_from(row).unwrap_or(u16::MAX),
    );

    Frame {
        width,
        height,
        gutter_width: gutter,
        tab_width: state.tab_width,
        rows,
        status,
        cursor,
    }
}
