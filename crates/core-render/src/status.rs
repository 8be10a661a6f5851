//! Status bar composition.
//!
//! Layout of the bottom row:
//! `<file><*| >    -- insert --  <message>` on the left and, right-aligned,
//! `<line>,<byte>-<col>  <pct>%`.
//! * `*` marks a dirty buffer; a clean one shows a space in the same cell.
//! * The insert marker only appears in Insert mode.
//! * `<pct>` is `line / (count - 1) * 100` as `%5.1f`, `0.0` on the first line.
//!
//! Two stages: `compose_status` produces ordered segments and
//! `format_status` lays them out into exactly `width` cells. When the two
//! sides collide the right side wins.

use core_state::{EditorState, Mode};
use std::borrow::Cow;
use std::path::Path;

/// What the status bar needs from the editor state.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub line: usize,       // 0-based cursor line
    pub line_count: usize, // >= 1
    pub byte: usize,       // 0-based byte offset in the line
    pub col: usize,        // 0-based visual column
    pub file_name: &'a Path,
    pub dirty: bool,
    pub message: Option<&'a str>,
}

impl<'a> StatusContext<'a> {
    pub fn from_state(state: &'a EditorState) -> Self {
        Self {
            mode: state.mode,
            line: state.cursor.line,
            line_count: state.buffer.line_count(),
            byte: state.cursor.byte,
            col: state.cur_x,
            file_name: &state.file_name,
            dirty: state.dirty,
            message: state.ephemeral_status.as_deref(),
        }
    }

    /// Cursor line as a percentage of the buffer.
    pub fn percent(&self) -> f64 {
        if self.line == 0 || self.line_count <= 1 {
            0.0
        } else {
            self.line as f64 / (self.line_count - 1) as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    DirtyMarker(bool),
    /// Mode label, empty in Command mode.
    ModeLabel(&'static str),
    Message(&'a str),
    /// 1-based line, raw byte offset, 1-based visual column.
    Position {
        line_1: usize,
        byte: usize,
        col_1: usize,
    },
    Percent(f64),
}

impl StatusSegment<'_> {
    fn is_right(&self) -> bool {
        matches!(self, Self::Position { .. } | Self::Percent(_))
    }
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let label = match ctx.mode {
        Mode::Insert => "-- insert --",
        Mode::Command => "",
    };
    let mut out = Vec::with_capacity(6);
    out.push(StatusSegment::FileName(ctx.file_name.to_string_lossy()));
    out.push(StatusSegment::DirtyMarker(ctx.dirty));
    out.push(StatusSegment::ModeLabel(label));
    if let Some(msg) = ctx.message {
        out.push(StatusSegment::Message(msg));
    }
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        byte: ctx.byte,
        col_1: ctx.col + 1,
    });
    out.push(StatusSegment::Percent(ctx.percent()));
    out
}

fn render_segment(s: &mut String, seg: &StatusSegment<'_>) {
    match seg {
        StatusSegment::FileName(name) => s.push_str(name),
        StatusSegment::DirtyMarker(dirty) => s.push(if *dirty { '*' } else { ' ' }),
        StatusSegment::ModeLabel(label) => {
            s.push_str("    ");
            s.push_str(label);
        }
        StatusSegment::Message(msg) => {
            s.push_str("  ");
            s.push_str(msg);
        }
        StatusSegment::Position { line_1, byte, col_1 } => {
            s.push_str(&format!("{line_1},{byte}-{col_1}"));
        }
        StatusSegment::Percent(pct) => s.push_str(&format!("  {pct:5.1}%")),
    }
}

/// Left-hand text (file, dirty marker, mode label, message).
pub fn format_left(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(48);
    for seg in segments.iter().filter(|s| !s.is_right()) {
        render_segment(&mut s, seg);
    }
    s
}

/// Right-hand text (position and percentage).
pub fn format_right(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(24);
    for seg in segments.iter().filter(|s| s.is_right()) {
        render_segment(&mut s, seg);
    }
    s
}

/// Lay the segments out into exactly `width` characters.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    let mut cells: Vec<char> = vec![' '; width];
    for (cell, ch) in cells.iter_mut().zip(format_left(segments).chars()) {
        *cell = ch;
    }
    let right: Vec<char> = format_right(segments).chars().collect();
    let start = width.saturating_sub(right.len());
    let skip = right.len().saturating_sub(width);
    for (cell, ch) in cells[start..].iter_mut().zip(right.into_iter().skip(skip)) {
        *cell = ch;
    }
    cells.into_iter().collect()
}
