//! Line-oriented byte buffer.
//!
//! A `Buffer` is an ordered `Vec<Line>` plus the scroll offset of the topmost
//! visible line. Content is raw bytes: nothing is decoded, normalized or
//! stripped (`\r` survives a load/save round trip untouched).
//!
//! Invariants (must hold after every public call):
//! * `line_count() >= 1`; an empty file loads as one empty line and merges
//!   never remove the last remaining line.
//! * `scroll` is a line index once clamped by the viewport layer; the buffer
//!   itself only stores it.
//! * Lines are exclusively owned; no reference to a `Line` escapes mutably
//!   except through the structural helpers below.

pub mod line;
pub mod width;

pub use line::Line;
pub use width::{DEFAULT_TAB_WIDTH, visual_col};

/// A position inside a buffer expressed as (line index, byte offset within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.byte = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.byte > max_len {
            self.byte = max_len;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
    pub scroll: usize,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// A buffer holding exactly one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            scroll: 0,
        }
    }

    /// Build a buffer from raw file bytes, splitting on `\n`.
    ///
    /// A final `\n` terminates the last line rather than starting a new empty
    /// one; an unterminated final segment is still a line.
    pub fn load(raw: &[u8]) -> Self {
        let mut segments: Vec<&[u8]> = raw.split(|&b| b == b'\n').collect();
        if segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        let mut lines: Vec<Line> = segments.into_iter().map(Line::from_bytes).collect();
        if lines.is_empty() {
            lines.push(Line::new());
        }
        Self { lines, scroll: 0 }
    }

    /// Content of every line followed by a single `\n`, last line included.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        out
    }

    /// Total number of lines in the buffer (never zero).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Byte length of a line; 0 for out-of-range indices.
    pub fn line_byte_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map(Line::len).unwrap_or(0)
    }

    /// Insert a byte at `pos`, advancing `pos.byte` on success.
    pub fn insert_byte(&mut self, pos: &mut Position, byte: u8) -> bool {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return false;
        };
        if line.insert(pos.byte, byte) {
            pos.byte += 1;
            true
        } else {
            false
        }
    }

    /// Remove the byte before `pos` within its line, retreating `pos.byte`.
    pub fn delete_before(&mut self, pos: &mut Position) -> bool {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return false;
        };
        if line.delete_before(pos.byte).is_some() {
            pos.byte -= 1;
            true
        } else {
            false
        }
    }

    /// Split line `y` at byte `x`; the tail becomes line `y + 1`.
    pub fn insert_newline_at(&mut self, y: usize, x: usize) -> bool {
        let Some(line) = self.lines.get_mut(y) else {
            return false;
        };
        match line.split(x) {
            Some(tail) => {
                self.lines.insert(y + 1, tail);
                true
            }
            None => false,
        }
    }

    /// Append line `y` to line `y - 1` and remove it. Returns the previous
    /// line's pre-merge length (the new cursor column), or `None` when `y == 0`
    /// or out of range.
    pub fn merge_into_previous(&mut self, y: usize) -> Option<usize> {
        if y == 0 || y >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(y);
        let prev = &mut self.lines[y - 1];
        let col = prev.len();
        prev.merge(line);
        Some(col)
    }
}
