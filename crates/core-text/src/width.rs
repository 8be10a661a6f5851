//! Visual column computation.
//!
//! Every byte occupies one terminal cell except tab, which occupies a flat
//! `tab_width` cells wherever it sits. Tabs are NOT aligned to the next
//! multiple of `tab_width`; `"a\tb"` places `b` at column `1 + tab_width`.
//! Unicode width is out of scope: a multi-byte UTF-8 sequence counts one cell
//! per byte.

pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Cells occupied by a single byte.
#[inline]
pub fn byte_width(byte: u8, tab_width: usize) -> usize {
    if byte == b'\t' { tab_width } else { 1 }
}

/// Visual column of byte offset `byte` within `line` (cells before it).
/// Offsets past the end are treated as the end of the line.
pub fn visual_col(line: &[u8], byte: usize, tab_width: usize) -> usize {
    line.iter()
        .take(byte)
        .map(|&b| byte_width(b, tab_width))
        .sum()
}
