//! Cursor / viewport mapping.
//!
//! Translates navigation into `(cursor, scroll)` updates and restores the
//! bounds invariants afterwards:
//! * `0 <= scroll <= line_count - 1`
//! * `0 <= cursor.line <= line_count - 1`
//! * `0 <= cursor.byte <= line_len(cursor.line)`
//!
//! The screen has `screen_rows` rows; the last one is the status bar, so text
//! occupies rows `0..screen_rows - 1`. Arithmetic saturates instead of going
//! negative, then everything is clamped, so callers can throw any key sequence
//! at these functions.

use core_text::{Buffer, Position, visual_col};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

/// Rows available for buffer text (screen minus the status bar), at least 1.
pub fn text_rows(screen_rows: u16) -> usize {
    usize::from(screen_rows.saturating_sub(1)).max(1)
}

/// Row of the cursor relative to the top of the viewport (0 when above it).
pub fn screen_row(buffer: &Buffer, cursor: &Position) -> usize {
    cursor.line.saturating_sub(buffer.scroll)
}

/// Apply one navigation step then clamp.
pub fn apply_motion(buffer: &mut Buffer, cursor: &mut Position, motion: Motion, screen_rows: u16) {
    let row = cursor.line as i64 - buffer.scroll as i64;
    let page = usize::from(screen_rows.saturating_sub(1));
    match motion {
        Motion::Up => {
            if row <= 0 {
                buffer.scroll = buffer.scroll.saturating_sub(1);
            }
            cursor.line = cursor.line.saturating_sub(1);
        }
        Motion::Down => {
            if row >= i64::from(screen_rows) - 2 {
                buffer.scroll += 1;
            }
            cursor.line += 1;
        }
        Motion::Left => cursor.byte = cursor.byte.saturating_sub(1),
        Motion::Right => cursor.byte += 1,
        Motion::PageUp => {
            buffer.scroll = buffer.scroll.saturating_sub(page);
            cursor.line = cursor.line.saturating_sub(page);
        }
        Motion::PageDown => {
            buffer.scroll += page;
            cursor.line += page;
        }
    }
    clamp(buffer, cursor);
}

/// Restore the scroll and cursor bounds invariants.
pub fn clamp(buffer: &mut Buffer, cursor: &mut Position) {
    let last = buffer.line_count().saturating_sub(1);
    buffer.scroll = buffer.scroll.min(last);
    cursor.clamp_to(buffer.line_count(), |l| buffer.line_byte_len(l));
}

/// Scroll so the cursor line sits inside the text area. Returns true when
/// `scroll` changed.
pub fn ensure_visible(buffer: &mut Buffer, cursor: &Position, screen_rows: u16) -> bool {
    let rows = text_rows(screen_rows);
    let before = buffer.scroll;
    if cursor.line < buffer.scroll {
        buffer.scroll = cursor.line;
    } else if cursor.line >= buffer.scroll + rows {
        buffer.scroll = cursor.line + 1 - rows;
    }
    before != buffer.scroll
}

/// Visual column of the cursor with flat tab expansion.
pub fn cursor_visual_col(buffer: &Buffer, cursor: &Position, tab_width: usize) -> usize {
    buffer
        .line(cursor.line)
        .map(|l| visual_col(l.as_bytes(), cursor.byte, tab_width))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Buffer {
        let raw: String = (0..n).map(|i| format!("line {i}\n")).collect();
        Buffer::load(raw.as_bytes())
    }

    #[test]
    fn up_at_top_stays_put() {
        let mut b = numbered(3);
        let mut c = Position::origin();
        for _ in 0..5 {
            apply_motion(&mut b, &mut c, Motion::Up, 10);
        }
        assert_eq!(c, Position::origin());
        assert_eq!(b.scroll, 0);
    }

    #[test]
    fn down_on_single_row_screen_scrolls_every_step() {
        let mut b = numbered(20);
        let mut c = Position::origin();
        apply_motion(&mut b, &mut c, Motion::Down, 1);
        assert_eq!((c.line, b.scroll), (1, 1));
        apply_motion(&mut b, &mut c, Motion::Down, 1);
        assert_eq!((c.line, b.scroll), (2, 2));
    }

    #[test]
    fn down_scrolls_at_last_text_row() {
        // 5 screen rows -> 4 text rows (0..=3)
        let mut b = numbered(20);
        let mut c = Position::origin();
        for _ in 0..3 {
            apply_motion(&mut b, &mut c, Motion::Down, 5);
        }
        assert_eq!((c.line, b.scroll), (3, 0));
        apply_motion(&mut b, &mut c, Motion::Down, 5);
        assert_eq!((c.line, b.scroll), (4, 1));
        assert_eq!(screen_row(&b, &c), 3);
    }

    #[test]
    fn up_at_top_row_scrolls_back() {
        let mut b = numbered(20);
        b.scroll = 5;
        let mut c = Position::new(5, 0);
        apply_motion(&mut b, &mut c, Motion::Up, 5);
        assert_eq!((c.line, b.scroll), (4, 4));
    }

    #[test]
    fn page_down_past_end_clamps() {
        let mut b = numbered(12);
        let mut c = Position::origin();
        for _ in 0..4 {
            apply_motion(&mut b, &mut c, Motion::PageDown, 10);
        }
        assert_eq!(c.line, 11);
        assert_eq!(b.scroll, 11);
        apply_motion(&mut b, &mut c, Motion::PageUp, 10);
        assert_eq!((c.line, b.scroll), (2, 2));
        apply_motion(&mut b, &mut c, Motion::PageUp, 10);
        assert_eq!((c.line, b.scroll), (0, 0));
    }

    #[test]
    fn horizontal_moves_clamp_to_line() {
        let mut b = Buffer::load(b"ab\nlonger\n");
        let mut c = Position::new(1, 6);
        apply_motion(&mut b, &mut c, Motion::Right, 10);
        assert_eq!(c.byte, 6);
        apply_motion(&mut b, &mut c, Motion::Up, 10);
        assert_eq!(c, Position::new(0, 2));
        apply_motion(&mut b, &mut c, Motion::Left, 10);
        apply_motion(&mut b, &mut c, Motion::Left, 10);
        apply_motion(&mut b, &mut c, Motion::Left, 10);
        assert_eq!(c.byte, 0);
    }

    #[test]
    fn ensure_visible_follows_cursor() {
        let mut b = numbered(30);
        let c = Position::new(12, 0);
        assert!(ensure_visible(&mut b, &c, 5));
        assert_eq!(b.scroll, 9);
        let c = Position::new(2, 0);
        assert!(ensure_visible(&mut b, &c, 5));
        assert_eq!(b.scroll, 2);
        assert!(!ensure_visible(&mut b, &c, 5));
    }

    #[test]
    fn visual_col_uses_flat_tabs() {
        let b = Buffer::load(b"\tx\n");
        assert_eq!(cursor_visual_col(&b, &Position::new(0, 1), 4), 4);
        assert_eq!(cursor_visual_col(&b, &Position::new(0, 2), 8), 9);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let mut b = numbered(4);
        let mut c = Position::origin();
        for m in [Motion::Down, Motion::PageDown, Motion::Up, Motion::PageUp] {
            apply_motion(&mut b, &mut c, m, 1);
            assert!(b.scroll < b.line_count());
            assert!(c.line < b.line_count());
        }
        assert_eq!(text_rows(0), 1);
    }
}
