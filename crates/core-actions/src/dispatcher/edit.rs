//! Buffer mutations in Insert mode.
//!
//! Only a mutation that actually happened marks the state dirty; a backspace
//! at (0,0) changes nothing.

use super::DispatchResult;
use crate::EditKind;
use core_state::{EditorState, Mode};
use core_text::Position;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    if !matches!(state.mode, Mode::Insert) {
        return DispatchResult::clean();
    }
    let before = state.cursor;
    let changed = match kind {
        EditKind::InsertByte(b) => state.buffer.insert_byte(&mut state.cursor, b),
        EditKind::InsertNewline => {
            let ok = state
                .buffer
                .insert_newline_at(state.cursor.line, state.cursor.byte);
            if ok {
                state.cursor = Position::new(state.cursor.line + 1, 0);
            }
            ok
        }
        EditKind::Backspace => backspace(state),
    };
    if !changed {
        return DispatchResult::clean();
    }
    state.mark_dirty();
    tracing::trace!(target: "actions.dispatch", op = ?kind, line = before.line, byte = before.byte, to_line = state.cursor.line, to_byte = state.cursor.byte, "edit");
    DispatchResult::edited()
}

fn backspace(state: &mut EditorState) -> bool {
    let Position { line, byte } = state.cursor;
    if byte > 0 {
        return state.buffer.delete_before(&mut state.cursor);
    }
    if line == 0 {
        return false;
    }
    match state.buffer.merge_into_previous(line) {
        Some(col) => {
            state.cursor = Position::new(line - 1, col);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;

    fn insert_state(raw: &[u8], cursor: Position) -> EditorState {
        let mut s = EditorState::new(Buffer::load(raw), "t");
        s.mode = Mode::Insert;
        s.cursor = cursor;
        s
    }

    #[test]
    fn edits_ignored_outside_insert_mode() {
        let mut s = EditorState::new(Buffer::load(b"abc\n"), "t");
        let r = handle_edit(EditKind::InsertByte(b'x'), &mut s);
        assert!(!r.edited);
        assert!(!s.dirty);
        assert_eq!(s.buffer.line_byte_len(0), 3);
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut s = insert_state(b"abc\n", Position::origin());
        let r = handle_edit(EditKind::Backspace, &mut s);
        assert!(!r.edited);
        assert!(!s.dirty);
    }

    #[test]
    fn backspace_mid_line_deletes() {
        let mut s = insert_state(b"abc\n", Position::new(0, 2));
        assert!(handle_edit(EditKind::Backspace, &mut s).edited);
        assert_eq!(s.buffer.line(0).unwrap().as_bytes(), b"ac");
        assert_eq!(s.cursor, Position::new(0, 1));
        assert!(s.dirty);
    }

    #[test]
    fn newline_at_end_of_line_adds_empty_line() {
        let mut s = insert_state(b"ab\n", Position::new(0, 2));
        assert!(handle_edit(EditKind::InsertNewline, &mut s).edited);
        assert_eq!(s.buffer.line_count(), 2);
        assert_eq!(s.buffer.line_byte_len(1), 0);
        assert_eq!(s.cursor, Position::new(1, 0));
    }
}
