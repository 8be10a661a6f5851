//! Navigation keys and jumps.

use super::DispatchResult;
use crate::JumpKind;
use core_state::{EditorState, Motion, viewport};

pub(crate) fn handle_motion(motion: Motion, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    viewport::apply_motion(
        &mut state.buffer,
        &mut state.cursor,
        motion,
        state.screen.rows,
    );
    tracing::trace!(
        target: "actions.dispatch",
        ?motion,
        from_line = before.line,
        from_byte = before.byte,
        line = state.cursor.line,
        byte = state.cursor.byte,
        scroll = state.buffer.scroll,
        "motion"
    );
    DispatchResult::clean()
}

pub(crate) fn handle_jump(kind: JumpKind, state: &mut EditorState) -> DispatchResult {
    let count = state.buffer.line_count();
    match kind {
        JumpKind::BufferEnd => {
            let page = usize::from(state.screen.rows.saturating_sub(1));
            state.buffer.scroll = count.saturating_sub(page);
            state.cursor.line = count - 1;
        }
        JumpKind::BufferStart => {
            state.buffer.scroll = 0;
            state.cursor.line = 0;
        }
        JumpKind::LineStart => state.cursor.byte = 0,
        JumpKind::LineEnd => state.cursor.byte = state.buffer.line_byte_len(state.cursor.line),
    }
    viewport::clamp(&mut state.buffer, &mut state.cursor);
    DispatchResult::clean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::ScreenSize;
    use core_text::{Buffer, Position};

    fn numbered(n: usize, rows: u16) -> EditorState {
        let raw: Vec<u8> = (0..n).flat_map(|i| format!("line {i}\n").into_bytes()).collect();
        EditorState::new(Buffer::load(&raw), "t").with_screen(ScreenSize::new(80, rows))
    }

    #[test]
    fn jump_to_end_fills_last_page() {
        let mut s = numbered(30, 10);
        handle_jump(JumpKind::BufferEnd, &mut s);
        assert_eq!(s.cursor.line, 29);
        assert_eq!(s.buffer.scroll, 21);
    }

    #[test]
    fn jump_to_end_of_short_buffer_keeps_scroll_zero() {
        let mut s = numbered(3, 10);
        handle_jump(JumpKind::BufferEnd, &mut s);
        assert_eq!(s.cursor.line, 2);
        assert_eq!(s.buffer.scroll, 0);
    }

    #[test]
    fn jump_to_start_and_line_edges() {
        let mut s = numbered(30, 10);
        s.cursor = Position::new(20, 3);
        s.buffer.scroll = 15;
        handle_jump(JumpKind::LineEnd, &mut s);
        assert_eq!(s.cursor.byte, 7);
        handle_jump(JumpKind::LineStart, &mut s);
        assert_eq!(s.cursor.byte, 0);
        handle_jump(JumpKind::BufferStart, &mut s);
        assert_eq!(s.cursor, Position::origin());
        assert_eq!(s.buffer.scroll, 0);
    }

    #[test]
    fn buffer_start_keeps_byte_when_it_fits() {
        let mut s = numbered(30, 10);
        s.cursor = Position::new(12, 6);
        handle_jump(JumpKind::BufferStart, &mut s);
        assert_eq!(s.cursor, Position::new(0, 6));
    }
}
