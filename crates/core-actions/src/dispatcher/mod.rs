//! Dispatcher applying `Action`s to the editor state.
//!
//! Decomposed by concern:
//! * `motion`  - navigation keys and jumps
//! * `mode`    - Command <-> Insert transitions (and the autosave on leave)
//! * `command` - quit / save / save-and-quit
//! * `edit`    - byte insert, newline split, backspace/merge
//!
//! One `dispatch` call is one editor step. Order within a step: clear the
//! previous status message, translate, apply (motions clamp on their own),
//! clamp again, scroll the cursor back into view, refresh `cur_x`.

use crate::{Action, translate_key};
use core_events::Key;
use core_state::{EditorState, viewport};
use std::path::Path;

mod command;
mod edit;
mod mode;
mod motion;

/// Environment the dispatcher needs beyond the state itself.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Autosave target written when leaving Insert mode.
    pub backup_path: &'a Path,
}

/// Outcome of one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// The buffer content changed.
    pub edited: bool,
    /// The session for this file should end.
    pub quit: bool,
}

impl DispatchResult {
    pub fn edited() -> Self {
        Self {
            edited: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            edited: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            edited: false,
            quit: true,
        }
    }
}

/// Run one editor step for `key`.
pub fn dispatch(key: Key, state: &mut EditorState, ctx: &DispatchContext<'_>) -> DispatchResult {
    state.ephemeral_status = None;
    match translate_key(state.mode, key) {
        Some(action) => {
            tracing::trace!(target: "actions.dispatch", %key, ?action, "dispatch");
            dispatch_action(action, state, ctx)
        }
        None => {
            tracing::trace!(target: "actions.dispatch", %key, mode = ?state.mode, "unbound_key");
            restore_invariants(state);
            DispatchResult::clean()
        }
    }
}

/// Apply an already translated action, then restore the cursor invariants.
pub fn dispatch_action(
    action: Action,
    state: &mut EditorState,
    ctx: &DispatchContext<'_>,
) -> DispatchResult {
    let result = match action {
        Action::Motion(m) => motion::handle_motion(m, state),
        Action::Jump(j) => motion::handle_jump(j, state),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state, ctx),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::Quit | Action::Save | Action::SaveAndQuit => {
            command::handle_command(action, state)
        }
    };
    restore_invariants(state);
    result
}

fn restore_invariants(state: &mut EditorState) {
    viewport::clamp(&mut state.buffer, &mut state.cursor);
    viewport::ensure_visible(&mut state.buffer, &state.cursor, state.screen.rows);
    state.refresh_cur_x();
}
