//! Quit and save commands.

use super::DispatchResult;
use crate::{Action, io_ops};
use core_state::EditorState;

pub const UNSAVED_CHANGES: &str = "unsaved changes";

fn save(state: &mut EditorState) -> bool {
    match io_ops::write_file(state) {
        Ok(bytes) => {
            let msg = format!(
                "\"{}\" {}L, {}B written",
                state.file_name.display(),
                state.buffer.line_count(),
                bytes
            );
            state.set_ephemeral(msg);
            true
        }
        Err(e) => {
            state.set_ephemeral(format!("save failed: {e}"));
            false
        }
    }
}

fn quit(state: &mut EditorState) -> DispatchResult {
    state.running = false;
    tracing::info!(target: "actions.dispatch", file = %state.file_name.display(), "quit");
    DispatchResult::quit()
}

pub(crate) fn handle_command(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Quit if state.dirty => {
            state.set_ephemeral(UNSAVED_CHANGES);
            DispatchResult::clean()
        }
        Action::Quit => quit(state),
        Action::Save => {
            save(state);
            DispatchResult::clean()
        }
        Action::SaveAndQuit => {
            if save(state) {
                quit(state)
            } else {
                DispatchResult::clean()
            }
        }
        _ => DispatchResult::clean(),
    }
}
