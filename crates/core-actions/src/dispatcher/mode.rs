//! Mode transitions (Command <-> Insert).
//!
//! Leaving Insert writes the whole buffer to the backup path. A failed
//! backup is logged and otherwise ignored; it never changes `dirty`.

use super::{DispatchContext, DispatchResult};
use crate::ModeChange;
use crate::io_ops;
use core_state::{EditorState, Mode};

pub(crate) fn handle_mode_change(
    mc: ModeChange,
    state: &mut EditorState,
    ctx: &DispatchContext<'_>,
) -> DispatchResult {
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
        }
        ModeChange::LeaveInsert => {
            state.mode = Mode::Command;
            if let Err(e) = io_ops::write_backup(&state.buffer, ctx.backup_path) {
                tracing::warn!(target: "io", error = %e, "backup_write_failed");
            }
        }
    }
    tracing::debug!(target: "actions.dispatch", mode = ?state.mode, "mode_change");
    DispatchResult::clean()
}
