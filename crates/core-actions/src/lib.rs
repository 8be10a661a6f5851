//! Key translation, dispatch and file IO for the editing core.
//!
//! A decoded `Key` is translated against the current mode into an `Action`
//! (`key_translator`), then applied to the `EditorState` by the dispatcher,
//! which also restores the cursor/viewport invariants after every step.
//! `io_ops` loads and saves buffers.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchContext, DispatchResult, dispatch, dispatch_action};
pub use io_ops::IoError;
pub use key_translator::translate_key;

use core_state::Motion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(Motion),
    ModeChange(ModeChange),
    Jump(JumpKind),
    Edit(EditKind),
    Quit,
    Save,
    SaveAndQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    /// Back to Command mode; also writes the autosave backup.
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    BufferStart,
    BufferEnd,
    LineStart,
    LineEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    Backspace,
}
