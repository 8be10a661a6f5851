//! Mode-aware key -> `Action` translation.
//!
//! Stateless: each key maps to at most one action given the current mode.
//! Navigation keys mean the same thing in both modes. Keys with no binding
//! return `None` and are dropped by the dispatcher.

use crate::{Action, EditKind, JumpKind, ModeChange};
use core_events::{BACKSPACE, DELETE, Key};
use core_state::{Mode, Motion};

fn motion_for(key: Key) -> Option<Motion> {
    match key {
        Key::Up => Some(Motion::Up),
        Key::Down => Some(Motion::Down),
        Key::Left => Some(Motion::Left),
        Key::Right => Some(Motion::Right),
        Key::PageUp => Some(Motion::PageUp),
        Key::PageDown => Some(Motion::PageDown),
        Key::Byte(_) | Key::Escape => None,
    }
}

fn translate_command(key: Key) -> Option<Action> {
    let Key::Byte(b) = key else {
        return None;
    };
    match b {
        b'i' => Some(Action::ModeChange(ModeChange::EnterInsert)),
        b'q' => Some(Action::Quit),
        b'w' => Some(Action::Save),
        b's' => Some(Action::SaveAndQuit),
        b'.' => Some(Action::Jump(JumpKind::BufferEnd)),
        b',' => Some(Action::Jump(JumpKind::BufferStart)),
        b';' => Some(Action::Jump(JumpKind::LineStart)),
        b'\'' => Some(Action::Jump(JumpKind::LineEnd)),
        _ => None,
    }
}

fn translate_insert(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        Key::Byte(BACKSPACE | DELETE) => Some(Action::Edit(EditKind::Backspace)),
        Key::Byte(b'\r' | b'\n') => Some(Action::Edit(EditKind::InsertNewline)),
        Key::Byte(b @ (0x20..=0x7e | b'\t')) => Some(Action::Edit(EditKind::InsertByte(b))),
        _ => None,
    }
}

pub fn translate_key(mode: Mode, key: Key) -> Option<Action> {
    if let Some(m) = motion_for(key) {
        return Some(Action::Motion(m));
    }
    match mode {
        Mode::Command => translate_command(key),
        Mode::Insert => translate_insert(key),
    }
}
