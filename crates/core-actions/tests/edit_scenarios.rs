mod common;

use common::{bytes, feed, lines, state_with};
use core_events::Key;
use core_state::Mode;
use core_text::Position;
use pretty_assertions::assert_eq;

#[test]
fn split_middle_line() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let mut s = state_with(b"abc\ndef\nghi\n", &dir.path().join("f.txt"), 24);
    s.cursor = Position::new(1, 1);
    feed(&mut s, &backup, &[Key::Byte(b'i'), Key::Byte(b'\r')]);
    assert_eq!(lines(&s), vec!["abc", "d", "ef", "ghi"]);
    assert_eq!(s.cursor, Position::new(2, 0));
    assert_eq!(s.cur_x, 0);
    assert!(s.dirty);
}

#[test]
fn backspace_at_line_start_merges() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let mut s = state_with(b"abc\ndef\n", &dir.path().join("f.txt"), 24);
    s.cursor = Position::new(1, 0);
    feed(&mut s, &backup, &[Key::Byte(b'i'), Key::Byte(0x7f)]);
    assert_eq!(lines(&s), vec!["abcdef"]);
    assert_eq!(s.cursor, Position::new(0, 3));
    assert_eq!(s.cur_x, 3);
}

#[test]
fn typing_then_deleting_restores_content() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let mut s = state_with(b"xy\n", &dir.path().join("f.txt"), 24);
    let mut keys = vec![Key::Byte(b'i'), Key::Right];
    keys.extend(bytes("hello\t"));
    keys.extend(std::iter::repeat_n(Key::Byte(0x08), 6));
    feed(&mut s, &backup, &keys);
    assert_eq!(lines(&s), vec!["xy"]);
    assert_eq!(s.cursor, Position::new(0, 1));
    // content is back but the buffer was still mutated
    assert!(s.dirty);
}

#[test]
fn newline_at_bottom_scrolls_into_view() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let raw: Vec<u8> = (0..4).flat_map(|i| format!("l{i}\n").into_bytes()).collect();
    let mut s = state_with(&raw, &dir.path().join("f.txt"), 5);
    s.cursor = Position::new(3, 2);
    feed(&mut s, &backup, &[Key::Byte(b'i'), Key::Byte(b'\n')]);
    assert_eq!(s.cursor, Position::new(4, 0));
    // four text rows: line 4 needs scroll 1
    assert_eq!(s.buffer.scroll, 1);
}

#[test]
fn merge_above_viewport_scrolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let raw: Vec<u8> = (0..10).flat_map(|i| format!("l{i}\n").into_bytes()).collect();
    let mut s = state_with(&raw, &dir.path().join("f.txt"), 5);
    s.buffer.scroll = 5;
    s.cursor = Position::new(5, 0);
    feed(&mut s, &backup, &[Key::Byte(b'i'), Key::Byte(0x08)]);
    assert_eq!(s.cursor, Position::new(4, 2));
    assert_eq!(s.buffer.scroll, 4);
    assert_eq!(s.mode, Mode::Insert);
}

#[test]
fn control_bytes_are_ignored_in_insert() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("bk");
    let mut s = state_with(b"a\n", &dir.path().join("f.txt"), 24);
    let r = feed(&mut s, &backup, &[Key::Byte(b'i'), Key::Byte(0x01), Key::Byte(0x1f)]);
    assert!(!r.edited);
    assert!(!s.dirty);
    assert_eq!(lines(&s), vec!["a"]);
}
