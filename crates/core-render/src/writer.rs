//! Terminal writer.
//!
//! A short-lived `Writer` collects primitive terminal commands for one frame
//! and flushes them in order through crossterm's `queue!`, followed by a
//! single `flush`. Positions are absolute with a (0,0) origin.
//!
//! `emit` translates a `Frame` into commands: hide the cursor, clear and
//! redraw every row, draw the status bar, place and show the cursor.

use crate::frame::{Frame, FrameRow, render_cells};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

pub const STATUS_BACKGROUND: Color = Color::AnsiValue(236);
pub const DIM: Color = Color::DarkGrey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    ClearLine,
    Print(String),
    Foreground(Color),
    Background(Color),
    ResetColor,
    HideCursor,
    ShowCursor,
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn foreground(&mut self, c: Color) {
        self.cmds.push(Command::Foreground(c));
    }
    pub fn background(&mut self, c: Color) {
        self.cmds.push(Command::Background(c));
    }
    pub fn reset_color(&mut self) {
        self.cmds.push(Command::ResetColor);
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Print `s` in colour `c`, then restore the default.
    pub fn print_colored<S: Into<String>>(&mut self, s: S, c: Color) {
        let s: String = s.into();
        if s.is_empty() {
            return;
        }
        self.foreground(c);
        self.print(s);
        self.reset_color();
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                // caller precedes this with MoveTo(0, y)
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Foreground(c) => queue!(out, SetForegroundColor(c))?,
                Command::Background(c) => queue!(out, SetBackgroundColor(c))?,
                Command::ResetColor => queue!(out, ResetColor)?,
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Translate a frame into writer commands.
pub fn frame_commands(frame: &Frame) -> Writer {
    let mut w = Writer::new();
    w.hide_cursor();
    for (y, row) in frame.rows.iter().enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        w.move_to(0, y);
        w.clear_line();
        match row {
            FrameRow::Text {
                number,
                current,
                content,
                spans,
            } => {
                let label = format!("{number:>width$}", width = frame.gutter_width);
                if *current {
                    w.print(label);
                } else {
                    w.print_colored(label, DIM);
                }
                w.print(" ");
                let mut budget = frame.content_width();
                for span in spans {
                    let bytes = content.get(span.range.clone()).unwrap_or_default();
                    let text = render_cells(bytes, frame.tab_width, &mut budget);
                    match span.style.foreground() {
                        Some(c) => w.print_colored(text, c),
                        None => w.print(text),
                    }
                    if budget == 0 {
                        break;
                    }
                }
            }
            FrameRow::Filler => w.print_colored("~", DIM),
        }
    }
    let status_row = frame.height.saturating_sub(1);
    w.move_to(0, status_row);
    w.clear_line();
    w.background(STATUS_BACKGROUND);
    w.print(frame.status.clone());
    w.reset_color();
    w.move_to(frame.cursor.0, frame.cursor.1);
    w.show_cursor();
    w
}

/// Emit a full frame to `out`.
pub fn emit<W: Write>(frame: &Frame, out: &mut W) -> Result<()> {
    let w = frame_commands(frame);
    tracing::trace!(target: "render", commands = w.commands().len(), "frame_emit");
    w.flush_to(out)
}
