//! Syntax style classes and their terminal colours.
//!
//! A `StyleSpan` covers a half-open byte range `[start, end)` of one line.
//! Spans produced for a line are contiguous and cover every byte; emission
//! looks up the foreground colour per span and prints the bytes through the
//! flat-tab cell renderer.

use crossterm::style::Color;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Plain,
    Type,
    Keyword,
    Preprocessor,
    String,
    Comment,
}

impl Style {
    /// Foreground colour, `None` meaning the terminal default.
    pub fn foreground(self) -> Option<Color> {
        match self {
            Style::Plain => None,
            Style::Type => Some(Color::Green),
            Style::Keyword => Some(Color::Yellow),
            Style::Preprocessor => Some(Color::Cyan),
            Style::String => Some(Color::Magenta),
            Style::Comment => Some(Color::DarkGrey),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub style: Style,
}

impl StyleSpan {
    pub fn new(range: Range<usize>, style: Style) -> Self {
        Self { range, style }
    }
}
