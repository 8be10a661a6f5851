//! Per-line C-ish syntax highlighter.
//!
//! A left-to-right tokenizer driven by a four-state machine. State never
//! crosses a line boundary: every call starts in `HlState::Default`, so block
//! comments and multi-line strings are intentionally not recognized.
//!
//! In `Default`, at byte `c` with previous byte `p` and next byte `n`:
//! 1. `"` not preceded by `\` or `'` opens a string.
//! 2. `#` not followed by `'` switches to preprocessor for the rest of the line.
//! 3. `//` switches to comment for the rest of the line.
//! 4. a delimiter, or the last byte of the line, flushes the pending token and
//!    is itself emitted unstyled.
//! 5. anything else extends the pending token.
//!
//! Tabs also end the pending token (spans are contiguous byte ranges).
//! Flushed tokens are classified against the type, keyword and directive sets
//! in that order. The output spans cover the whole line with no gaps and
//! adjacent spans of equal style merged.

use crate::style::{Style, StyleSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HlState {
    #[default]
    Default,
    String,
    Comment,
    Preprocessor,
}

// Sorted for binary search (byte order).
pub static TYPES: &[&str] = &[
    "_Bool", "bool", "char", "const", "double", "float", "int", "int16_t", "int32_t", "int64_t",
    "int8_t", "long", "short", "signed", "size_t", "static", "uint16_t", "uint32_t", "uint64_t",
    "uint8_t", "unsigned", "void",
];

pub static KEYWORDS: &[&str] = &[
    "auto", "break", "case", "continue", "default", "do", "else", "enum", "extern", "false", "for",
    "goto", "if", "inline", "register", "return", "sizeof", "struct", "switch", "true", "typedef",
    "volatile", "while",
];

pub static DIRECTIVES: &[&str] = &[
    "#define", "#error", "#if", "#ifdef", "#ifndef", "#include", "#pragma", "#undef",
];

pub fn is_delim(c: u8) -> bool {
    matches!(
        c,
        b' ' | b'('
            | b')'
            | b';'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b'/'
            | b'%'
            | b'='
            | b'!'
            | b'<'
            | b'>'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b':'
            | b'*'
            | b'\''
            | b'"'
    )
}

/// Style for a complete token: type, then keyword, then directive.
pub fn classify(token: &[u8]) -> Style {
    let Ok(token) = std::str::from_utf8(token) else {
        return Style::Plain;
    };
    if TYPES.binary_search(&token).is_ok() {
        Style::Type
    } else if KEYWORDS.binary_search(&token).is_ok() {
        Style::Keyword
    } else if DIRECTIVES.binary_search(&token).is_ok() {
        Style::Preprocessor
    } else {
        Style::Plain
    }
}

#[derive(Default)]
struct SpanSink {
    spans: Vec<StyleSpan>,
}

impl SpanSink {
    fn push(&mut self, start: usize, end: usize, style: Style) {
        if start >= end {
            return;
        }
        if let Some(last) = self.spans.last_mut()
            && last.style == style
            && last.range.end == start
        {
            last.range.end = end;
            return;
        }
        self.spans.push(StyleSpan::new(start..end, style));
    }
}

/// Tokenizer walking one line.
struct Tokenizer<'a> {
    line: &'a [u8],
    state: HlState,
    token_start: Option<usize>,
    sink: SpanSink,
}

impl<'a> Tokenizer<'a> {
    fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            state: HlState::Default,
            token_start: None,
            sink: SpanSink::default(),
        }
    }

    fn flush_token(&mut self, end: usize) {
        if let Some(start) = self.token_start.take() {
            let style = classify(&self.line[start..end]);
            self.sink.push(start, end, style);
        }
    }

    fn run(mut self) -> Vec<StyleSpan> {
        let len = self.line.len();
        let mut i = 0;
        while i < len {
            let c = self.line[i];
            let p = if i > 0 { Some(self.line[i - 1]) } else { None };
            let n = self.line.get(i + 1).copied();
            match self.state {
                HlState::Default => {
                    if c == b'\t' {
                        self.flush_token(i);
                        self.sink.push(i, i + 1, Style::Plain);
                    } else if c == b'"' && p != Some(b'\\') && p != Some(b'\'') {
                        self.flush_token(i);
                        self.state = HlState::String;
                        self.sink.push(i, i + 1, Style::String);
                    } else if c == b'#' && n != Some(b'\'') {
                        self.flush_token(i);
                        self.state = HlState::Preprocessor;
                        self.sink.push(i, i + 1, Style::Preprocessor);
                    } else if c == b'/' && n == Some(b'/') {
                        self.flush_token(i);
                        self.state = HlState::Comment;
                        self.sink.push(i, i + 2, Style::Comment);
                        i += 2;
                        continue;
                    } else if is_delim(c) || n.is_none() {
                        self.flush_token(i);
                        self.sink.push(i, i + 1, Style::Plain);
                    } else if self.token_start.is_none() {
                        self.token_start = Some(i);
                    }
                }
                HlState::String => {
                    self.sink.push(i, i + 1, Style::String);
                    if c == b'"' && p != Some(b'\\') {
                        self.state = HlState::Default;
                    }
                }
                HlState::Comment => self.sink.push(i, i + 1, Style::Comment),
                HlState::Preprocessor => self.sink.push(i, i + 1, Style::Preprocessor),
            }
            i += 1;
        }
        self.flush_token(len);
        self.sink.spans
    }
}

/// Highlight one line's bytes (no terminator) into contiguous styled spans.
pub fn highlight_line(line: &[u8]) -> Vec<StyleSpan> {
    Tokenizer::new(line).run()
}

/// Single unstyled span covering the line, used when highlighting is off.
pub fn plain_line(line: &[u8]) -> Vec<StyleSpan> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![StyleSpan::new(0..line.len(), Style::Plain)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style_at(spans: &[StyleSpan], byte: usize) -> Style {
        spans
            .iter()
            .find(|s| s.range.contains(&byte))
            .map(|s| s.style)
            .expect("byte covered by a span")
    }

    fn assert_covers(spans: &[StyleSpan], len: usize) {
        let mut next = 0;
        for s in spans {
            assert_eq!(s.range.start, next, "gap or overlap in {spans:?}");
            next = s.range.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn tables_are_sorted() {
        for table in [TYPES, KEYWORDS, DIRECTIVES] {
            assert!(table.windows(2).all(|w| w[0] < w[1]), "{table:?}");
        }
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(classify(b"int"), Style::Type);
        assert_eq!(classify(b"static"), Style::Type);
        assert_eq!(classify(b"return"), Style::Keyword);
        assert_eq!(classify(b"#include"), Style::Preprocessor);
        assert_eq!(classify(b"main"), Style::Plain);
        assert_eq!(classify(b"Int"), Style::Plain);
    }

    #[test]
    fn include_line_is_all_preprocessor() {
        let line = b"#include <a.h>";
        let spans = highlight_line(line);
        assert_eq!(
            spans,
            vec![StyleSpan::new(0..line.len(), Style::Preprocessor)]
        );
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        let line = br#""ab\"cd""#;
        let spans = highlight_line(line);
        assert_eq!(spans, vec![StyleSpan::new(0..line.len(), Style::String)]);
    }

    #[test]
    fn string_returns_to_default_after_closing_quote() {
        let line = br#""ab\"cd" int;"#;
        let spans = highlight_line(line);
        assert_covers(&spans, line.len());
        assert_eq!(style_at(&spans, 7), Style::String);
        assert_eq!(style_at(&spans, 8), Style::Plain);
        assert_eq!(style_at(&spans, 9), Style::Type);
        assert_eq!(style_at(&spans, 12), Style::Plain);
    }

    #[test]
    fn type_identifier_and_comment() {
        let line = b"int x; // note";
        let spans = highlight_line(line);
        assert_covers(&spans, line.len());
        assert_eq!(
            spans,
            vec![
                StyleSpan::new(0..3, Style::Type),
                StyleSpan::new(3..7, Style::Plain),
                StyleSpan::new(7..14, Style::Comment),
            ]
        );
    }

    #[test]
    fn preprocessor_never_exits_within_line() {
        let line = b"#define X 1 // \"str\"";
        let spans = highlight_line(line);
        assert_eq!(
            spans,
            vec![StyleSpan::new(0..line.len(), Style::Preprocessor)]
        );
    }

    #[test]
    fn hash_before_quote_is_not_preprocessor() {
        let line = b"x = '#';";
        let spans = highlight_line(line);
        assert_covers(&spans, line.len());
        assert!(spans.iter().all(|s| s.style == Style::Plain));
    }

    #[test]
    fn quote_after_apostrophe_does_not_open_string() {
        let line = b"c = '\"';";
        let spans = highlight_line(line);
        assert_covers(&spans, line.len());
        assert!(spans.iter().all(|s| s.style == Style::Plain));
    }

    #[test]
    fn last_byte_is_emitted_on_its_own() {
        // the final byte is flushed separately, so a trailing keyword is split
        let spans = highlight_line(b"return");
        assert_eq!(spans, vec![StyleSpan::new(0..6, Style::Plain)]);
        let spans = highlight_line(b"return;");
        assert_eq!(style_at(&spans, 0), Style::Keyword);
        assert_eq!(style_at(&spans, 6), Style::Plain);
    }

    #[test]
    fn tab_ends_token() {
        let line = b"\tint\tx;";
        let spans = highlight_line(line);
        assert_covers(&spans, line.len());
        assert_eq!(style_at(&spans, 0), Style::Plain);
        assert_eq!(style_at(&spans, 1), Style::Type);
        assert_eq!(style_at(&spans, 4), Style::Plain);
    }

    #[test]
    fn state_does_not_carry_between_lines() {
        let open = highlight_line(b"s = \"unterminated");
        assert_eq!(open.last().unwrap().style, Style::String);
        let next = highlight_line(b"while (1);");
        assert_eq!(next[0], StyleSpan::new(0..5, Style::Keyword));
    }

    #[test]
    fn empty_and_plain_lines() {
        assert!(highlight_line(b"").is_empty());
        assert!(plain_line(b"").is_empty());
        assert_eq!(
            plain_line(b"int x;"),
            vec![StyleSpan::new(0..6, Style::Plain)]
        );
    }
}
