//! Single line byte store.
//!
//! A `Line` owns the content bytes between two line feeds. It never contains a
//! `\n` byte; any other byte (including `\r`) is stored verbatim.
//!
//! Invariants:
//! * `capacity() >= len() + 1` after every public call (room for a terminator
//!   sentinel even though Rust storage never writes one).
//! * Growth doubles capacity once `len + 2 >= capacity`, giving amortized O(1)
//!   appends; the shift for a mid-line insert stays O(n).
//!
//! Offsets are byte offsets. Out-of-range requests are rejected without
//! mutating the line so callers that clamp lazily cannot corrupt content.

/// Headroom allocated past the content length for freshly created lines.
pub const LINE_HEADROOM: usize = 32;

#[derive(Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    pub fn new() -> Self {
        Self::from_bytes(&[])
    }

    /// Build a line holding a copy of `content` (caller guarantees no `\n`).
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len() + LINE_HEADROOM);
        bytes.extend_from_slice(content);
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Insert `byte` at `offset`, shifting the tail right by one.
    /// Returns `false` (no-op) when `offset > len()`.
    pub fn insert(&mut self, offset: usize, byte: u8) -> bool {
        if offset > self.bytes.len() {
            return false;
        }
        if self.bytes.len() + 2 >= self.bytes.capacity() {
            let doubled = self.bytes.capacity().max(1) * 2;
            self.bytes.reserve_exact(doubled - self.bytes.len());
        }
        self.bytes.insert(offset, byte);
        true
    }

    /// Remove the byte immediately before `offset` (backspace semantics).
    /// Returns the removed byte, or `None` when `offset == 0 || offset > len()`.
    pub fn delete_before(&mut self, offset: usize) -> Option<u8> {
        if offset == 0 || offset > self.bytes.len() {
            return None;
        }
        Some(self.bytes.remove(offset - 1))
    }

    /// Split at `offset`: `self` keeps `[0, offset)`, the returned line holds
    /// `[offset, len)`. Returns `None` when `offset > len()`.
    pub fn split(&mut self, offset: usize) -> Option<Line> {
        if offset > self.bytes.len() {
            return None;
        }
        let tail = Line::from_bytes(&self.bytes[offset..]);
        self.bytes.truncate(offset);
        Some(tail)
    }

    /// Append `other`'s content to the end of this line, consuming `other`.
    pub fn merge(&mut self, other: Line) {
        let needed = self.bytes.len() + other.bytes.len() + 1;
        if needed > self.bytes.capacity() {
            self.bytes
                .reserve_exact(needed + LINE_HEADROOM - self.bytes.len());
        }
        self.bytes.extend_from_slice(&other.bytes);
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Line")
            .field("text", &String::from_utf8_lossy(&self.bytes))
            .field("len", &self.bytes.len())
            .field("cap", &self.bytes.capacity())
            .finish()
    }
}
