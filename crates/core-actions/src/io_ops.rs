//! File IO for buffers.
//!
//! Synchronous and whole-file: a file is read in one go at open and written
//! in one go at save. Content is raw bytes; nothing is normalized.

use core_state::EditorState;
use core_text::Buffer;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("short read on {}: expected {expected} bytes, got {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: usize,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IoError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::ShortRead { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// Open `path` into a new `Buffer`, creating an empty file when it does not
/// exist. The number of bytes read must match the size reported by metadata.
pub fn open_file(path: &Path) -> Result<Buffer, IoError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            File::create(path).map_err(|source| {
                tracing::error!(target: "io", path = %path.display(), ?source, "file_create_error");
                IoError::Open {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            tracing::info!(target: "io", path = %path.display(), "file_created");
            return Ok(Buffer::new());
        }
        Err(source) => {
            tracing::error!(target: "io", path = %path.display(), ?source, "file_open_error");
            return Err(IoError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let read_err = |source: io::Error| {
        tracing::error!(target: "io", path = %path.display(), ?source, "file_read_error");
        IoError::Read {
            path: path.to_path_buf(),
            source,
        }
    };
    let expected = file.metadata().map_err(read_err)?.len();
    let mut raw = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    file.read_to_end(&mut raw).map_err(read_err)?;
    if raw.len() as u64 != expected {
        tracing::error!(target: "io", path = %path.display(), expected, actual = raw.len(), "file_short_read");
        return Err(IoError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual: raw.len(),
        });
    }

    let buffer = Buffer::load(&raw);
    tracing::info!(target: "io", path = %path.display(), bytes = raw.len(), lines = buffer.line_count(), "file_opened");
    Ok(buffer)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let write_err = |source: io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    file.flush().map_err(write_err)
}

/// Save the buffer to its own file. Clears `dirty` on success and returns the
/// number of bytes written; on failure the state is left untouched.
pub fn write_file(state: &mut EditorState) -> Result<usize, IoError> {
    let bytes = state.buffer.serialize();
    if let Err(e) = write_bytes(&state.file_name, &bytes) {
        tracing::error!(target: "io", error = %e, "file_write_error");
        return Err(e);
    }
    state.dirty = false;
    tracing::info!(target: "io", path = %state.file_name.display(), bytes = bytes.len(), lines = state.buffer.line_count(), "file_written");
    Ok(bytes.len())
}

/// Write `buffer` to the autosave path. The path is used verbatim.
pub fn write_backup(buffer: &Buffer, path: &Path) -> Result<usize, IoError> {
    let bytes = buffer.serialize();
    write_bytes(path, &bytes)?;
    tracing::debug!(target: "io", path = %path.display(), bytes = bytes.len(), "backup_written");
    Ok(bytes.len())
}
