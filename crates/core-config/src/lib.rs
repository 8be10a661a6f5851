//! Configuration loading and parsing.
//!
//! Parses `xc.toml` (or an override path provided by the binary). Every field
//! has a default so a missing file, a missing section or an unreadable file all
//! yield a usable `Config`. Unknown fields are ignored (TOML deserialization
//! tolerance). A parse error falls back to defaults and is logged under the
//! `config` target rather than aborting startup.
//!
//! Recognized settings:
//! * `[editor] tab_width` - flat width of a tab byte, clamped to `1..=16`.
//! * `[input] escape_timeout_ms` - wait for the rest of an escape sequence,
//!   clamped to `1..=1000`.
//! * `[backup] path` - autosave target written when leaving Insert mode. Used
//!   as a literal path: `~` is NOT expanded.
//! * `[syntax] extensions` - file extensions that get C highlighting.

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const TAB_WIDTH_RANGE: (usize, usize) = (1, 16);
pub const ESCAPE_TIMEOUT_RANGE_MS: (u64, u64) = (1, 1000);

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        4
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_escape_timeout_ms")]
    pub escape_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            escape_timeout_ms: Self::default_escape_timeout_ms(),
        }
    }
}

impl InputConfig {
    const fn default_escape_timeout_ms() -> u64 {
        20
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    #[serde(default = "BackupConfig::default_path")]
    pub path: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl BackupConfig {
    fn default_path() -> String {
        "~/.xcbackup".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    #[serde(default = "SyntaxConfig::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            extensions: Self::default_extensions(),
        }
    }
}

impl SyntaxConfig {
    fn default_extensions() -> Vec<String> {
        vec!["c".to_string(), "h".to_string()]
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub syntax: SyntaxConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Config path discovery: `./xc.toml` first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("xc.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("xc").join("xc.toml");
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
        }),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_error");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Effective tab width, clamped into `TAB_WIDTH_RANGE`.
    pub fn tab_width(&self) -> usize {
        let raw = self.file.editor.tab_width;
        let clamped = raw.clamp(TAB_WIDTH_RANGE.0, TAB_WIDTH_RANGE.1);
        if clamped != raw {
            info!(target: "config", raw, clamped, "tab_width_clamped");
        }
        clamped
    }

    /// Effective escape sequence timeout, clamped into `ESCAPE_TIMEOUT_RANGE_MS`.
    pub fn escape_timeout(&self) -> Duration {
        let raw = self.file.input.escape_timeout_ms;
        let clamped = raw.clamp(ESCAPE_TIMEOUT_RANGE_MS.0, ESCAPE_TIMEOUT_RANGE_MS.1);
        if clamped != raw {
            info!(target: "config", raw, clamped, "escape_timeout_clamped");
        }
        Duration::from_millis(clamped)
    }

    /// Autosave target taken verbatim from the config string.
    pub fn backup_path(&self) -> PathBuf {
        PathBuf::from(&self.file.backup.path)
    }

    /// Whether `path` should get syntax highlighting, by exact extension match.
    pub fn highlights(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.file.syntax.extensions.iter().any(|x| x == ext))
    }
}
