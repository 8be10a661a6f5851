//! Terminal backend abstraction and crossterm implementation.
//!
//! Two nested scopes: raw mode spans the whole run, and each edited file gets
//! its own alternate-screen session inside it. Both are restored on drop, so
//! an early return or a panic unwinding through the session leaves the user's
//! terminal usable.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter_raw(&mut self) -> Result<()>;
    fn leave_raw(&mut self) -> Result<()>;
    fn enter_screen(&mut self) -> Result<()>;
    fn leave_screen(&mut self) -> Result<()>;
    /// Current size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

#[derive(Debug, Default)]
pub struct CrosstermBackend {
    raw: bool,
    screen: bool,
}

/// Alternate-screen session; leaves the screen on drop.
pub struct ScreenGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            raw: false,
            screen: false,
        }
    }

    /// Enter the alternate screen and return a guard that leaves it on drop.
    pub fn screen_guard(&mut self) -> Result<ScreenGuard<'_>> {
        self.enter_screen()?;
        Ok(ScreenGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter_raw(&mut self) -> Result<()> {
        if !self.raw {
            enable_raw_mode()?;
            self.raw = true;
            tracing::debug!(target: "runtime", "raw_mode_enabled");
        }
        Ok(())
    }

    fn leave_raw(&mut self) -> Result<()> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
            tracing::debug!(target: "runtime", "raw_mode_disabled");
        }
        Ok(())
    }

    fn enter_screen(&mut self) -> Result<()> {
        if !self.screen {
            execute!(stdout(), EnterAlternateScreen, Clear(ClearType::All), Hide)?;
            self.screen = true;
        }
        Ok(())
    }

    fn leave_screen(&mut self) -> Result<()> {
        if self.screen {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            self.screen = false;
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave_screen();
        let _ = self.leave_raw();
    }
}

impl ScreenGuard<'_> {
    pub fn size(&self) -> Result<(u16, u16)> {
        self.backend.size()
    }
}

impl Drop for ScreenGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave_screen();
    }
}

/// Best-effort restore for panic hooks, where the backend is out of reach.
pub fn restore() {
    let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}
