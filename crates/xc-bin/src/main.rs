//! xc entrypoint.
//!
//! Edits each file named on the command line in turn. Raw mode is held for
//! the whole run; every file gets its own alternate-screen session. A file
//! that cannot be opened is reported on stderr and skipped.

use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_input::{KeyDecoder, TtySource};
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use xc::{SessionEnd, open_state, run_session};

const LOG_FILE: &str = "xc.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "xc", version, about = "Minimal modal terminal text editor")]
struct Args {
    /// Files to edit, one after another.
    pub files: Vec<PathBuf>,
    /// Configuration file path (overrides discovery of `xc.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global subscriber already installed; dropping the guard shuts the writer down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                core_terminal::restore();
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn run(&mut self, args: &Args, config: &Config) -> Result<()> {
        let decoder = KeyDecoder::new(config.escape_timeout());
        let backup = config.backup_path();
        let mut source = TtySource::new();
        self.backend.enter_raw()?;

        for path in &args.files {
            let mut state = match open_state(path, config) {
                Ok(s) => s,
                Err(e) => {
                    warn!(target: "runtime", path = %path.display(), error = %e, "file_skipped");
                    // raw mode: no implicit carriage return
                    eprint!("xc: failed to open {}: {e}\r\n", path.display());
                    continue;
                }
            };

            let guard = self.backend.screen_guard()?;
            let mut out = stdout();
            let end = run_session(
                &mut state,
                &mut source,
                &decoder,
                &mut out,
                &backup,
                || guard.size().ok(),
            )?;
            drop(guard);
            if end == SessionEnd::InputClosed {
                break;
            }
        }

        self.backend.leave_raw()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = AppStartup::new();
    app.configure_logging()?;
    AppStartup::install_panic_hook();

    let config = core_config::load_from(args.config.clone())?;
    info!(
        target: "runtime",
        files = args.files.len(),
        config_override = args.config.is_some(),
        tab_width = config.tab_width(),
        "startup"
    );

    let result = app.run(&args, &config);
    if let Err(e) = &result {
        tracing::error!(target: "runtime", error = %e, "run_failed");
    }
    info!(target: "runtime", "shutdown");
    result
}
