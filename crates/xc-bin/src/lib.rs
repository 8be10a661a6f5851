//! Per-file editing session shared by the `xc` binary and its tests.

pub mod session;

pub use session::{SessionEnd, open_state, run_session};
