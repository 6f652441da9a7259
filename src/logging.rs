//! Logger setup for the headless runner
//!
//! The simulation logs run milestones at info, one line per generated
//! pattern at debug and per-entity events (shots, pickups) at trace.
//! Verbosity picks how deep into that the runner goes; dependencies stay
//! at warn unless `RUST_LOG` says otherwise.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level for the crate's own modules at a given `-v` count
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default filter string when `RUST_LOG` is unset
fn default_filter(verbosity: u8) -> String {
    format!("warn,ledge_runner={}", level_for(verbosity))
}

/// Install the global logger. Safe to call more than once.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(default_filter(verbosity));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // Fails only when a logger is already installed
    let _ = builder.try_init();
}
