#![cfg(feature = "std")]

//! Stderr logger for the binaries. Stdout is reserved for the game itself.
//!
//! `SEA_BATTLE_LOG` picks the level: a name (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`) or a verbosity digit `0`..`5` in the same order.

use std::env;

use log::{LevelFilter, Metadata, Record};

const LOG_ENV: &str = "SEA_BATTLE_LOG";
const VERBOSITY: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.module_path() {
            Some(module) => eprintln!("[{:<5}] {}: {}", record.level(), module, record.args()),
            None => eprintln!("[{:<5}] {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `None` if it names nothing.
fn parse_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    match value.parse::<usize>() {
        Ok(n) => VERBOSITY.get(n).copied(),
        Err(_) => value.parse().ok(),
    }
}

/// Install the stderr logger at the level from `SEA_BATTLE_LOG`, `warn` if
/// unset or unreadable. Later calls keep the first logger.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
