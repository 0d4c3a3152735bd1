//! Logger bootstrap for the binary.
//!
//! The library only emits through the `log` facade; installing a logger is
//! left to whoever embeds it. The CLI installs `env_logger` writing to stderr.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub const LOG_ENV: &str = "RUST_LOG";

/// Installs the stderr logger.
///
/// `RUST_LOG` wins when set; otherwise `fallback` applies. Calling this more
/// than once keeps the first logger.
pub fn init(fallback: LevelFilter) {
    let env = Env::default().filter_or(LOG_ENV, fallback.as_str());
    let result = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    if result.is_ok() {
        log::debug!("[logging] initialized (fallback level {})", fallback);
    }
}

/// Level to fall back on: `--verbose` forces debug, otherwise the configured level.
pub fn fallback_level(verbose: bool, configured: LevelFilter) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        configured
    }
}
