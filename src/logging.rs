//! Logging configuration and initialization
//!
//! The library itself only emits `tracing` events. Applications and tests
//! that want to see them can install a subscriber through this module.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Subscriber settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// 0 = info, 1 = debug, 2 and above = trace
    pub verbose: u8,
}

impl LogConfig {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()))
    }
}

/// Install a global fmt subscriber
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging(config: &LogConfig) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.verbose >= 2)
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized with verbosity level: {}", config.verbose);
    }
    installed
}

/// Install a subscriber that writes through the test harness capture
pub fn init_test_logging() -> bool {
    let config = LogConfig::new(2);
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
