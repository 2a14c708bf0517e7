//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides `-v`.
pub const LOG_ENV: &str = "GHICLI_LOG";

/// Maps the `-v` count to a default level.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs a stderr subscriber so stdout carries only command output.
///
/// `GHICLI_LOG` takes precedence over the verbosity flag. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(5), Level::DEBUG);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
