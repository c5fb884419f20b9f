//! Diagnostic logging setup.
//!
//! Logs go to stderr so that generated markdown on stdout can be piped or
//! redirected cleanly. `CAMPGEN_LOG` takes an `EnvFilter` directive and wins
//! over the `-v` flag.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "CAMPGEN_LOG";

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "campgen=info",
        _ => "campgen=debug",
    }
}

/// Install the global subscriber. A second call reports the failure and
/// leaves the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("Failed to initialize logging: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "campgen=info");
        assert_eq!(default_directive(5), "campgen=debug");
    }
}
