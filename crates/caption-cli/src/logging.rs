//! Diagnostics for the `caption` binary.
//!
//! Rendered captions go to stdout; everything logged here goes to stderr so
//! the two can be piped separately. Handler faults are logged at `warn`, so
//! they show up without any `-v`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log targets of the caption crates.
const TARGETS: [&str; 4] = [
    "caption",
    "caption_calendar",
    "caption_cli",
    "caption_tokenizer",
];

/// Level selected by the number of `-v` flags.
fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `caption=<level>,caption_calendar=<level>,...`
fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber. A set `RUST_LOG` replaces the `-v` level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
