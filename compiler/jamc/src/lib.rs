//! The Jam driver.
//!
//! The binary in `main.rs` only dispatches on the command name. Everything
//! testable lives here:
//!
//! - [`pipeline`]: lex, parse, check and evaluate a source string, returning
//!   text or a [`Problem`]. Nothing in it touches stdout or the process.
//! - [`options`]: the `--args=`/`--lists=` family of flags.
//! - [`commands`]: one function per subcommand, which read the file, call
//!   into the pipeline, print, and exit non-zero on failure.

pub mod commands;
pub mod options;
pub mod pipeline;
pub mod problem;

use std::sync::Once;

pub use options::{parse_run_args, OptionError, RunOptions};
pub use problem::Problem;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// The filter is taken from `RUST_LOG`, e.g. `RUST_LOG=jam_eval=trace`.
/// With `JAM_LOG_TREE=1` the output is indented by span nesting instead of
/// one flat line per event. Logs always go to stderr.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("JAM_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
