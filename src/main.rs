//! JsonSweep — interactive recursive `.json` file sweeper.
//!
//! Thin binary entry point. All logic lives in the `jsonsweep-core`
//! and `jsonsweep-cli` crates.

use std::io;

fn main() -> anyhow::Result<()> {
    // Structured logging goes to stderr: stdout carries the prompt
    // dialogue and the per-deletion lines.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    jsonsweep_cli::run_session(&mut input, &mut output)
}
