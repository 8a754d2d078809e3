//! fib — golden ratio versus naive recursion for the n-th Fibonacci number.

use std::process::ExitCode;

use anyhow::Result;
use fibdemo_lib::{app, config};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = config::Mode::from_env().unwrap_or_else(|e| e.exit());
    app::run(mode)
}
