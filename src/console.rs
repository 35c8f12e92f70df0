// Copyright 2021-2023 Martin Pool

//! Diagnostic output on the terminal.
//!
//! Standard output carries only the prompt and the result, so all trace
//! output goes to stderr.

use std::io;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::Result;

/// Install the global tracing subscriber, writing events at `level` or
/// above to stderr.
pub fn setup_global_trace(level: Level) -> Result<()> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(::console::colors_enabled_stderr())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::from_level(level));
    tracing_subscriber::registry().with(console_layer).try_init()?;
    Ok(())
}
