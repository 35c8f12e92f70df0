// Copyright 2021-2023 Martin Pool

//! `factorial`: Read a number from stdin and compute its factorial.

mod config;
mod console;
mod exit_code;
mod factorial;
mod input;
mod options;
mod session;

use std::io;
use std::process::exit;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{generate, Shell};
use tracing::debug;

// Imports of public names from this crate.
use crate::config::Config;
use crate::input::InputError;
use crate::options::Options;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Read a number from stdin and compute its factorial.
///
/// Only a blank line is printed after the number is read, unless
/// `--show-result` is given.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "factorial", author, about)]
pub struct Args {
    /// read options from this TOML file.
    #[arg(long, short = 'c', env = "FACTORIAL_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(
        long,
        short = 'L',
        default_value = "warn",
        env = "FACTORIAL_TRACE_LEVEL"
    )]
    level: tracing::Level,

    /// don't read any config file, even if one is named.
    #[arg(long)]
    no_config: bool,

    /// print the computed factorial before the blank line.
    #[arg(long, short = 's')]
    show_result: bool,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Clap's own help and version output is not an error.
            let code = if e.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            };
            e.print().ok();
            exit(code);
        }
    };
    console::setup_global_trace(args.level)?;

    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    } else if let Some(shell) = args.completions {
        generate(shell, &mut Args::command(), NAME, &mut io::stdout());
        return Ok(());
    }

    let config = if args.no_config {
        Config::default()
    } else {
        Config::read_optional(args.config.as_deref())?
    };
    debug!(?config);
    let options = Options::new(&args, &config);

    if let Err(err) = session::run(io::stdin().lock(), io::stdout().lock(), &options) {
        if let Some(input_err) = err.downcast_ref::<InputError>() {
            eprintln!("Error: {err:#}");
            exit(input_err.exit_code());
        }
        return Err(err);
    }
    Ok(())
}
