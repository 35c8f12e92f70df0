// Copyright 2021, 2022 Martin Pool

//! Options for one run, merged from the command line and the config file.

use crate::config::Config;
use crate::Args;

/// Text written before reading the number, unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "Enter a number: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Written on its own line before reading input.
    pub prompt: String,

    /// Print the computed value before the trailing blank line.
    pub show_result: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            prompt: DEFAULT_PROMPT.to_owned(),
            show_result: false,
        }
    }
}

impl Options {
    /// Build options from arguments and config. Either may turn on `show_result`.
    pub fn new(args: &Args, config: &Config) -> Options {
        Options {
            prompt: config
                .prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_owned()),
            show_result: args.show_result || config.show_result.unwrap_or(false),
        }
    }
}
