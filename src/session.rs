// Copyright 2021-2023 Martin Pool

//! One run of the program: prompt, read, compute, print.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, trace};

use crate::factorial::factorial;
use crate::input::{parse_number, read_line};
use crate::options::Options;
use crate::Result;

/// Prompt on `output`, read a number from `input`, and compute its factorial.
///
/// Only a blank line follows the input, unless `options.show_result` is set,
/// in which case the value is printed first.
///
/// Errors from reading or parsing are [InputError](crate::input::InputError)s
/// and can be recovered from the returned error with `downcast_ref`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, options: &Options) -> Result<i64> {
    trace!(?options);
    writeln!(output, "{}", options.prompt).context("write prompt")?;
    output.flush().context("flush prompt")?;
    let line = read_line(input)?;
    debug!(?line, "read input");
    let n = parse_number(&line)?;
    debug!(n, "parsed number");
    let result = factorial(n);
    debug!(result, "computed factorial");
    if options.show_result {
        writeln!(output, "{result}").context("write result")?;
    }
    writeln!(output).context("write blank line")?;
    output.flush().context("flush output")?;
    Ok(result)
}
