// Copyright 2021 - 2025 Martin Pool

//! Read and parse the number from the input stream.

use std::fmt;
use std::io::{self, BufRead};

use crate::exit_code;

/// Reasons the input could not produce a number.
#[derive(Debug)]
pub enum InputError {
    /// The stream ended before a line was read.
    EndOfInput,
    /// The underlying reader failed.
    Read(io::Error),
    /// The line is not a base-10 `i32` literal.
    InvalidNumber { text: String },
}

impl InputError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::EndOfInput => exit_code::END_OF_INPUT,
            InputError::Read(_) => exit_code::READ_FAILED,
            InputError::InvalidNumber { .. } => exit_code::INVALID_NUMBER,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::EndOfInput => write!(f, "end of input before a number was read"),
            InputError::Read(_) => write!(f, "failed to read input"),
            InputError::InvalidNumber { text } => write!(f, "invalid number format: {text:?}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Read(err) => Some(err),
            _ => None,
        }
    }
}

/// Read one line, without its `\n` or `\r\n` terminator.
///
/// A last line with no terminator is still returned. Bytes that are not
/// valid UTF-8 become U+FFFD, so the line then fails to parse as a number.
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String, InputError> {
    let mut buf = Vec::new();
    let len = reader
        .read_until(b'\n', &mut buf)
        .map_err(InputError::Read)?;
    if len == 0 {
        return Err(InputError::EndOfInput);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Parse a base-10 integer with an optional sign. Whitespace is not allowed.
pub fn parse_number(text: &str) -> Result<i32, InputError> {
    text.parse().map_err(|_| InputError::InvalidNumber {
        text: text.to_owned(),
    })
}
