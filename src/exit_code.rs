// Copyright 2021 - 2025 Martin Pool

//! Exit codes from factorial.
//!
//! These are assigned so that the different ways a run can fail are
//! distinct to scripts and to the test suite.

/// The number was read and its factorial computed.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, a bad config file, etc.
///
/// Clap's usage errors are mapped to this code, which is also what `main`
/// returning an error gives.
pub const USAGE: i32 = 1;

/// Standard input was closed before a line could be read.
pub const END_OF_INPUT: i32 = 2;

/// The line read was not a valid integer.
pub const INVALID_NUMBER: i32 = 3;

/// Reading standard input failed.
pub const READ_FAILED: i32 = 4;
