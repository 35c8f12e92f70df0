// Copyright 2022-2024 Martin Pool.

//! Optional TOML configuration file.
//!
//! The config file is read after parsing command line arguments, because
//! they determine its location. It is then merged in to the [Options].
//!
//! [Options]: crate::options::Options

use std::default::Default;
use std::fs::read_to_string;

use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;

use crate::Result;

/// Configuration read from a config file.
///
/// This is similar to [Options](crate::options::Options), and eventually
/// merged into it, but separate because it can be deserialized.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text written before reading the number.
    pub prompt: Option<String>,
    /// Print the computed factorial.
    pub show_result: Option<bool>,
}

impl Config {
    pub fn read_file(path: &Utf8Path) -> Result<Config> {
        let toml = read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        toml::de::from_str(&toml).with_context(|| format!("parse toml from {path:?}"))
    }

    /// Read the config from `path` if one was given, or return the defaults.
    pub fn read_optional(path: Option<&Utf8Path>) -> Result<Config> {
        match path {
            Some(path) => Config::read_file(path),
            None => Ok(Config::default()),
        }
    }
}
