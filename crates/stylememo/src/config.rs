//! Memoizer configuration
//!
//! The host decides whether memoization is active. Loading the setting from
//! a file or environment is the host's job; this module only models it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How aggressively styleguide lookups are memoized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ModeRepr", into = "String")]
pub enum MemoizeMode {
    /// Never store results
    Off,
    /// Store results
    #[default]
    On,
    /// Store results; hosts may also memoize derived lookups
    Aggressive,
}

impl MemoizeMode {
    /// Whether `add` should store values under this mode
    pub fn is_enabled(self) -> bool {
        !matches!(self, MemoizeMode::Off)
    }

    fn as_str(self) -> &'static str {
        match self {
            MemoizeMode::Off => "off",
            MemoizeMode::On => "on",
            MemoizeMode::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for MemoizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoizeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "false" | "none" => Ok(MemoizeMode::Off),
            "on" | "true" => Ok(MemoizeMode::On),
            "aggressive" => Ok(MemoizeMode::Aggressive),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl From<bool> for MemoizeMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            MemoizeMode::On
        } else {
            MemoizeMode::Off
        }
    }
}

impl From<MemoizeMode> for String {
    fn from(mode: MemoizeMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Hosts write either `memoize = true` or `memoize = "aggressive"`
#[derive(Deserialize)]
#[serde(untagged)]
enum ModeRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<ModeRepr> for MemoizeMode {
    type Error = Error;

    fn try_from(repr: ModeRepr) -> Result<Self> {
        match repr {
            ModeRepr::Flag(enabled) => Ok(enabled.into()),
            ModeRepr::Name(name) => name.parse(),
        }
    }
}

/// Memoizer settings as embedded in a host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoizeConfig {
    /// Memoization mode
    pub memoize: MemoizeMode,
}

impl MemoizeConfig {
    /// Config with the given mode
    pub fn new(memoize: MemoizeMode) -> Self {
        Self { memoize }
    }
}
