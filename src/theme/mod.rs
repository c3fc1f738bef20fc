// SPDX-License-Identifier: MPL-2.0
//! Theme modes and appearance resolution.
//!
//! [`ThemeMode`] is the persisted user preference; [`Appearance`] is the
//! binary value the UI actually paints. Resolution is a pure function of the
//! two, so `System` never reaches the presentation layer.

pub mod scheme;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-chosen theme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Binary display appearance, either observed from the OS or resolved from a
/// [`ThemeMode`]. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves this preference against the current system signal.
    ///
    /// An explicit `Light`/`Dark` preference wins over the signal; `System`
    /// follows it.
    #[must_use]
    pub fn resolve(self, signal: Appearance) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => signal,
        }
    }

    /// Returns true if the effective appearance is dark for the given signal.
    #[must_use]
    pub fn is_dark(self, signal: Appearance) -> bool {
        self.resolve(signal) == Appearance::Dark
    }

    /// The literal string form used by preference stores.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(Error::Config(format!("invalid theme mode: {}", other))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Appearance {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
