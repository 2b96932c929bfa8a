//! Theme mode domain type and its persistence key.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Storage key under which the chosen theme mode is persisted.
pub const MODE_STORAGE_KEY: &str = "KOBAYASHI_MODE";

/// Display mode, reflected as a class token on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark color scheme (`dark` class token).
    Dark,
    /// Light color scheme (`light` class token).
    Light,
}

impl ThemeMode {
    /// Determine the mode from a stored or DOM class token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Get the class token for this mode.
    pub fn class_token(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other mode.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_token())
    }
}

impl FromStr for ThemeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| CoreError::config(format!("unrecognized theme mode: {s}")))
    }
}
