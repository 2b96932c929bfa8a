//! Kobayashi Core Library
//!
//! Content tables, styling configuration, theme-mode types and error
//! handling for the Kobayashi personal site.

pub mod config;
pub mod error;
pub mod profile;
pub mod style;
pub mod theme;

pub use config::Config;
pub use error::{CoreError, Result};
pub use profile::{Category, InlineLink, ProfileSection, ProfileTab, ProjectConfig};
pub use style::{DarkModeStrategy, StyleConfig, TypographyVariant};
pub use theme::{MODE_STORAGE_KEY, ThemeMode};
