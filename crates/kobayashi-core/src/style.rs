//! Styling configuration for class-based dark mode switching.
//!
//! Consumed by the styling pipeline, not by this crate: the theme utilities
//! only flip the class tokens this configuration keys off.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the styling pipeline decides which color scheme applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Switch on a `dark` class on the document root.
    #[default]
    Class,
    /// Follow the `prefers-color-scheme` media query.
    Media,
}

/// A custom typography variant mapped to a CSS selector fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyVariant {
    /// Variant name usable in utility classes.
    pub name: String,

    /// Selector fragment the variant expands to.
    pub selector: String,
}

impl TypographyVariant {
    /// Create a new typography variant.
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
        }
    }
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Dark mode switching strategy.
    #[serde(default)]
    pub dark_mode: DarkModeStrategy,

    /// Source globs scanned for utility classes.
    #[serde(default = "default_content_globs")]
    pub content: Vec<String>,

    /// Custom typography variants.
    #[serde(default = "default_typography_variants")]
    pub typography_variants: Vec<TypographyVariant>,
}

fn default_content_globs() -> Vec<String> {
    vec!["./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}".to_string()]
}

fn default_typography_variants() -> Vec<TypographyVariant> {
    vec![
        TypographyVariant::new("child", "& > *"),
        TypographyVariant::new("child-p", "& > p"),
        TypographyVariant::new("nlc", "& > *:not(:last-child)"),
        TypographyVariant::new("after", "&:after"),
    ]
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dark_mode: DarkModeStrategy::Class,
            content: default_content_globs(),
            typography_variants: default_typography_variants(),
        }
    }
}

impl StyleConfig {
    /// Look up the selector fragment for a variant name.
    pub fn variant_selector(&self, name: &str) -> Option<&str> {
        self.typography_variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.selector.as_str())
    }

    /// Serialize for the styling pipeline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
