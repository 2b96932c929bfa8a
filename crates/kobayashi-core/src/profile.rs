//! Profile page data model: navigation tabs, categories and project cards.

use serde::{Deserialize, Serialize};

/// Section of the profile page a navigation tab points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSection {
    /// About/bio section.
    About,
    /// Essay category index.
    Categories,
    /// Essay listing.
    Essays,
    /// Side project showcase.
    Projects,
}

impl ProfileSection {
    /// Upper-case label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "ABOUT",
            Self::Categories => "CATEGORIES",
            Self::Essays => "ESSAYS",
            Self::Projects => "SIDE PROJECTS",
        }
    }
}

/// A navigation entry on the profile header. Table order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTab {
    /// Section this tab links to.
    pub section: ProfileSection,

    /// Localized subtitle shown after the section label.
    pub subtitle: String,

    /// Link target, rooted at the site origin.
    pub href: String,
}

impl ProfileTab {
    /// Create a new navigation tab.
    pub fn new(section: ProfileSection, subtitle: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            section,
            subtitle: subtitle.into(),
            href: href.into(),
        }
    }

    /// Full display name, `"<LABEL> / <subtitle>"` (e.g. `"ABOUT / 关于我"`).
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.section.label(), self.subtitle)
    }
}

/// A descriptive essay category.
///
/// The `href` is a placeholder until category pages are linked anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub category: String,

    /// Localized description.
    pub desc: String,

    /// Link target placeholder.
    pub href: String,
}

impl Category {
    /// Create a new category entry.
    pub fn new(
        category: impl Into<String>,
        desc: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            desc: desc.into(),
            href: href.into(),
        }
    }
}

/// Inline hyperlink fragment embedded in a project description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineLink {
    /// Link target.
    pub href: String,

    /// Link label.
    pub content: String,
}

impl InlineLink {
    /// Create a new inline link.
    pub fn new(href: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            content: content.into(),
        }
    }
}

/// One showcased project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,

    /// Repository or project home URL.
    pub href: String,

    /// Description text. When `link` is set, the link renders directly
    /// after this text.
    pub content: String,

    /// Optional inline hyperlink appended to the description.
    #[serde(default)]
    pub link: Option<InlineLink>,
}

impl ProjectConfig {
    /// Create a new project card.
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            content: content.into(),
            link: None,
        }
    }

    /// Append an inline link to the description.
    pub fn with_link(mut self, link: InlineLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Description as text followed by the optional inline link, in
    /// render order.
    pub fn display_segments(&self) -> (&str, Option<&InlineLink>) {
        (&self.content, self.link.as_ref())
    }
}
