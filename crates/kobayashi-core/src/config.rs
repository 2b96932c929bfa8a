//! Site configuration tables and loading.
//!
//! The built-in defaults carry the full site data, so a config file only
//! needs to override the tables it changes.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    profile::{Category, InlineLink, ProfileSection, ProfileTab, ProjectConfig},
    style::StyleConfig,
};

/// Top-level configuration for the site content layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Profile navigation tabs, in display order.
    #[serde(default = "default_tabs")]
    pub tabs: Vec<ProfileTab>,

    /// Essay categories, in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Showcased projects, in display order.
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,

    /// Controlled vocabulary for essay tagging, in display order.
    #[serde(default = "default_essay_tags")]
    pub essay_tags: Vec<String>,

    /// Styling configuration.
    #[serde(default)]
    pub style: StyleConfig,
}

fn default_tabs() -> Vec<ProfileTab> {
    // The categories section keeps its table below but is currently
    // retired from the navigation bar.
    vec![
        ProfileTab::new(ProfileSection::About, "关于我", "/about/"),
        ProfileTab::new(ProfileSection::Essays, "文章", "/essays/"),
        ProfileTab::new(ProfileSection::Projects, "个人项目", "/projects/"),
    ]
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Small Talk", "杂谈", "//"),
        Category::new("Programming", "技术", "//"),
        Category::new("Life", "生活", "//"),
    ]
}

fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig::new(
            "monaco-theme-converter",
            "https://github.com/KamiC6238/monaco-theme-converter",
            "An easy way to use vscode theme in monaco-editor.",
        ),
        ProjectConfig::new(
            "monaco-breakpoints",
            "https://github.com/KamiC6238/monaco-breakpoints",
            "A type-safe library support breakpoints in monaco-editor like vscode.",
        ),
        ProjectConfig::new(
            "vite-plugin-lib-css-injection",
            "https://github.com/KamiC6238/vite-plugin-lib-css-injection",
            "A vite plugin that would inject the css file into your bundled js file.",
        ),
        ProjectConfig::new(
            "babel-infinite-loop-plugin",
            "https://github.com/KamiC6238/infinite-loop-plugin",
            "A Babel plugin for detecting the presence of infinite loop code.",
        ),
        ProjectConfig::new(
            "Blog",
            "https://github.com/KamiC6238/blog",
            "A blog developed using ",
        )
        .with_link(InlineLink::new("https://astro.build/", "Astro")),
    ]
}

fn default_essay_tags() -> Vec<String> {
    vec![
        "Build Tools".to_string(),
        "NodeJS".to_string(),
        "React".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: default_tabs(),
            categories: default_categories(),
            projects: default_projects(),
            essay_tags: default_essay_tags(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("KOBAYASHI").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with an optional file override.
    ///
    /// Falls back to the built-in tables if no file is given or the file
    /// doesn't exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::warn!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Whether a tag is part of the essay vocabulary.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.essay_tags.iter().any(|t| t == tag)
    }

    /// Validate the configuration tables.
    fn validate(&self) -> Result<()> {
        let mut sections = HashSet::new();
        let mut hrefs = HashSet::new();

        for tab in &self.tabs {
            if tab.href.is_empty() {
                return Err(CoreError::config(format!(
                    "tab {} has an empty href",
                    tab.section.label()
                )));
            }
            if !tab.href.starts_with('/') {
                return Err(CoreError::config(format!(
                    "tab href must be site-rooted: {}",
                    tab.href
                )));
            }
            if !sections.insert(tab.section) {
                return Err(CoreError::config(format!(
                    "duplicate tab section: {}",
                    tab.section.label()
                )));
            }
            if !hrefs.insert(tab.href.as_str()) {
                return Err(CoreError::config(format!("duplicate tab href: {}", tab.href)));
            }
        }

        for category in &self.categories {
            if category.category.is_empty() {
                return Err(CoreError::config("category name cannot be empty"));
            }
        }

        for project in &self.projects {
            if project.name.is_empty() {
                return Err(CoreError::config("project name cannot be empty"));
            }
            if project.href.is_empty() {
                return Err(CoreError::config(format!(
                    "project {} has an empty href",
                    project.name
                )));
            }
            if let Some(link) = &project.link {
                if link.content.is_empty() {
                    return Err(CoreError::config(format!(
                        "project {} has an inline link without a label",
                        project.name
                    )));
                }
            }
        }

        // Duplicate tags are allowed and keep display order.
        let mut seen_tags = HashSet::new();
        for tag in &self.essay_tags {
            if !seen_tags.insert(tag.as_str()) {
                tracing::warn!("duplicate essay tag: {tag}");
            }
        }

        let mut variant_names = HashSet::new();
        for variant in &self.style.typography_variants {
            if variant.selector.is_empty() {
                return Err(CoreError::config(format!(
                    "typography variant {} has an empty selector",
                    variant.name
                )));
            }
            if !variant_names.insert(variant.name.as_str()) {
                return Err(CoreError::config(format!(
                    "duplicate typography variant: {}",
                    variant.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
essay_tags = ["Build Tools", "NodeJS", "React"]

[[tabs]]
section = "about"
subtitle = "关于我"
href = "/about/"

[[tabs]]
section = "essays"
subtitle = "文章"
href = "/essays/"

[[categories]]
category = "Programming"
desc = "技术"
href = "//"

[[projects]]
name = "Blog"
href = "https://github.com/KamiC6238/blog"
content = "A blog developed using "
link = { href = "https://astro.build/", content = "Astro" }

[style]
dark_mode = "class"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.tabs[0].display_name(), "ABOUT / 关于我");
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(
            config.projects[0].link.as_ref().map(|l| l.content.as_str()),
            Some("Astro")
        );
        assert_eq!(config.essay_tags, vec!["Build Tools", "NodeJS", "React"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        // Three active tabs; the categories section is retired from the
        // navigation bar while its table survives.
        assert_eq!(config.tabs.len(), 3);
        assert!(
            config
                .tabs
                .iter()
                .all(|t| t.section != ProfileSection::Categories)
        );
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.projects.len(), 5);
        assert_eq!(config.essay_tags, vec!["Build Tools", "NodeJS", "React"]);
    }

    #[test]
    fn test_default_tab_order() {
        let config = Config::default();
        let names: Vec<String> = config.tabs.iter().map(ProfileTab::display_name).collect();
        assert_eq!(
            names,
            vec!["ABOUT / 关于我", "ESSAYS / 文章", "SIDE PROJECTS / 个人项目"]
        );
    }

    #[test]
    fn test_default_blog_project_link() {
        let config = Config::default();
        let blog = config
            .projects
            .iter()
            .find(|p| p.name == "Blog")
            .expect("Blog project");

        let (text, link) = blog.display_segments();
        assert_eq!(text, "A blog developed using ");
        let link = link.expect("inline link");
        assert_eq!(link.href, "https://astro.build/");
        assert_eq!(link.content, "Astro");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "essay_tags = [\"Rust\"]").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.essay_tags, vec!["Rust"]);
        assert_eq!(config.tabs.len(), 3);
        assert_eq!(config.projects.len(), 5);
    }

    #[test]
    fn test_has_tag() {
        let config = Config::default();
        assert!(config.has_tag("React"));
        assert!(!config.has_tag("react"));
        assert!(!config.has_tag("Small Talk"));
    }

    #[test]
    fn test_validation_duplicate_section() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[[tabs]]
section = "about"
subtitle = "关于我"
href = "/about/"

[[tabs]]
section = "about"
subtitle = "about me"
href = "/me/"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("duplicate tab section")
        );
    }

    #[test]
    fn test_validation_relative_href() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[[tabs]]
section = "essays"
subtitle = "文章"
href = "essays/"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("site-rooted"));
    }

    #[test]
    fn test_validation_duplicate_variant() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[style]
typography_variants = [
    { name = "child", selector = "& > *" },
    { name = "child", selector = "& > p" },
]
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("duplicate typography variant")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Some(Path::new("/nonexistent/config.toml")))
            .expect("fall back to defaults");
        assert_eq!(config, Config::default());
    }
}
