//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    /// Page heading shown above the two sections
    pub heading: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Content categories, rendered in listed order
    pub categories: Vec<CategoryConfig>,

    /// When true, a post missing a required front-matter field fails the
    /// whole load instead of being skipped with a warning
    pub strict_front_matter: bool,

    // Navigation items handed to the nav partial
    pub nav: Vec<NavItem>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Publications".to_string(),
            author: String::new(),
            heading: "Writings & Research".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            categories: vec![CategoryConfig::blogs(), CategoryConfig::research()],

            strict_front_matter: false,

            nav: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// A content category: a subdirectory of the content root plus its
/// presentation on the publications page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Directory name under the content root; also the link path segment
    pub dir: String,
    /// Section heading
    pub title: String,
    /// Placeholder shown when the category has no entries
    pub empty_message: String,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        CategoryConfig::blogs()
    }
}

impl CategoryConfig {
    pub fn blogs() -> Self {
        Self {
            dir: "blogs".to_string(),
            title: "Blog Posts".to_string(),
            empty_message: "No blog posts yet.".to_string(),
        }
    }

    pub fn research() -> Self {
        Self {
            dir: "research".to_string(),
            title: "Research & Academics".to_string(),
            empty_message: "No research papers yet.".to_string(),
        }
    }
}

/// A navigation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub link: String,
}

impl NavItem {
    /// Whether the link is an in-page anchor
    pub fn is_anchor(&self) -> bool {
        self.link.starts_with('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[0].dir, "blogs");
        assert_eq!(config.categories[1].empty_message, "No research papers yet.");
        assert!(!config.strict_front_matter);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r##"
title: My Site
heading: Notes & Papers
content_dir: posts
strict_front_matter: true
nav:
  - name: About
    link: "#about"
  - name: Contact
    link: /contact
"##;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.content_dir, "posts");
        assert!(config.strict_front_matter);
        assert_eq!(config.nav.len(), 2);
        assert!(config.nav[0].is_anchor());
        assert!(!config.nav[1].is_anchor());
        // unlisted fields keep their defaults
        assert_eq!(config.categories.len(), 2);
    }
}
