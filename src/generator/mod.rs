//! Generator module - renders the publications page from loaded content

use anyhow::Result;
use serde::Serialize;
use std::fs;
use tera::Context;

use crate::config::{CategoryConfig, NavItem};
use crate::content::PostSummary;
use crate::templates::TemplateRenderer;
use crate::Site;

/// A loaded category paired with its presentation config
pub struct CategorySection {
    pub config: CategoryConfig,
    pub posts: Vec<PostSummary>,
}

/// Card data handed to the template
#[derive(Serialize)]
struct CardData {
    title: String,
    date: String,
    summary: String,
    link: String,
}

/// Section data handed to the template
#[derive(Serialize)]
struct SectionData {
    title: String,
    empty_message: String,
    posts: Vec<CardData>,
}

/// Site-level data handed to the template
#[derive(Serialize)]
struct SiteData {
    title: String,
    heading: String,
}

/// Renders the publications page
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Render and write the page to `public/publications/index.html`
    pub fn generate(&self, sections: &[CategorySection]) -> Result<()> {
        let html = self.render(sections)?;

        let out_dir = self.site.public_dir.join("publications");
        fs::create_dir_all(&out_dir)?;
        fs::write(out_dir.join("index.html"), html)?;

        Ok(())
    }

    /// Render the page to an HTML string. Pure with respect to the loaded
    /// sections: identical input renders identical output.
    pub fn render(&self, sections: &[CategorySection]) -> Result<String> {
        let section_data: Vec<SectionData> = sections
            .iter()
            .map(|section| SectionData {
                title: section.config.title.clone(),
                empty_message: section.config.empty_message.clone(),
                posts: section
                    .posts
                    .iter()
                    .map(|post| CardData {
                        title: post.title.clone(),
                        date: post.date.clone(),
                        summary: post.summary.clone(),
                        link: post.link_path(),
                    })
                    .collect(),
            })
            .collect();

        let mut context = Context::new();
        context.insert(
            "site",
            &SiteData {
                title: self.site.config.title.clone(),
                heading: self.site.config.heading.clone(),
            },
        );
        context.insert("nav", &self.build_nav());
        context.insert("sections", &section_data);

        self.renderer.render("publications.html", &context)
    }

    /// Nav entries for this page: only in-page anchors from the configured
    /// items make sense here, prefixed with a link back home
    fn build_nav(&self) -> Vec<NavItem> {
        let mut nav = vec![NavItem {
            name: "Home".to_string(),
            link: "/".to_string(),
        }];
        nav.extend(
            self.site
                .config
                .nav
                .iter()
                .filter(|item| item.is_anchor())
                .cloned(),
        );
        nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_site(dir: &TempDir) -> Site {
        let base = dir.path().to_path_buf();
        let config = SiteConfig::default();
        Site {
            content_dir: base.join(&config.content_dir),
            public_dir: base.join(&config.public_dir),
            base_dir: base,
            config,
        }
    }

    fn post(category: &str, slug: &str, title: &str, date: &str, summary: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
            source: PathBuf::from(format!("content/{category}/{slug}.md")),
        }
    }

    fn default_sections(posts: Vec<PostSummary>) -> Vec<CategorySection> {
        vec![
            CategorySection {
                config: CategoryConfig::blogs(),
                posts,
            },
            CategorySection {
                config: CategoryConfig::research(),
                posts: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_cards_rendered_in_order() {
        let dir = TempDir::new().unwrap();
        let generator = Generator::new(&test_site(&dir)).unwrap();
        let sections = default_sections(vec![
            post("blogs", "b", "B", "2024-05-05", "s2"),
            post("blogs", "a", "A", "2023-01-01", "s1"),
        ]);

        let html = generator.render(&sections).unwrap();
        assert!(html.contains("/publications/blogs/b"));
        assert!(html.contains("/publications/blogs/a"));
        let b_pos = html.find(">B<").unwrap();
        let a_pos = html.find(">A<").unwrap();
        assert!(b_pos < a_pos, "newer post renders first");
        assert!(!html.contains("No blog posts yet."));
    }

    #[test]
    fn test_empty_category_placeholder() {
        let dir = TempDir::new().unwrap();
        let generator = Generator::new(&test_site(&dir)).unwrap();
        let html = generator.render(&default_sections(Vec::new())).unwrap();
        assert!(html.contains("No blog posts yet."));
        assert!(html.contains("No research papers yet."));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_section_headings_present() {
        let dir = TempDir::new().unwrap();
        let generator = Generator::new(&test_site(&dir)).unwrap();
        let html = generator.render(&default_sections(Vec::new())).unwrap();
        assert!(html.contains("Blog Posts"));
        assert!(html.contains("Research &amp; Academics"));
        assert!(html.contains("Writings &amp; Research"));
    }

    #[test]
    fn test_nav_filters_anchors_and_prepends_home() {
        let dir = TempDir::new().unwrap();
        let mut site = test_site(&dir);
        site.config.nav = vec![
            NavItem {
                name: "About".to_string(),
                link: "#about".to_string(),
            },
            NavItem {
                name: "Contact".to_string(),
                link: "/contact".to_string(),
            },
        ];
        let generator = Generator::new(&site).unwrap();
        let html = generator.render(&default_sections(Vec::new())).unwrap();
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("#about"));
        assert!(!html.contains("/contact"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let generator = Generator::new(&test_site(&dir)).unwrap();
        let sections = default_sections(vec![post("blogs", "a", "A", "2023-01-01", "s1")]);
        let first = generator.render(&sections).unwrap();
        let second = generator.render(&sections).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_writes_index_html() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let generator = Generator::new(&site).unwrap();
        generator.generate(&default_sections(Vec::new())).unwrap();
        let out = site.public_dir.join("publications/index.html");
        assert!(out.exists());
        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.contains("No research papers yet."));
    }
}
