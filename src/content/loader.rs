//! Content loader - loads post summaries from category directories

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, PostSummary};
use crate::Site;

/// Loads post summaries from the content root
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts from one category directory, sorted by date descending.
    ///
    /// A missing directory is zero posts, not an error. Entries missing a
    /// required front-matter field are skipped with a warning, unless
    /// `strict_front_matter` is set, in which case the load fails. Unreadable
    /// files and malformed front-matter always fail the load.
    pub fn load_category(&self, category: &str) -> Result<Vec<PostSummary>> {
        let category_dir = self.site.content_dir.join(category);
        if !category_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen_slugs: HashSet<String> = HashSet::new();

        for entry in WalkDir::new(&category_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_summary(path, category) {
                Ok(post) => {
                    if !seen_slugs.insert(post.slug.clone()) {
                        return Err(ContentError::DuplicateSlug {
                            slug: post.slug,
                            category: category.to_string(),
                        }
                        .into());
                    }
                    posts.push(post);
                }
                Err(LoadError::Invalid(e)) if !self.site.config.strict_front_matter => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
                Err(LoadError::Invalid(e)) => return Err(e.into()),
                Err(LoadError::Fatal(e)) => return Err(e),
            }
        }

        // Sort by date string descending (newest first); sort_by is stable,
        // so equal dates keep their enumeration order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single summary from a file
    fn load_summary(&self, path: &Path, category: &str) -> Result<PostSummary, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| LoadError::Fatal(e.into()))?;
        let (fm, _body) = FrontMatter::parse(&content).map_err(LoadError::Fatal)?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        PostSummary::from_front_matter(slug, category.to_string(), path.to_path_buf(), fm)
            .map_err(LoadError::Invalid)
    }
}

/// Distinguishes per-entry data-quality problems (skippable by policy) from
/// failures that always abort the load
enum LoadError {
    Invalid(ContentError),
    Fatal(anyhow::Error),
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
