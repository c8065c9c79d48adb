//! Post summary model

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::FrontMatter;

/// Errors from building or collecting post summaries
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("missing required front-matter field `{field}` in {path:?}")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("duplicate slug `{slug}` in category `{category}`")]
    DuplicateSlug { slug: String, category: String },
}

/// One entry on the publications page: the card-level view of a content file
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// File name with the markdown extension stripped, otherwise unaltered
    pub slug: String,

    /// Content directory the file was loaded from; also the link segment
    pub category: String,

    /// Post title
    pub title: String,

    /// Publication date, kept as the raw front-matter string
    pub date: String,

    /// One-line summary shown on the card
    pub summary: String,

    /// Source file path, for diagnostics
    pub source: PathBuf,
}

impl PostSummary {
    /// Build a summary from parsed front-matter, requiring `title`, `date`
    /// and `summary` to be present
    pub fn from_front_matter(
        slug: String,
        category: String,
        source: PathBuf,
        fm: FrontMatter,
    ) -> Result<Self, ContentError> {
        let title = require(fm.title, "title", &source)?;
        let date = require(fm.date, "date", &source)?;
        let summary = require(fm.summary, "summary", &source)?;

        Ok(Self {
            slug,
            category,
            title,
            date,
            summary,
            source,
        })
    }

    /// Link path for the post's detail page
    pub fn link_path(&self) -> String {
        format!("/publications/{}/{}", self.category, self.slug)
    }
}

fn require(
    value: Option<String>,
    field: &'static str,
    source: &Path,
) -> Result<String, ContentError> {
    value.ok_or_else(|| ContentError::MissingField {
        field,
        path: source.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(title: Option<&str>, date: Option<&str>, summary: Option<&str>) -> FrontMatter {
        FrontMatter {
            title: title.map(String::from),
            date: date.map(String::from),
            summary: summary.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_fields_present() {
        let summary = PostSummary::from_front_matter(
            "hello".to_string(),
            "blogs".to_string(),
            PathBuf::from("content/blogs/hello.md"),
            fm(Some("Hello"), Some("2024-01-01"), Some("hi")),
        )
        .unwrap();
        assert_eq!(summary.title, "Hello");
        assert_eq!(summary.link_path(), "/publications/blogs/hello");
    }

    #[test]
    fn test_missing_field_named_in_error() {
        let err = PostSummary::from_front_matter(
            "hello".to_string(),
            "blogs".to_string(),
            PathBuf::from("content/blogs/hello.md"),
            fm(Some("Hello"), None, Some("hi")),
        )
        .unwrap_err();
        match err {
            ContentError::MissingField { field, .. } => assert_eq!(field, "date"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
