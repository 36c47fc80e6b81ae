//! Content types loaded from the site's JSON documents.
//!
//! Field names follow the JSON documents as they are written by hand (and by
//! the GitHub import tooling), so a few fields carry serde renames. Optional
//! attributes stay `Option` here; fallbacks (placeholder initials, the
//! `"other"` category, computed reading time) are applied at render time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category used for items that carry no category of their own.
pub const FALLBACK_CATEGORY: &str = "other";

/// Project identifier. The documents use numeric ids for imported
/// repositories and free-form strings for hand-written entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl ProjectId {
    /// Whether a user-supplied id (CLI argument, `data-project` attribute)
    /// names this project. Compared on the rendered form, so `"007"` only
    /// matches a text id and `"7"` matches both `7` and `"7"`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ProjectId::Number(n) => raw.trim() == n.to_string(),
            ProjectId::Text(s) => raw.trim() == s,
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

/// One image of a project slideshow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Long-form text shown on the trailing details slide.
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub images: Vec<SlideImage>,
    #[serde(default)]
    pub thumb: Option<String>,
}

impl Project {
    /// Details text, falling back to the short description.
    pub fn details_text(&self) -> &str {
        match self.details.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => &self.description,
        }
    }
}

/// A blog post. `content` is Markdown; inline HTML passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: Option<ProjectId>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "readingTime")]
    pub reading_time: Option<u32>,
}

/// A client testimonial shown in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl Testimonial {
    /// Star rating, only when it falls in the displayable 1..=5 range.
    pub fn stars(&self) -> Option<u8> {
        self.rating.filter(|r| (1..=5).contains(r))
    }
}

/// Anything that can be placed in a filterable grid.
pub trait Categorized {
    /// Raw category, `None` when absent or blank.
    fn raw_category(&self) -> Option<&str>;

    /// Category with the `"other"` fallback applied.
    fn category(&self) -> &str {
        self.raw_category().unwrap_or(FALLBACK_CATEGORY)
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|c| !c.is_empty())
}

impl Categorized for Project {
    fn raw_category(&self) -> Option<&str> {
        non_blank(&self.category)
    }
}

impl Categorized for BlogPost {
    fn raw_category(&self) -> Option<&str> {
        non_blank(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_accepts_numbers_and_strings() {
        let ids: Vec<ProjectId> = serde_json::from_str(r#"[7, "portfolio-site"]"#).unwrap();
        assert_eq!(ids[0], ProjectId::Number(7));
        assert_eq!(ids[1], ProjectId::Text("portfolio-site".into()));
    }

    #[test]
    fn project_id_matches_rendered_form() {
        assert!(ProjectId::Number(42).matches("42"));
        assert!(ProjectId::Text("chat-app".into()).matches(" chat-app "));
        assert!(ProjectId::Text("007".into()).matches("007"));
        assert!(!ProjectId::Number(7).matches("007"));
        assert_eq!(ProjectId::Number(42).to_string(), "42");
    }

    #[test]
    fn project_defaults_for_missing_fields() {
        let p: Project = serde_json::from_str(r#"{"id": 1, "title": "Bare"}"#).unwrap();
        assert!(p.images.is_empty());
        assert!(p.tags.is_empty());
        assert_eq!(p.category(), "other");
        assert!(p.thumb.is_none());
    }

    #[test]
    fn blank_category_falls_back_to_other() {
        let p: Project =
            serde_json::from_str(r#"{"id": 1, "title": "T", "category": "  "}"#).unwrap();
        assert_eq!(p.category(), "other");
    }

    #[test]
    fn details_falls_back_to_description() {
        let p: Project = serde_json::from_str(
            r#"{"id": 1, "title": "T", "description": "short", "details": ""}"#,
        )
        .unwrap();
        assert_eq!(p.details_text(), "short");
    }

    #[test]
    fn blog_post_reads_camel_case_reading_time() {
        let post: BlogPost = serde_json::from_str(
            r#"{"slug": "a", "title": "A", "date": "2024-01-01", "readingTime": 4}"#,
        )
        .unwrap();
        assert_eq!(post.reading_time, Some(4));
        assert!(!post.featured);
    }

    #[test]
    fn testimonial_rating_out_of_range_is_hidden() {
        let mut t: Testimonial =
            serde_json::from_str(r#"{"name": "Ada", "quote": "Great", "rating": 5}"#).unwrap();
        assert_eq!(t.stars(), Some(5));
        t.rating = Some(0);
        assert_eq!(t.stars(), None);
        t.rating = Some(9);
        assert_eq!(t.stars(), None);
    }
}
