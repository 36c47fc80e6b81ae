//! Blog post ordering, lookup and per-post page data.
//!
//! Posts are listed newest first. A post page is addressed by slug, either
//! directly (`posts/{slug}.html`) or through the query entry point
//! (`blog-post.html?slug={slug}`); a missing or unknown slug resolves to a
//! [`BlogError`] that the renderer turns into the not-found state.

use crate::text;
use crate::types::BlogPost;
use chrono::{DateTime, NaiveDate};
use std::cmp::Reverse;
use thiserror::Error;
use url::form_urlencoded;

/// Words per minute used when a post carries no explicit reading time.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("No blog post specified")]
    MissingSlug,
    #[error("Blog post not found")]
    NotFound(String),
}

/// Parse a post date: `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Long US-style date, e.g. `June 1, 2024`. Unparsable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Sort newest first. Stable: equal dates keep document order, and posts
/// with unparsable dates go last.
pub fn sort_by_date_desc(posts: &mut [BlogPost]) {
    posts.sort_by_key(|p| Reverse(parse_date(&p.date)));
}

pub fn find_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Result<&'a BlogPost, BlogError> {
    posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| BlogError::NotFound(slug.to_string()))
}

/// Extract the `slug` parameter from a query string (leading `?` optional).
pub fn slug_from_query(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "slug")
        .map(|(_, value)| value.trim().to_string())
        .filter(|slug| !slug.is_empty())
}

/// Resolve the post addressed by a `?slug=...` query.
pub fn resolve_query<'a>(posts: &'a [BlogPost], query: &str) -> Result<&'a BlogPost, BlogError> {
    let slug = slug_from_query(query).ok_or(BlogError::MissingSlug)?;
    find_by_slug(posts, &slug)
}

/// Neighbors of a post in a newest-first list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    /// The next older post.
    pub previous: Option<&'a BlogPost>,
    /// The next newer post.
    pub next: Option<&'a BlogPost>,
}

/// Previous (older) and next (newer) posts around `slug`.
pub fn neighbors<'a>(posts: &'a [BlogPost], slug: &str) -> Neighbors<'a> {
    match posts.iter().position(|p| p.slug == slug) {
        Some(idx) => Neighbors {
            previous: posts.get(idx + 1),
            next: idx.checked_sub(1).and_then(|i| posts.get(i)),
        },
        None => Neighbors {
            previous: None,
            next: None,
        },
    }
}

/// Reading time in minutes: the post's own value, else a word-count estimate
/// (never less than one minute).
pub fn reading_time(post: &BlogPost) -> u32 {
    post.reading_time.filter(|&m| m > 0).unwrap_or_else(|| {
        let words = text::word_count(&post.content);
        words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
    })
}

/// Relative path of a post's page on disk.
pub fn post_path(slug: &str) -> String {
    format!("posts/{}.html", text::slugify(slug))
}

/// [`post_path`] percent-encoded for use in links. Identical for ASCII slugs.
pub fn post_href(slug: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text::slugify(slug).as_bytes()).collect();
    format!("posts/{encoded}.html")
}

/// Canonical URL of a post: `base_url` joined with the post link, or the
/// relative link when no base URL is configured.
pub fn canonical_url(base_url: &str, slug: &str) -> String {
    let path = post_href(slug);
    if base_url.is_empty() {
        path
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}

/// Outbound share targets for a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
    /// Copied to the clipboard by the copy-link button.
    pub copy: String,
}

pub fn share_links(url: &str, title: &str) -> ShareLinks {
    let twitter = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", title)
        .append_pair("url", url)
        .finish();
    let linkedin = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", url)
        .finish();
    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?{twitter}"),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?{linkedin}"),
        copy: url.to_string(),
    }
}
