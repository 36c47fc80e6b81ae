//! Shared test utilities for the folio test suite.
//!
//! Provides a fixture copy of `fixtures/content/`, builders for the content
//! types, and lookup helpers that panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = crate::content::load(tmp.path()).unwrap();
//! let post = find_post(&content, "hello-rust");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Content;
use crate::types::{BlogPost, Project, ProjectId, SlideImage, Testimonial};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// Project with `images` numbered slides, category `web`.
pub fn project(id: u64, title: &str, images: usize) -> Project {
    Project {
        id: ProjectId::Number(id),
        title: title.to_string(),
        category: Some("web".to_string()),
        tags: vec!["Rust".to_string(), "Wasm".to_string()],
        description: format!("{title} in a sentence."),
        details: Some(format!("{title} in a paragraph.")),
        link: Some(format!("https://example.com/{id}")),
        images: (0..images)
            .map(|i| SlideImage {
                url: format!("projects/{id}/{i}.png"),
                caption: Some(format!("Screen {}", i + 1)),
            })
            .collect(),
        thumb: Some(format!("projects/{id}/thumb.png")),
    }
}

pub fn post(slug: &str, date: &str, category: &str) -> BlogPost {
    BlogPost {
        id: None,
        slug: slug.to_string(),
        title: format!("Post {slug}"),
        category: Some(category.to_string()),
        date: date.to_string(),
        excerpt: format!("About {slug}."),
        content: format!("# {slug}\n\nSome **body** text.\n\n```rust\nfn main() {{}}\n```\n"),
        author: None,
        tags: vec!["rust".to_string()],
        thumbnail: None,
        featured: false,
        reading_time: Some(3),
    }
}

pub fn testimonial(name: &str, rating: Option<u8>) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: "CTO".to_string(),
        company: "Acme".to_string(),
        quote: format!("{name} was a pleasure to work with."),
        avatar: None,
        rating,
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a loaded project by title.
pub fn find_project<'a>(content: &'a Content, title: &str) -> &'a Project {
    let projects = content.projects.items();
    projects
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
            panic!("project '{title}' not found. Available: {titles:?}")
        })
}

/// Find a loaded blog post by slug.
pub fn find_post<'a>(content: &'a Content, slug: &str) -> &'a BlogPost {
    let posts = content.posts.items();
    posts.iter().find(|p| p.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        panic!("post '{slug}' not found. Available: {slugs:?}")
    })
}
