//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every entity (project, post, testimonial, page) is shown by its positional
//! index and title first; paths and derived values follow as indented
//! context lines. Failed sections are listed with their reason so `check`
//! doubles as a content linter.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Projects (2 projects)
//! 001 E-Commerce Platform (3 images)
//!     Category: web
//!     Slides: 4
//! 002 Pipeline Kit (0 images)
//!     Category: data
//!     Slides: 1
//!
//! Blog (1 post)
//! 001 Hello, Rust
//!     Date: June 1, 2024 (4 min read)
//!     Page: posts/hello-rust.html
//!
//! Testimonials: failed to load (data/testimonials.json not found)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html
//! blog.html
//! posts/hello-rust.html
//! blog-post.html
//! Copied 1 asset
//! Generated 4 pages
//! ```
//!
//! ## Slides
//!
//! ```text
//! E-Commerce Platform
//!     Image 1 of 2: projects/shop/1.png (Checkout)
//!     Image 2 of 2: projects/shop/2.png
//!     Project Details: https://shop.example.com
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O beyond existence checks on the source tree.

use crate::blog;
use crate::content::{Content, Section};
use crate::generate::GenerateReport;
use crate::slideshow::{self, SlideView, Slideshow};
use crate::types::Categorized;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Section heading, or the failure line for a section that did not load.
fn section_header<T>(name: &str, section: &Section<T>, noun: (&str, &str)) -> String {
    match section {
        Section::Ready(items) => {
            let count = plural(items.len(), noun.0, noun.1);
            format!("{name} ({count})")
        }
        Section::Failed(reason) => format!("{name}: failed to load ({reason})"),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory shown by `check`.
pub fn format_check_output(content: &Content, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(section_header(
        "Projects",
        &content.projects,
        ("project", "projects"),
    ));
    for (i, project) in content.projects.items().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            project.title,
            plural(project.images.len(), "image", "images")
        ));
        lines.push(format!("    Category: {}", project.category()));
        lines.push(format!("    Slides: {}", slideshow::slide_count(project)));
    }

    lines.push(String::new());
    lines.push(section_header("Blog", &content.posts, ("post", "posts")));
    for (i, post) in content.posts.items().iter().enumerate() {
        let featured = if post.featured { " (featured)" } else { "" };
        lines.push(format!("{} {}{}", format_index(i + 1), post.title, featured));
        lines.push(format!(
            "    Date: {} ({} min read)",
            blog::format_date(&post.date),
            blog::reading_time(post)
        ));
        lines.push(format!("    Page: {}", blog::post_path(&post.slug)));
    }

    lines.push(String::new());
    lines.push(section_header(
        "Testimonials",
        &content.testimonials,
        ("testimonial", "testimonials"),
    ));
    for (i, t) in content.testimonials.items().iter().enumerate() {
        let rating = t
            .stars()
            .map(|s| format!(" ({s}/5)"))
            .unwrap_or_default();
        lines.push(format!("{} {}{}", format_index(i + 1), t.name, rating));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (defaults)".to_string());
    }
    let assets = &content.config.data.assets_dir;
    if source_root.join(assets).is_dir() {
        lines.push(format!("    {assets}/"));
    }

    lines
}

pub fn print_check_output(content: &Content, source_root: &Path) {
    for line in format_check_output(content, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report.pages.clone();
    if report.assets_copied > 0 {
        lines.push(format!(
            "Copied {}",
            plural(report.assets_copied, "asset", "assets")
        ));
    }
    if !report.degraded.is_empty() {
        lines.push(format!(
            "Rendered with load errors: {}",
            report.degraded.join(", ")
        ));
    }
    lines.push(format!(
        "Generated {}",
        plural(report.pages.len(), "page", "pages")
    ));
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Slides
// ============================================================================

fn slide_line(view: &SlideView) -> String {
    match view {
        SlideView::Image {
            src,
            caption,
            counter,
        } => match caption {
            Some(c) => format!("    {counter}: {src} ({c})"),
            None => format!("    {counter}: {src}"),
        },
        SlideView::Details { link, counter, .. } => match link {
            Some(l) => format!("    {counter}: {l}"),
            None => format!("    {counter}"),
        },
    }
}

/// Walk the open slideshow once around, listing every slide.
///
/// Leaves the cursor where it started. Returns nothing when no project is
/// open.
pub fn format_slides_output(show: &mut Slideshow) -> Vec<String> {
    let Some(project) = show.current() else {
        return Vec::new();
    };
    let mut lines = vec![project.title.clone()];
    let count = slideshow::slide_count(project);
    for _ in 0..count {
        if let Some(view) = show.view() {
            lines.push(slide_line(&view));
        }
        show.next();
    }
    lines
}

pub fn print_slides_output(show: &mut Slideshow) {
    for line in format_slides_output(show) {
        println!("{}", line);
    }
}
