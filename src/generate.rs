//! HTML site generation.
//!
//! Takes loaded [`Content`] and writes the final static site.
//!
//! ## Generated Pages
//!
//! - **Portfolio** (`/index.html`): filterable project grid, the slideshow
//!   modal with every slide pre-rendered, and the testimonials carousel
//! - **Blog index** (`/blog.html`): filterable post grid, newest first
//! - **Post pages** (`/posts/{slug}.html`): article, share links, prev/next
//! - **Post lookup** (`/blog-post.html?slug=...`): forwards to the post page
//!   or shows the not-found state
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── blog.html
//! ├── blog-post.html
//! ├── posts/
//! │   ├── hello-rust.html
//! │   └── ...
//! └── assets/                    # Copied from content/assets
//! ```
//!
//! ## Static behavior, thin script
//!
//! Everything that can be decided at build time is: slide contents and
//! counters come from [`slideshow::render`], initial carousel flags from
//! [`Carousel`], filter toggles from [`FilterState`]. The bundled
//! `static/site.js` only flips `active`/`hidden` flags in response to events
//! and applies the same wrap-around arithmetic.
//!
//! All links are relative so the site works from any sub-path.

use crate::blog;
use crate::carousel::{Carousel, VirtualScheduler};
use crate::config::{self, SiteConfig};
use crate::content::{Content, Section};
use crate::filter::{self, FilterState};
use crate::slideshow::{self, SlideView};
use crate::text;
use crate::types::{BlogPost, Categorized, Project, Testimonial};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// What a build wrote, for CLI reporting.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Output-relative paths of generated pages, in write order.
    pub pages: Vec<String>,
    pub assets_copied: usize,
    /// Regions rendered in their error state.
    pub degraded: Vec<&'static str>,
}

/// Shared per-build rendering context.
struct Site<'a> {
    config: &'a SiteConfig,
    css: String,
}

pub fn generate(
    content: &Content,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&content.config.colors),
        CSS_STATIC
    );
    let site = Site {
        config: &content.config,
        css,
    };
    let mut report = GenerateReport {
        degraded: content.failures().into_iter().map(|(name, _)| name).collect(),
        ..GenerateReport::default()
    };

    fs::create_dir_all(output_dir)?;

    let index = render_index(&site, &content.projects, &content.testimonials);
    write_page(output_dir, "index.html", index, &mut report)?;

    let blog_index = render_blog_index(&site, &content.posts);
    write_page(output_dir, "blog.html", blog_index, &mut report)?;

    let posts = content.posts.items();
    for post in posts {
        let page = render_post_page(&site, posts, post, "../");
        write_page(output_dir, &blog::post_path(&post.slug), page, &mut report)?;
    }

    let lookup = render_post_lookup(&site, posts, "")?;
    write_page(output_dir, "blog-post.html", lookup, &mut report)?;

    let assets_src = source_dir.join(&content.config.data.assets_dir);
    if assets_src.is_dir() {
        report.assets_copied =
            copy_assets(&assets_src, &output_dir.join(&content.config.data.assets_dir))?;
    }

    info!(
        pages = report.pages.len(),
        assets = report.assets_copied,
        "site generated at {}",
        output_dir.display()
    );
    Ok(report)
}

fn write_page(
    output_dir: &Path,
    rel_path: &str,
    markup: Markup,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    debug!("wrote {rel_path}");
    report.pages.push(rel_path.to_string());
    Ok(())
}

/// Copy the assets directory tree. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Prefix a site-relative asset reference for a page `prefix` levels deep.
/// Absolute URLs and root-relative paths are left alone.
fn asset_url(prefix: &str, src: &str) -> String {
    if src.starts_with("http://")
        || src.starts_with("https://")
        || src.starts_with("//")
        || src.starts_with('/')
        || src.starts_with("data:")
    {
        src.to_string()
    } else {
        format!("{prefix}{src}")
    }
}

/// Convert Markdown (with inline HTML passthrough) to HTML.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    site: &Site,
    title: &str,
    description: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(&site.css)) }
            }
            body class=[body_class]
                data-reveal-threshold=(site.config.reveal.threshold)
                data-stagger-ms=(site.config.grid.stagger_ms) {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the site header with brand and navigation
fn site_header(site: &Site, prefix: &str, current: &str) -> Markup {
    let links = [
        ("projects", "Projects", format!("{prefix}index.html#projects")),
        ("testimonials", "Testimonials", format!("{prefix}index.html#testimonials")),
        ("blog", "Blog", format!("{prefix}blog.html")),
    ];
    html! {
        header.site-header {
            a.brand href={ (prefix) "index.html" } { (site.config.site.title) }
            nav.site-nav {
                ul {
                    @for (key, label, href) in &links {
                        li class=[(*key == current).then_some("current")] {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (site.config.site.author) }
        }
    }
}

/// Inline error shown in place of a region whose data failed to load.
fn load_error(what: &str) -> Markup {
    html! {
        p.error-msg role="alert" {
            "Failed to load " (what) ". Please try again later."
        }
    }
}

/// Category toggle row. `"all"` starts active.
fn filter_buttons<T: Categorized>(site: &Site, items: &[T], grid_id: &str) -> Markup {
    let state = FilterState::new(items);
    html! {
        div.filter-buttons role="group" aria-label="Filter by category" data-grid=(grid_id) {
            @for category in state.categories() {
                @let active = state.is_active(category);
                button.filter-btn.active[active] type="button"
                    data-filter=(category) aria-pressed=(aria_bool(active)) {
                    (filter::category_label(category, &site.config.categories))
                }
            }
        }
    }
}

/// Thumbnail image or the initials placeholder.
fn thumbnail(prefix: &str, src: Option<&str>, title: &str, placeholder_class: &str) -> Markup {
    html! {
        @match src.map(str::trim).filter(|s| !s.is_empty()) {
            Some(src) => {
                img src=(asset_url(prefix, src)) alt=(title) loading="lazy"
                    data-initials=(text::initials(title));
            }
            None => {
                div class=(placeholder_class) aria-hidden="true" { (text::initials(title)) }
            }
        }
    }
}

fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn stagger_style(site: &Site, index: usize) -> String {
    format!(
        "animation-delay: {}ms",
        index as u64 * site.config.grid.stagger_ms
    )
}

// ============================================================================
// Portfolio page
// ============================================================================

fn render_index(
    site: &Site,
    projects: &Section<Project>,
    testimonials: &Section<Testimonial>,
) -> Markup {
    let meta = &site.config.site;
    let content = html! {
        (site_header(site, "", "projects"))
        main.portfolio-page {
            section.hero.reveal id="hero" {
                h1 { (meta.title) }
                @if !meta.tagline.is_empty() {
                    p.tagline { (meta.tagline) }
                }
            }
            section.reveal id="projects" {
                h2 { "Projects" }
                @match projects {
                    Section::Failed(_) => { (load_error("projects")) }
                    Section::Ready(items) => {
                        (filter_buttons(site, items, "portfolio-grid"))
                        (project_grid(site, items))
                    }
                }
            }
            (testimonials_section(site, testimonials))
        }
        (site_footer(site))
        @if let Section::Ready(items) = projects {
            (slideshow_modal(items))
        }
    };

    base_document(site, &meta.title, &meta.tagline, Some("portfolio"), content)
}

fn project_grid(site: &Site, projects: &[Project]) -> Markup {
    html! {
        div.card-grid id="portfolio-grid" {
            @for (idx, project) in projects.iter().enumerate() {
                (project_card(site, project, idx))
            }
        }
        div.empty-state hidden[!projects.is_empty()] { "No projects found in this category." }
    }
}

fn project_card(site: &Site, project: &Project, index: usize) -> Markup {
    html! {
        article.project-card.reveal
            data-category=(project.category())
            data-project=(project.id)
            style=(stagger_style(site, index))
            tabindex="0"
            role="button"
            aria-label={ "View " (project.title) } {
            div.card-image {
                (thumbnail("", project.thumb.as_deref(), &project.title, "card-placeholder"))
                div.view-overlay { "View Project" }
            }
            div.card-content {
                @if !project.tags.is_empty() {
                    div.card-tags { (project.tags.join(" • ")) }
                }
                h3 { (project.title) }
                p.card-description {
                    (text::truncate(&project.description, site.config.grid.excerpt_length))
                }
            }
        }
    }
}

/// The slideshow modal with one deck of pre-rendered slides per project.
fn slideshow_modal(projects: &[Project]) -> Markup {
    html! {
        div.modal id="slideshow-modal" role="dialog" aria-modal="true" aria-hidden="true" {
            button.close-btn type="button" aria-label="Close" { "×" }
            div.modal-content {
                button.nav-btn.prev-btn type="button" aria-label="Previous slide" { "❮" }
                div.slide-container {
                    @for project in projects {
                        (slide_deck(project))
                    }
                }
                button.nav-btn.next-btn type="button" aria-label="Next slide" { "❯" }
                div.slide-info-footer {
                    h3 id="footer-title" {}
                    p id="slide-counter" aria-live="polite" {}
                }
            }
        }
    }
}

fn slide_deck(project: &Project) -> Markup {
    let count = slideshow::slide_count(project);
    html! {
        div.slide-deck data-project=(project.id) data-title=(project.title)
            data-count=(count) hidden {
            @for cursor in 0..count {
                @let view = slideshow::render(project, cursor);
                div.slide-view.active[cursor == 0] data-counter=(view.counter()) {
                    (slide_body(&view))
                }
            }
        }
    }
}

fn slide_body(view: &SlideView) -> Markup {
    html! {
        @match view {
            SlideView::Image { src, caption, .. } => {
                div.image-slide {
                    img src=(asset_url("", src)) alt=[*caption] loading="lazy";
                    @if let Some(caption) = caption {
                        div.slide-caption-wrapper {
                            p.slide-caption { (caption) }
                        }
                    }
                }
            }
            SlideView::Details { title, details, link, .. } => {
                div.info-slide {
                    div.info-content {
                        h2 { (title) }
                        div.info-details { p { (details) } }
                        @if let Some(link) = link {
                            a.btn.btn-primary href=(link) target="_blank" rel="noopener" {
                                "Visit Project"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn testimonials_section(site: &Site, testimonials: &Section<Testimonial>) -> Markup {
    html! {
        @match testimonials {
            Section::Failed(_) => {
                section.reveal id="testimonials" {
                    h2 { "Testimonials" }
                    (load_error("testimonials"))
                }
            }
            // An empty list renders nothing and starts no timer
            Section::Ready(items) if items.is_empty() => {}
            Section::Ready(items) => {
                section.reveal id="testimonials" {
                    h2 { "Testimonials" }
                    (carousel(site, items))
                }
            }
        }
    }
}

fn carousel(site: &Site, items: &[Testimonial]) -> Markup {
    let state = Carousel::new(
        items.len(),
        site.config.carousel.interval(),
        VirtualScheduler::new(),
    );
    let flags = state.active_flags();
    let interval_ms = site.config.carousel.interval().as_millis() as u64;
    html! {
        div.carousel data-interval-ms=(interval_ms) {
            button.carousel-prev type="button" aria-label="Previous testimonial" { "❮" }
            div.carousel-track {
                @for (idx, t) in items.iter().enumerate() {
                    (testimonial_card(t, idx, flags[idx]))
                }
            }
            button.carousel-next type="button" aria-label="Next testimonial" { "❯" }
            div.carousel-dots role="tablist" {
                @for (idx, t) in items.iter().enumerate() {
                    button.dot.active[flags[idx]] type="button" data-index=(idx)
                        aria-label={ "Show testimonial from " (t.name) } {}
                }
            }
        }
    }
}

fn testimonial_card(t: &Testimonial, index: usize, active: bool) -> Markup {
    html! {
        article.testimonial-card.active[active] data-index=(index) aria-hidden=(aria_bool(!active)) {
            @if let Some(stars) = t.stars() {
                div.rating aria-label={ (stars) " out of 5" } {
                    span.stars-on { ("★".repeat(stars as usize)) }
                    span.stars-off { ("☆".repeat(5 - stars as usize)) }
                }
            }
            blockquote { p { (t.quote) } }
            div.testimonial-author {
                (thumbnail("", t.avatar.as_deref(), &t.name, "avatar-placeholder"))
                div {
                    p.author-name { (t.name) }
                    p.author-role {
                        (t.role)
                        @if !t.role.is_empty() && !t.company.is_empty() { ", " }
                        (t.company)
                    }
                }
            }
        }
    }
}

// ============================================================================
// Blog pages
// ============================================================================

fn render_blog_index(site: &Site, posts: &Section<BlogPost>) -> Markup {
    let title = format!("Blog - {}", site.config.site.title);
    let content = html! {
        (site_header(site, "", "blog"))
        main.blog-page {
            header.blog-header.reveal {
                h1 { "Blog" }
            }
            @match posts {
                Section::Failed(_) => {
                    div id="blog-grid" { (load_error("blog posts")) }
                }
                Section::Ready(items) => {
                    (filter_buttons(site, items, "blog-grid"))
                    div.card-grid id="blog-grid" {
                        @for (idx, post) in items.iter().enumerate() {
                            (blog_card(site, post, idx))
                        }
                    }
                    div.empty-state hidden[!items.is_empty()] {
                        "No posts found in this category."
                    }
                }
            }
        }
        (site_footer(site))
    };
    base_document(site, &title, "Articles and notes", Some("blog"), content)
}

fn blog_card(site: &Site, post: &BlogPost, index: usize) -> Markup {
    let href = blog::post_href(&post.slug);
    html! {
        article.blog-card.reveal data-category=(post.category())
            style=(stagger_style(site, index)) {
            div.blog-card-image {
                (thumbnail("", post.thumbnail.as_deref(), &post.title, "blog-placeholder"))
                @if post.featured {
                    span.featured-badge { "Featured" }
                }
            }
            div.blog-card-content {
                div.blog-card-meta {
                    span.blog-category {
                        (filter::category_label(post.category(), &site.config.categories))
                    }
                    span.blog-date { (blog::format_date(&post.date)) }
                }
                h3 { a href=(href) { (post.title) } }
                p.blog-excerpt {
                    (text::truncate(&post.excerpt, site.config.grid.excerpt_length))
                }
                div.blog-card-footer {
                    span.reading-time { (blog::reading_time(post)) " min read" }
                    a.read-more-link href=(href) { "Read More →" }
                }
            }
        }
    }
}

fn render_post_page(site: &Site, posts: &[BlogPost], post: &BlogPost, prefix: &str) -> Markup {
    let meta = &site.config.site;
    let author = post.author.as_deref().unwrap_or(&meta.author);
    let url = blog::canonical_url(&meta.base_url, &post.slug);
    let share = blog::share_links(&url, &post.title);
    let neighbors = blog::neighbors(posts, &post.slug);
    let title = format!("{} - {}", post.title, meta.author);

    let content = html! {
        div id="reading-progress" {}
        (site_header(site, prefix, "blog"))
        main.post-page {
            article.post {
                header.article-header {
                    div.article-meta {
                        span.blog-category {
                            (filter::category_label(post.category(), &site.config.categories))
                        }
                        span.blog-date { (blog::format_date(&post.date)) }
                        span.reading-time { (blog::reading_time(post)) " min read" }
                        @if post.featured {
                            span.featured-badge { "Featured" }
                        }
                    }
                    h1 { (post.title) }
                    p.article-author { "By " (author) }
                }
                @if let Some(src) = post.thumbnail.as_deref().filter(|s| !s.is_empty()) {
                    figure.featured-image {
                        img src=(asset_url(prefix, src)) alt=(post.title);
                    }
                }
                div.article-content id="article-content" {
                    (PreEscaped(markdown_to_html(&post.content)))
                }
                @if !post.tags.is_empty() {
                    div.article-tags {
                        @for tag in &post.tags {
                            span.tag { (tag) }
                        }
                    }
                }
                div.share-buttons {
                    a id="share-twitter" href=(share.twitter) target="_blank" rel="noopener" {
                        "Share on Twitter"
                    }
                    a id="share-linkedin" href=(share.linkedin) target="_blank" rel="noopener" {
                        "Share on LinkedIn"
                    }
                    button id="share-copy" type="button" data-url=(share.copy) { "Copy Link" }
                }
                nav.nav-links id="post-navigation" {
                    @match neighbors.previous {
                        Some(prev) => {
                            a.nav-link.prev-link href={ (prefix) (blog::post_href(&prev.slug)) } {
                                span.nav-label { "← Previous" }
                                span.nav-title { (prev.title) }
                            }
                        }
                        None => { div {} }
                    }
                    @if let Some(next) = neighbors.next {
                        a.nav-link.next-link href={ (prefix) (blog::post_href(&next.slug)) } {
                            span.nav-label { "Next →" }
                            span.nav-title { (next.title) }
                        }
                    }
                }
            }
        }
        button id="back-to-top" type="button" aria-label="Back to top" { "↑" }
        (site_footer(site))
    };

    base_document(site, &title, &post.excerpt, Some("post"), content)
}

/// The not-found state with a recovery link to the listing.
fn not_found_state(message: &str, prefix: &str) -> Markup {
    html! {
        div.error-state {
            h2 { "Oops!" }
            p.error-message { (message) }
            a.btn.btn-primary href={ (prefix) "blog.html" } { "Back to Blog" }
        }
    }
}

/// Page for a `?slug=...` query: the post itself, or the not-found state.
///
/// Built with an empty query this is `blog-post.html`; it embeds the
/// slug → page map so the script can forward real queries in the browser.
fn render_post_lookup(site: &Site, posts: &[BlogPost], query: &str) -> Result<Markup, GenerateError> {
    match blog::resolve_query(posts, query) {
        Ok(post) => Ok(render_post_page(site, posts, post, "")),
        Err(err) => {
            let message = err.to_string();
            let index: BTreeMap<&str, String> = posts
                .iter()
                .map(|p| (p.slug.as_str(), blog::post_href(&p.slug)))
                .collect();
            let index_json = serde_json::to_string(&index)?.replace("</", "<\\/");
            let title = format!("Blog - {}", site.config.site.title);
            let content = html! {
                (site_header(site, "", "blog"))
                main.post-page {
                    div.article-content id="article-content" {
                        (not_found_state(&message, ""))
                    }
                }
                script id="post-index" type="application/json" { (PreEscaped(index_json)) }
                (site_footer(site))
            };
            Ok(base_document(site, &title, &message, Some("post-lookup"), content))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn site(config: &SiteConfig) -> Site<'_> {
        Site {
            config,
            css: String::new(),
        }
    }

    #[test]
    fn base_document_includes_doctype_and_script() {
        let config = SiteConfig::default();
        let doc = base_document(&site(&config), "Test", "", None, html! { p { "x" } })
            .into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
        assert!(doc.contains("data-reveal-threshold=\"0.1\""));
        assert!(doc.contains("<script>"));
    }

    #[test]
    fn header_marks_current_link() {
        let config = SiteConfig::default();
        let header = site_header(&site(&config), "../", "blog").into_string();
        assert!(header.contains(r#"<li class="current"><a href="../blog.html">Blog</a>"#));
        assert!(header.contains(r#"href="../index.html#projects""#));
    }

    #[test]
    fn filter_buttons_all_first_and_active() {
        let config = SiteConfig::default();
        let items = vec![project(1, "A", 0), {
            let mut p = project(2, "B", 0);
            p.category = Some("mobile".into());
            p
        }];
        let html = filter_buttons(&site(&config), &items, "portfolio-grid").into_string();
        let all = html.find(r#"data-filter="all""#).unwrap();
        let web = html.find(r#"data-filter="web""#).unwrap();
        let mobile = html.find(r#"data-filter="mobile""#).unwrap();
        assert!(all < web && web < mobile);
        assert!(html.contains(r#"class="filter-btn active""#));
        assert_eq!(html.matches("filter-btn active").count(), 1);
        assert!(html.contains("Web Dev"));
        assert!(html.contains("Mobile Dev"));
    }

    #[test]
    fn project_card_truncates_and_joins_tags() {
        let mut config = SiteConfig::default();
        config.grid.excerpt_length = 10;
        let mut p = project(7, "Chat Messenger", 2);
        p.description = "Real-time messaging app with media sharing".into();
        let html = project_card(&site(&config), &p, 3).into_string();
        assert!(html.contains("Real-time..."));
        assert!(html.contains("Rust • Wasm"));
        assert!(html.contains(r#"data-project="7""#));
        assert!(html.contains("animation-delay: 300ms"));
    }

    #[test]
    fn missing_thumbnail_uses_initials() {
        let config = SiteConfig::default();
        let mut p = project(1, "Fitness Tracker", 0);
        p.thumb = None;
        let html = project_card(&site(&config), &p, 0).into_string();
        assert!(html.contains(r#"<div class="card-placeholder" aria-hidden="true">FT</div>"#));
    }

    #[test]
    fn slide_deck_prerenders_every_position() {
        let p = project(1, "Shop", 3);
        let html = slide_deck(&p).into_string();
        assert_eq!(html.matches("class=\"slide-view").count(), 4);
        assert!(html.contains(r#"data-counter="Image 1 of 3""#));
        assert!(html.contains(r#"data-counter="Image 3 of 3""#));
        assert!(html.contains(r#"data-counter="Project Details""#));
        assert!(html.contains(r#"data-count="4""#));
        assert_eq!(html.matches("slide-view active").count(), 1);
        assert!(html.contains("Visit Project"));
    }

    #[test]
    fn slide_deck_zero_images_is_details_only() {
        let p = project(1, "Empty", 0);
        let html = slide_deck(&p).into_string();
        assert_eq!(html.matches("class=\"slide-view").count(), 1);
        assert!(html.contains(r#"class="slide-view active" data-counter="Project Details""#));
    }

    #[test]
    fn slide_without_caption_hides_caption_row() {
        let mut p = project(1, "Shop", 1);
        p.images[0].caption = None;
        let html = slide_deck(&p).into_string();
        assert!(!html.contains("slide-caption"));
    }

    #[test]
    fn carousel_first_card_and_dot_active() {
        let config = SiteConfig::default();
        let items = vec![
            testimonial("Ada", Some(5)),
            testimonial("Grace", None),
            testimonial("Linus", Some(3)),
        ];
        let html = carousel(&site(&config), &items).into_string();
        assert_eq!(html.matches("testimonial-card active").count(), 1);
        assert_eq!(html.matches("dot active").count(), 1);
        assert!(html.contains(r#"data-interval-ms="5000""#));
        // Rating block omitted for Grace
        assert_eq!(html.matches("class=\"rating\"").count(), 2);
        assert!(html.contains(
            r#"<span class="stars-on">★★★</span><span class="stars-off">☆☆</span>"#
        ));
    }

    #[test]
    fn empty_testimonials_render_nothing() {
        let config = SiteConfig::default();
        let html = testimonials_section(&site(&config), &Section::Ready(vec![])).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn failed_testimonials_render_inline_error() {
        let config = SiteConfig::default();
        let section: Section<Testimonial> = Section::Failed("boom".into());
        let html = testimonials_section(&site(&config), &section).into_string();
        assert!(html.contains("Failed to load testimonials. Please try again later."));
    }

    #[test]
    fn failed_projects_keep_rest_of_page() {
        let config = SiteConfig::default();
        let projects: Section<Project> = Section::Failed("boom".into());
        let testimonials = Section::Ready(vec![testimonial("Ada", Some(4))]);
        let html = render_index(&site(&config), &projects, &testimonials).into_string();
        assert!(html.contains("Failed to load projects."));
        assert!(html.contains("testimonial-card"));
        assert!(!html.contains(r#"id="slideshow-modal""#));
    }

    #[test]
    fn empty_portfolio_shows_empty_state() {
        let config = SiteConfig::default();
        let html = project_grid(&site(&config), &[]).into_string();
        assert!(html.contains(r#"<div class="empty-state">No projects found"#));

        let html = project_grid(&site(&config), &[project(1, "A", 0)]).into_string();
        assert!(html.contains(r#"<div class="empty-state" hidden>No projects found"#));
    }

    #[test]
    fn blog_index_lists_cards_with_labels() {
        let config = SiteConfig::default();
        let posts = Section::Ready(vec![
            post("june", "2024-06-01", "tutorial"),
            post("jan", "2024-01-01", "ml"),
        ]);
        let html = render_blog_index(&site(&config), &posts).into_string();
        assert!(html.find("posts/june.html").unwrap() < html.find("posts/jan.html").unwrap());
        assert!(html.contains("June 1, 2024"));
        assert!(html.contains(">Tutorial<"));
        // Unknown category keeps its literal label
        assert!(html.contains(">ml<"));
        assert!(html.contains("3 min read"));
        assert!(html.contains(r#"class="blog-placeholder""#));
    }

    #[test]
    fn blog_index_failed_load() {
        let config = SiteConfig::default();
        let posts: Section<BlogPost> = Section::Failed("boom".into());
        let html = render_blog_index(&site(&config), &posts).into_string();
        assert!(html.contains("Failed to load blog posts. Please try again later."));
        assert!(!html.contains(r#"class="filter-btn"#));
    }

    #[test]
    fn post_page_content_share_and_navigation() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com".into();
        let posts = vec![
            post("newest", "2024-03-01", "web"),
            post("middle", "2024-02-01", "web"),
            post("oldest", "2024-01-01", "web"),
        ];
        let html = render_post_page(&site(&config), &posts, &posts[1], "../").into_string();
        assert!(html.contains("<strong>body</strong>"));
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("https://twitter.com/intent/tweet?text=Post+middle"));
        assert!(html.contains(r#"data-url="https://example.com/posts/middle.html""#));
        assert!(html.contains(r#"href="../posts/oldest.html""#));
        assert!(html.contains(r#"href="../posts/newest.html""#));
        assert!(html.contains("By Anonymous"));
        assert!(html.contains("reading-progress"));
        assert!(html.contains("back-to-top"));
    }

    #[test]
    fn post_page_first_post_has_no_next() {
        let config = SiteConfig::default();
        let posts = vec![post("only", "2024-03-01", "web")];
        let html = render_post_page(&site(&config), &posts, &posts[0], "../").into_string();
        assert!(!html.contains(r#"class="nav-link next-link""#));
        assert!(!html.contains(r#"class="nav-link prev-link""#));
    }

    #[test]
    fn lookup_without_slug_is_not_found_state() {
        let config = SiteConfig::default();
        let posts = vec![post("hello", "2024-03-01", "web")];
        let html = render_post_lookup(&site(&config), &posts, "")
            .unwrap()
            .into_string();
        assert!(html.contains("No blog post specified"));
        assert!(html.contains("Back to Blog"));
        assert!(html.contains(r#"{"hello":"posts/hello.html"}"#));
    }

    #[test]
    fn lookup_existing_and_missing_slug() {
        let config = SiteConfig::default();
        let posts = vec![post("hello", "2024-03-01", "web")];
        let found = render_post_lookup(&site(&config), &posts, "?slug=hello")
            .unwrap()
            .into_string();
        assert!(found.contains("<h1>Post hello</h1>"));

        let missing = render_post_lookup(&site(&config), &posts, "?slug=missing")
            .unwrap()
            .into_string();
        assert!(missing.contains("Blog post not found"));
    }

    #[test]
    fn asset_url_prefixes_relative_only() {
        assert_eq!(asset_url("../", "assets/a.png"), "../assets/a.png");
        assert_eq!(asset_url("../", "https://x.dev/a.png"), "https://x.dev/a.png");
        assert_eq!(asset_url("../", "/a.png"), "/a.png");
    }

    #[test]
    fn html_escape_in_maud() {
        let config = SiteConfig::default();
        let p = project(1, "<script>alert('xss')</script>", 0);
        let html = project_card(&site(&config), &p, 0).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn generate_writes_site_from_fixtures() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let content = crate::content::load(source.path()).unwrap();
        let report = generate(&content, source.path(), out.path()).unwrap();

        for page in ["index.html", "blog.html", "blog-post.html", "posts/hello-rust.html"] {
            assert!(out.path().join(page).exists(), "missing {page}");
            assert!(report.pages.iter().any(|p| p == page));
        }
        assert!(out.path().join("assets/favicon.svg").exists());
        assert_eq!(report.assets_copied, 1);
        assert!(report.degraded.is_empty());
    }

    #[test]
    fn generate_with_missing_blog_still_builds_portfolio() {
        let source = setup_fixtures();
        fs::remove_file(source.path().join("data/blog.json")).unwrap();
        let out = TempDir::new().unwrap();
        let content = crate::content::load(source.path()).unwrap();
        let report = generate(&content, source.path(), out.path()).unwrap();

        assert_eq!(report.degraded, vec!["blog"]);
        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("E-Commerce Platform"));
        let blog = fs::read_to_string(out.path().join("blog.html")).unwrap();
        assert!(blog.contains("Failed to load blog posts"));
        assert!(!out.path().join("posts").exists());
    }
}
