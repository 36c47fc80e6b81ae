//! # Folio
//!
//! A static site generator for a personal portfolio and blog. Content lives
//! in three JSON documents plus an optional `config.toml`; the build renders
//! a filterable project grid with a slideshow modal, a testimonials
//! carousel, and a blog with one page per post.
//!
//! # Architecture: Load → Generate
//!
//! ```text
//! 1. Load      content/  →  Content          (config + three independent sections)
//! 2. Generate  Content   →  dist/            (final HTML site)
//! ```
//!
//! Each JSON document loads independently. A missing or malformed document
//! turns only its own section into an inline error on the page; the rest of
//! the site is still built.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Reads config and documents into [`content::Content`], one [`content::Section`] per document |
//! | [`generate`] | Renders the site with Maud and copies assets |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Project, blog post and testimonial records |
//! | [`filter`] | Category derivation and filtering shared by both grids |
//! | [`slideshow`] | Slide rendering and modal state for project galleries |
//! | [`carousel`] | Testimonial rotation with a pluggable timer |
//! | [`reveal`] | One-way "has been seen" tracking for scroll animations |
//! | [`blog`] | Post ordering, slug lookup, reading time and share links |
//! | [`text`] | Truncation, initials and slugs |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Controllers Are Plain Rust
//!
//! The interactive pieces (filters, slideshow, carousel, reveal) are state
//! machines with no DOM in them. The generator uses them to pre-render every
//! state a page can show: each slide of every project, the initial carousel
//! card, the active filter. The bundled script only toggles classes between
//! those pre-rendered states. Its key, click and reveal handling is a
//! hand-written mirror of [`slideshow::Key`], [`slideshow::ClickTarget`]
//! and [`reveal::RevealTracker`]; the Rust models are unit tested and the
//! script itself is covered by the ignored `tests/browser_site.rs` suite.
//!
//! ## Time Is Injected
//!
//! [`carousel::Carousel`] schedules its rotation through a
//! [`carousel::Scheduler`]. Tests drive it with
//! [`carousel::VirtualScheduler`] and never sleep.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and all interpolation is escaped. Post bodies are the
//! one exception; they are Markdown (or inline HTML) written by the site
//! owner and rendered with `pulldown-cmark`.

pub mod blog;
pub mod carousel;
pub mod config;
pub mod content;
pub mod filter;
pub mod generate;
pub mod output;
pub mod reveal;
pub mod slideshow;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
