//! Content loading.
//!
//! Reads the site config and the three JSON documents from the content root.
//! Each document is loaded independently: a missing file, a read error or a
//! malformed document degrades only its own section to [`Section::Failed`],
//! and the page renders an inline error message for that region while the
//! rest of the site is built normally. Nothing is retried.
//!
//! A broken `config.toml` is different: it is reported as an error and no
//! site is built.

use crate::blog;
use crate::config::{self, SiteConfig};
use crate::types::{BlogPost, Project, Testimonial};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{0} not found")]
    Missing(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate project id {0}")]
    DuplicateId(String),
    #[error("duplicate blog slug {0:?}")]
    DuplicateSlug(String),
}

/// Outcome of loading one document.
#[derive(Debug)]
pub enum Section<T> {
    Ready(Vec<T>),
    /// Load failed; carries the reason for logs and `check` output.
    Failed(String),
}

impl<T> Section<T> {
    pub fn from_result(result: Result<Vec<T>, LoadError>) -> Self {
        match result {
            Ok(items) => Section::Ready(items),
            Err(e) => Section::Failed(e.to_string()),
        }
    }

    /// Loaded items, or an empty slice for a failed section.
    pub fn items(&self) -> &[T] {
        match self {
            Section::Ready(items) => items.as_slice(),
            Section::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Ready(_) => None,
            Section::Failed(reason) => Some(reason.as_str()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready(_))
    }
}

/// Everything one build needs.
#[derive(Debug)]
pub struct Content {
    pub config: SiteConfig,
    pub projects: Section<Project>,
    /// Sorted newest first.
    pub posts: Section<BlogPost>,
    pub testimonials: Section<Testimonial>,
}

impl Content {
    /// Names of sections that failed to load, with their reasons.
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        [
            ("projects", self.projects.error()),
            ("blog", self.posts.error()),
            ("testimonials", self.testimonials.error()),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|e| (name, e)))
        .collect()
    }
}

/// Load config and all documents under `root`.
pub fn load(root: &Path) -> Result<Content, config::ConfigError> {
    let config = config::load_config(root)?;

    let projects = load_section("projects", || load_projects(&root.join(&config.data.projects)));
    let posts = load_section("blog", || load_posts(&root.join(&config.data.blog)));
    let testimonials = load_section("testimonials", || {
        read_json::<Testimonial>(&root.join(&config.data.testimonials))
    });

    if posts.is_ready() && !posts.items().is_empty() && config.site.base_url.is_empty() {
        warn!("site.base_url is not set; blog share links will be relative");
    }

    Ok(Content {
        config,
        projects,
        posts,
        testimonials,
    })
}

fn load_section<T>(name: &str, load: impl FnOnce() -> Result<Vec<T>, LoadError>) -> Section<T> {
    let section = Section::from_result(load());
    match &section {
        Section::Ready(items) => debug!(section = name, count = items.len(), "loaded"),
        Section::Failed(reason) => warn!(section = name, %reason, "failed to load"),
    }
    section
}

/// Read a JSON array document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load projects. Ids must be unique in their rendered form, since that is
/// what `data-project` attributes and the `slides` command match on.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, LoadError> {
    let projects: Vec<Project> = read_json(path)?;

    let mut ids = HashSet::new();
    for project in &projects {
        let key = project.id.to_string();
        if !ids.insert(key.clone()) {
            return Err(LoadError::DuplicateId(key));
        }
    }
    Ok(projects)
}

/// Load blog posts sorted newest first. Slugs must map to distinct pages.
pub fn load_posts(path: &Path) -> Result<Vec<BlogPost>, LoadError> {
    let mut posts: Vec<BlogPost> = read_json(path)?;

    let mut slugs = HashSet::new();
    for post in &posts {
        if !slugs.insert(blog::post_path(&post.slug)) {
            return Err(LoadError::DuplicateSlug(post.slug.clone()));
        }
        if blog::parse_date(&post.date).is_none() {
            warn!(slug = %post.slug, date = %post.date, "unparsable post date; listed last");
        }
    }

    blog::sort_by_date_desc(&mut posts);
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn loads_fixture_content() {
        let tmp = setup_fixtures();
        let content = load(tmp.path()).unwrap();
        assert!(content.failures().is_empty());
        assert_eq!(content.config.site.author, "Jane Doe");
        assert!(!content.projects.items().is_empty());
        assert!(!content.testimonials.items().is_empty());
    }

    #[test]
    fn posts_are_sorted_newest_first() {
        let tmp = setup_fixtures();
        let content = load(tmp.path()).unwrap();
        let dates: Vec<&str> = content.posts.items().iter().map(|p| p.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn missing_document_fails_only_its_section() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("data/testimonials.json")).unwrap();

        let content = load(tmp.path()).unwrap();
        assert!(content.projects.is_ready());
        assert!(content.posts.is_ready());
        assert!(content.testimonials.items().is_empty());
        let failures = content.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "testimonials");
        assert!(failures[0].1.contains("not found"));
    }

    #[test]
    fn malformed_document_fails_only_its_section() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("data/blog.json"), "{ not json").unwrap();

        let content = load(tmp.path()).unwrap();
        assert!(content.posts.error().unwrap().contains("invalid JSON"));
        assert!(content.projects.is_ready());
    }

    #[test]
    fn broken_config_is_fatal() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("config.toml"), "[site\n").unwrap();
        assert!(load(tmp.path()).is_err());
    }

    #[test]
    fn empty_root_degrades_every_section() {
        let tmp = TempDir::new().unwrap();
        let content = load(tmp.path()).unwrap();
        assert_eq!(content.failures().len(), 3);
    }

    #[test]
    fn similar_and_non_latin_titles_all_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "title": "Project 1"},
                {"id": 2, "title": "Project 2"},
                {"id": 3, "title": "Калькулятор"},
                {"id": 4, "title": "日本語"}
            ]"#,
        )
        .unwrap();
        let projects = load_projects(&path).unwrap();
        assert_eq!(projects.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        fs::write(&path, r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#).unwrap();
        assert!(matches!(load_projects(&path), Err(LoadError::DuplicateId(_))));
    }

    #[test]
    fn number_and_string_id_with_same_text_collide() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        fs::write(&path, r#"[{"id": 1, "title": "A"}, {"id": "1", "title": "B"}]"#).unwrap();
        match load_projects(&path) {
            Err(LoadError::DuplicateId(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.json");
        fs::write(
            &path,
            r#"[
                {"slug": "a", "title": "A", "date": "2024-01-01"},
                {"slug": "a", "title": "B", "date": "2024-02-01"}
            ]"#,
        )
        .unwrap();
        assert!(matches!(load_posts(&path), Err(LoadError::DuplicateSlug(_))));
    }

    #[test]
    fn non_latin_slugs_stay_distinct() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blog.json");
        fs::write(
            &path,
            r#"[
                {"slug": "привет", "title": "Привет", "date": "2024-01-01"},
                {"slug": "мир", "title": "Мир", "date": "2024-02-01"}
            ]"#,
        )
        .unwrap();
        let posts = load_posts(&path).unwrap();
        assert_eq!(posts.len(), 2);
    }
}
