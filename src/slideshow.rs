//! Project slideshow: cursor arithmetic and slide rendering.
//!
//! An open project shows its images in order followed by one synthesized
//! "details" slide, so a project with `n` images has `n + 1` cursor
//! positions. Navigation wraps in both directions.
//!
//! ```text
//! images: [a, b, c]
//! cursor:  0  1  2  3
//!          a  b  c  details
//! ```
//!
//! [`render`] is a pure function of a project and a cursor. The generator
//! calls it for every position to pre-render the modal, and [`Slideshow`]
//! calls it for the position it currently holds.

use crate::types::{Project, ProjectId};

/// Counter text shown on the details slide.
pub const DETAILS_COUNTER: &str = "Project Details";

/// Number of cursor positions for a project: its images plus the details slide.
pub fn slide_count(project: &Project) -> usize {
    project.images.len() + 1
}

/// Wrap any integer position into `[0, count)`.
pub fn wrap(position: isize, count: usize) -> usize {
    debug_assert!(count > 0);
    position.rem_euclid(count as isize) as usize
}

/// What a single slide displays.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideView<'a> {
    Image {
        src: &'a str,
        /// `None` hides the caption row.
        caption: Option<&'a str>,
        counter: String,
    },
    Details {
        title: &'a str,
        details: &'a str,
        link: Option<&'a str>,
        counter: &'static str,
    },
}

impl SlideView<'_> {
    pub fn counter(&self) -> &str {
        match self {
            SlideView::Image { counter, .. } => counter.as_str(),
            SlideView::Details { counter, .. } => *counter,
        }
    }

    pub fn is_details(&self) -> bool {
        matches!(self, SlideView::Details { .. })
    }
}

/// Render the slide at `cursor`. Cursors past the last image resolve to the
/// details slide.
pub fn render(project: &Project, cursor: usize) -> SlideView<'_> {
    let image_count = project.images.len();
    match project.images.get(cursor) {
        Some(image) => SlideView::Image {
            src: &image.url,
            caption: image
                .caption
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty()),
            counter: format!("Image {} of {}", cursor + 1, image_count),
        },
        None => SlideView::Details {
            title: &project.title,
            details: project.details_text(),
            link: project
                .link
                .as_deref()
                .filter(|l| !l.is_empty() && *l != "#"),
            counter: DETAILS_COUNTER,
        },
    }
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Where a click landed relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CloseButton,
    /// The dimmed area around the content box.
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenSlide {
    project: usize,
    cursor: usize,
}

/// Slideshow modal state for one page.
#[derive(Debug, Clone)]
pub struct Slideshow {
    projects: Vec<Project>,
    open: Option<OpenSlide>,
}

impl Slideshow {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            open: None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Open the project with `id` at its first slide.
    ///
    /// Returns `false` and changes nothing when no project matches.
    pub fn open(&mut self, id: &ProjectId) -> bool {
        let found = self.projects.iter().position(|p| &p.id == id);
        self.open_at(found)
    }

    /// Open by a raw id as written on a card or the command line.
    pub fn open_key(&mut self, raw: &str) -> bool {
        let found = self.projects.iter().position(|p| p.id.matches(raw));
        self.open_at(found)
    }

    fn open_at(&mut self, found: Option<usize>) -> bool {
        match found {
            Some(project) => {
                self.open = Some(OpenSlide { project, cursor: 0 });
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Page scrolling is suspended while the modal is visible.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn current(&self) -> Option<&Project> {
        self.open.map(|o| &self.projects[o.project])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.open.map(|o| o.cursor)
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// Move directly to `position`, wrapped into range.
    pub fn jump(&mut self, position: isize) {
        if let Some(open) = self.open.as_mut() {
            let count = slide_count(&self.projects[open.project]);
            open.cursor = wrap(position, count);
        }
    }

    fn step(&mut self, delta: isize) {
        if let Some(open) = self.open.as_mut() {
            let count = slide_count(&self.projects[open.project]);
            open.cursor = wrap(open.cursor as isize + delta, count);
        }
    }

    /// The slide currently on screen, `None` while closed.
    pub fn view(&self) -> Option<SlideView<'_>> {
        self.open
            .map(|o| render(&self.projects[o.project], o.cursor))
    }

    /// Keyboard handling; ignored entirely while closed.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Other => return false,
        }
        true
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::CloseButton | ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => {}
        }
    }
}
