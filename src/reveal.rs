//! One-way scroll reveal tracking.
//!
//! Elements start hidden and become visible the first time at least
//! `threshold` of their area intersects the viewport. Visibility never goes
//! back: scrolling away leaves a revealed element revealed.

use std::collections::HashMap;

/// Stock fraction of an element that must be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Visibility state of observed elements, keyed by element id.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    elements: HashMap<String, bool>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elements: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `id`. Elements added after the first pass (cards
    /// rendered after a load) go through here too. Re-observing an element
    /// keeps its state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    /// Observe a batch of elements.
    pub fn observe_all<I, T>(&mut self, ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for id in ids {
            self.observe(id);
        }
    }

    /// Intersection callback. Returns `true` only when this call revealed
    /// the element. Unobserved ids are ignored.
    pub fn on_intersect(&mut self, id: &str, ratio: f64) -> bool {
        match self.elements.get_mut(id) {
            Some(visible) if !*visible && ratio >= self.threshold => {
                *visible = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn visible_count(&self) -> usize {
        self.elements.values().filter(|&&v| v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_threshold() {
        let mut tracker = RevealTracker::default();
        tracker.observe("about");
        assert!(!tracker.on_intersect("about", 0.05));
        assert!(!tracker.is_visible("about"));
        assert!(tracker.on_intersect("about", 0.1));
        assert!(tracker.is_visible("about"));
    }

    #[test]
    fn reveal_is_irreversible() {
        let mut tracker = RevealTracker::default();
        tracker.observe("card-1");
        tracker.on_intersect("card-1", 0.5);
        tracker.on_intersect("card-1", 0.0);
        assert!(tracker.is_visible("card-1"));
        // Only the first crossing reports a reveal
        assert!(!tracker.on_intersect("card-1", 0.9));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersect("ghost", 1.0));
        assert!(!tracker.is_visible("ghost"));
        assert!(!tracker.is_observed("ghost"));
    }

    #[test]
    fn late_observation_after_load() {
        let mut tracker = RevealTracker::new(0.25);
        tracker.observe_all(["hero", "projects"]);
        tracker.on_intersect("hero", 1.0);

        // Cards appear after the data load
        tracker.observe_all(vec!["card-1".to_string(), "card-2".to_string()]);
        assert!(tracker.on_intersect("card-2", 0.3));
        assert_eq!(tracker.visible_count(), 2);
    }

    #[test]
    fn reobserve_keeps_revealed_state() {
        let mut tracker = RevealTracker::default();
        tracker.observe("card");
        tracker.on_intersect("card", 1.0);
        tracker.observe("card");
        assert!(tracker.is_visible("card"));
    }
}
