//! Testimonial carousel with a restartable auto-advance timer.
//!
//! The timer is an explicit schedule/cancel pair behind the [`Scheduler`]
//! trait rather than a free-running interval. Every manual navigation
//! cancels the pending advance and schedules a fresh one, so the carousel
//! holds at most one pending advance at any time and a user click is never
//! immediately followed by an automatic jump.
//!
//! ```text
//! new ──schedule──▶ pending(t0)
//! fire(t0) ──show(current + 1)──schedule──▶ pending(t1)
//! next()   ──cancel(t1)──show──schedule──▶ pending(t2)
//! fire(t1) ──ignored (stale)
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle of a scheduled advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// One-shot timer facility the carousel runs against.
pub trait Scheduler {
    /// Arrange for a callback `after` from now.
    fn schedule(&mut self, after: Duration) -> TimerId;
    /// Drop a pending callback. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Used by the generator and tests: call [`advance`](Self::advance)
/// to move time forward and feed the returned ids to [`Carousel::fire`].
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, Duration>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the ids that came due, in deadline
    /// order. Fired ids are no longer pending.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.next_due(until) {
            fired.push(id);
        }
        self.now = until;
        fired
    }

    /// Pop the earliest callback due at or before `until` and move the clock
    /// to its deadline, so a callback that reschedules counts from the
    /// moment it fired. Ties go to the older id.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerId> {
        let (deadline, id) = self
            .pending
            .iter()
            .filter(|&(_, &deadline)| deadline <= until)
            .map(|(&id, &deadline)| (deadline, id))
            .min()?;
        self.pending.remove(&id);
        self.now = self.now.max(deadline);
        Some(id)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, after: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, self.now + after);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

/// Carousel state over `len` testimonial cards.
#[derive(Debug)]
pub struct Carousel<S: Scheduler> {
    len: usize,
    current: usize,
    interval: Duration,
    scheduler: S,
    pending: Option<TimerId>,
}

impl<S: Scheduler> Carousel<S> {
    /// Create a carousel showing card 0 and schedule the first advance.
    ///
    /// An empty carousel renders nothing and never schedules.
    pub fn new(len: usize, interval: Duration, scheduler: S) -> Self {
        let mut carousel = Self {
            len,
            current: 0,
            interval,
            scheduler,
            pending: None,
        };
        carousel.restart();
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active card, `None` for an empty carousel.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Active flag for every card (and its indicator dot).
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.current).collect()
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Activate card `index`, wrapped into range. Does not touch the timer.
    pub fn show(&mut self, index: isize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.current = index.rem_euclid(self.len as isize) as usize;
        Some(self.current)
    }

    pub fn next(&mut self) -> Option<usize> {
        let shown = self.show(self.current as isize + 1);
        self.restart();
        shown
    }

    pub fn prev(&mut self) -> Option<usize> {
        let shown = self.show(self.current as isize - 1);
        self.restart();
        shown
    }

    /// Direct selection through an indicator dot.
    pub fn select(&mut self, index: isize) -> Option<usize> {
        let shown = self.show(index);
        self.restart();
        shown
    }

    /// Timer callback. Only the currently pending id advances the carousel;
    /// returns whether it did.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.show(self.current as isize + 1);
        self.restart();
        true
    }

    /// Cancel the pending advance (if any) and schedule a fresh one.
    fn restart(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        if !self.is_empty() {
            self.pending = Some(self.scheduler.schedule(self.interval));
        }
    }
}

impl Carousel<VirtualScheduler> {
    /// Advance the virtual clock and deliver every due callback.
    ///
    /// Callbacks fire one deadline at a time, so a tick spanning several
    /// intervals advances once per interval.
    pub fn tick(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(id) = self.scheduler.next_due(until) {
            self.fire(id);
        }
        self.scheduler.advance(until - self.scheduler.now());
    }
}
