//! Reveal-once bookkeeping for scroll animations.
//!
//! The host observes each element with an `IntersectionObserver` and reports
//! the element's index when it becomes visible. An index is revealed exactly
//! once; later visibility changes are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Elements opted in with the `fade-in` class.
pub const REVEAL_OPT_IN_SELECTOR: &str = ".fade-in";

/// Structural blocks that are revealed without opting in; they get
/// `fade-in` added before observation starts.
pub const REVEAL_STRUCTURAL_SELECTOR: &str =
    ".section-header, .skill-card, .project-card, .about-content, .contact-content";

/// Data attribute carrying an observed element's index.
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    observed: usize,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more element and return its index.
    pub fn observe(&mut self) -> usize {
        let index = self.observed;
        self.observed += 1;
        index
    }

    /// Record that `index` is visible. Returns `true` only the first time.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        if index >= self.observed {
            return false;
        }
        self.revealed.insert(index)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }
}
