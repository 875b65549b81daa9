//! One-shot reveal tracking for observed elements.
//!
//! The intersection observer is never told to stop watching an element, so it
//! keeps reporting elements that were already revealed. The tracker turns
//! that stream into exactly one reveal per element.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Revealed flags, indexed by the element's position in the observed set.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Record a visibility report. Returns `true` only for the first report
    /// that finds the element intersecting.
    pub fn on_visibility(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}
