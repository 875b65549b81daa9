//! Mobile menu state.
//!
//! The menu keeps no state of its own between events: the browser layer reads
//! the menu's class list on every activation and builds a [`NavState`] from
//! it, so the DOM stays the single source of truth.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// State after the toggle control is activated.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
