//! Scroll geometry: anchor targets, active-section matching, header auto-hide.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_HIDDEN_TRANSFORM, HEADER_SHOWN_TRANSFORM};

/// Extract the target id from an in-page link's `href`.
///
/// Returns `None` for hrefs that do not start with `#` and for a bare `#`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `target_top` just below a header of
/// `header_height`.
#[must_use]
pub fn scroll_target(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

/// Vertical extent of one `section[id]` element, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `top <= position < top + height`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The section whose range contains `scroll_y + lookahead`.
///
/// Sections are checked in document order and the last match wins, so
/// overlapping ranges resolve to the later section.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Where the header sits after a scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderPosition {
    #[default]
    Shown,
    Hidden,
}

impl HeaderPosition {
    /// CSS `transform` value for this position.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => HEADER_SHOWN_TRANSFORM,
            Self::Hidden => HEADER_HIDDEN_TRANSFORM,
        }
    }
}

/// Scroll-direction tracker for the hide-on-scroll header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderAutoHide {
    last_scroll_top: f64,
    hide_after: f64,
}

impl HeaderAutoHide {
    #[must_use]
    pub fn new(hide_after: f64) -> Self {
        Self { last_scroll_top: 0.0, hide_after }
    }

    /// Offset seen on the previous event.
    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Record a scroll event. Hidden only while moving down past the
    /// threshold; every other event shows the header.
    pub fn on_scroll(&mut self, scroll_top: f64) -> HeaderPosition {
        let position = if scroll_top > self.last_scroll_top && scroll_top > self.hide_after {
            HeaderPosition::Hidden
        } else {
            HeaderPosition::Shown
        };
        self.last_scroll_top = scroll_top;
        position
    }
}
