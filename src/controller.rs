use crate::config::Config;
use crate::nav::NavState;
use crate::reveal::RevealTracker;
use crate::scroll::{self, HeaderAutoHide, HeaderPosition, SectionBounds};
use crate::theme::{ThemePreference, ThemeState};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// DOM changes requested by the core for the browser layer to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add the presentation style block unless this instance already has.
    InjectStyles,
    /// Set the open class on toggle and menu, and `aria-expanded` on the toggle.
    SetNavOpen(NavState),
    /// Smooth-scroll the window to this vertical offset.
    ScrollTo { top: f64 },
    /// Clear every nav link's active class, then mark the link for this section.
    HighlightSection(String),
    /// Move the header.
    SetHeaderPosition(HeaderPosition),
    /// Put the root classes and the toggle icon in line with this state.
    ApplyTheme(ThemeState),
    /// Write the preference to storage.
    PersistTheme(ThemePreference),
    /// Add the reveal class to the observed element at this index.
    Reveal(usize),
}

/// Core controller state — everything that doesn't depend on the DOM.
///
/// Separated from the browser `Controller` so it can be tested without
/// WASM/browser dependencies. Each behaviour owns its own field; no handler
/// reads another behaviour's state.
#[derive(Debug, Clone)]
pub struct ControllerCore {
    pub config: Config,
    pub header: HeaderAutoHide,
    pub active_section: Option<String>,
    pub theme: ThemeState,
    pub reveal: RevealTracker,
}

impl Default for ControllerCore {
    fn default() -> Self {
        Self::new(Config::default(), None, 0)
    }
}

impl ControllerCore {
    /// `stored_theme` is the preference read at startup; `reveal_count` the
    /// number of elements handed to the intersection observer.
    #[must_use]
    pub fn new(config: Config, stored_theme: Option<ThemePreference>, reveal_count: usize) -> Self {
        let header = HeaderAutoHide::new(config.header_hide_after_px);
        Self {
            config,
            header,
            active_section: None,
            theme: ThemeState::from_preference(stored_theme),
            reveal: RevealTracker::new(reveal_count),
        }
    }

    /// Actions to run once before any user interaction. Styles go in first so
    /// the theme classes land on a styled page.
    #[must_use]
    pub fn startup(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if self.config.inject_styles {
            actions.push(Action::InjectStyles);
        }
        actions.push(Action::ApplyTheme(self.theme));
        actions
    }

    // --- Navigation ---

    /// The menu toggle was activated while the menu was `current`.
    #[must_use]
    pub fn on_nav_toggle(&self, current: NavState) -> Vec<Action> {
        vec![Action::SetNavOpen(current.toggled())]
    }

    /// An in-page link was clicked. `target_top` is the resolved target's
    /// offset, `None` when the id matched nothing.
    #[must_use]
    pub fn on_anchor_click(&self, target_top: Option<f64>, header_height: f64, menu: NavState) -> Vec<Action> {
        let Some(target_top) = target_top else {
            return Vec::new();
        };
        let mut actions = vec![Action::ScrollTo { top: scroll::scroll_target(target_top, header_height) }];
        if menu.open {
            actions.push(Action::SetNavOpen(NavState::new(false)));
        }
        actions
    }

    // --- Scroll ---

    /// Match the scroll offset against the sections. Emits a highlight only
    /// when a section matches and differs from the one already highlighted.
    pub fn on_scroll_sections(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> Vec<Action> {
        let Some(id) = scroll::active_section(sections, scroll_y, self.config.scroll_lookahead_px) else {
            return Vec::new();
        };
        if self.active_section.as_deref() == Some(id) {
            return Vec::new();
        }
        self.active_section = Some(id.to_owned());
        vec![Action::HighlightSection(id.to_owned())]
    }

    /// Hide or restore the header for the new offset.
    pub fn on_scroll_header(&mut self, scroll_top: f64) -> Vec<Action> {
        vec![Action::SetHeaderPosition(self.header.on_scroll(scroll_top))]
    }

    // --- Theme ---

    pub fn on_theme_toggle(&mut self) -> Vec<Action> {
        let (next, preference) = self.theme.toggled();
        self.theme = next;
        vec![Action::ApplyTheme(next), Action::PersistTheme(preference)]
    }

    // --- Reveal ---

    /// The observer reported the element at `index`.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<Action> {
        if self.reveal.on_visibility(index, is_intersecting) {
            vec![Action::Reveal(index)]
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}
