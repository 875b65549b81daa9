//! Shared page handle and the DOM side of every [`Action`].

use std::cell::RefCell;

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::browser::elements::{self, Elements};
use crate::browser::storage::LocalStorage;
use crate::config::ClassNames;
use crate::consts::{ARIA_EXPANDED, STYLE_ELEMENT_ID};
use crate::controller::{Action, ControllerCore};
use crate::error::Result;
use crate::nav::NavState;
use crate::scroll::HeaderPosition;
use crate::styles::SITE_CSS;
use crate::theme::{self, ThemePreference, ThemeState};

/// Everything a handler needs. Shared by the listeners through `Rc`.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub elements: Elements,
    pub classes: ClassNames,
    pub storage_key: String,
    pub storage: RefCell<LocalStorage>,
    pub core: RefCell<ControllerCore>,
    /// Style block this instance appended, if any.
    pub injected_style: RefCell<Option<Element>>,
}

impl Page {
    /// Vertical scroll offset, falling back to the root's `scrollTop`.
    pub fn scroll_top(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(_) => self
                .elements
                .root
                .as_ref()
                .map_or(0.0, |root| f64::from(root.scroll_top())),
        }
    }

    pub fn nav_state(&self) -> NavState {
        self.elements.nav_state(&self.classes.active)
    }

    pub fn target_offset(&self, id: &str) -> Option<f64> {
        elements::offset_top_by_id(&self.document, id)
    }

    /// Apply actions in order. A failing action is logged and skipped.
    pub fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            if let Err(err) = self.apply_one(&action) {
                log::warn!("{action:?} failed: {err}");
            }
        }
    }

    fn apply_one(&self, action: &Action) -> Result<()> {
        match action {
            Action::InjectStyles => self.inject_styles(),
            Action::SetNavOpen(state) => self.set_nav_open(*state),
            Action::ScrollTo { top } => {
                self.scroll_to(*top);
                Ok(())
            }
            Action::HighlightSection(id) => self.highlight(id),
            Action::SetHeaderPosition(position) => self.set_header_position(*position),
            Action::ApplyTheme(state) => self.apply_theme(*state),
            Action::PersistTheme(preference) => self.persist_theme(*preference),
            Action::Reveal(index) => self.reveal(*index),
        }
    }

    /// Append the style block to `<head>` (or the root element). A page that
    /// already carries the block, from this or another instance, keeps it.
    fn inject_styles(&self) -> Result<()> {
        if self.injected_style.borrow().is_some() || self.document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return Ok(());
        }
        let parent = match self.document.head() {
            Some(head) => Element::from(head),
            None => match self.document.document_element() {
                Some(root) => root,
                None => return Ok(()),
            },
        };
        let style = self.document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(SITE_CSS));
        parent.append_child(&style)?;
        *self.injected_style.borrow_mut() = Some(style);
        Ok(())
    }

    fn set_nav_open(&self, state: NavState) -> Result<()> {
        if let Some(menu) = &self.elements.nav_menu {
            menu.class_list().toggle_with_force(&self.classes.active, state.open)?;
        }
        if let Some(toggle) = &self.elements.nav_toggle {
            toggle.class_list().toggle_with_force(&self.classes.active, state.open)?;
            toggle.set_attribute(ARIA_EXPANDED, state.aria_expanded())?;
        }
        Ok(())
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn highlight(&self, id: &str) -> Result<()> {
        let href = format!("#{id}");
        for link in &self.elements.anchor_links {
            link.class_list().remove_1(&self.classes.active)?;
        }
        if let Some(link) = self
            .elements
            .anchor_links
            .iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))
        {
            link.class_list().add_1(&self.classes.active)?;
        }
        Ok(())
    }

    fn set_header_position(&self, position: HeaderPosition) -> Result<()> {
        if let Some(header) = &self.elements.header {
            header.style().set_property("transform", position.transform())?;
        }
        Ok(())
    }

    fn apply_theme(&self, state: ThemeState) -> Result<()> {
        if let Some(root) = &self.elements.root {
            let classes = root.class_list();
            classes.toggle_with_force(&self.classes.dark, state.is_dark())?;
            classes.toggle_with_force(&self.classes.light, state.is_light_forced())?;
        }
        let glyph = state.glyph();
        if let Some(icon) = &self.elements.theme_icon {
            icon.class_list().remove_1(glyph.other().icon_class())?;
            icon.class_list().add_1(glyph.icon_class())?;
        } else if let Some(toggle) = &self.elements.theme_toggle {
            toggle.set_text_content(Some(glyph.symbol()));
        }
        Ok(())
    }

    fn persist_theme(&self, preference: ThemePreference) -> Result<()> {
        theme::save_preference(&mut *self.storage.borrow_mut(), &self.storage_key, preference)
    }

    fn reveal(&self, index: usize) -> Result<()> {
        if let Some(target) = self.elements.reveal_targets.get(index) {
            target.class_list().add_1(&self.classes.reveal)?;
        }
        Ok(())
    }
}
