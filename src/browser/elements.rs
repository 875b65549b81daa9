//! Page elements, resolved once at startup.
//!
//! Every lookup fails soft: a missing element becomes `None` (or an empty
//! list) and only the behaviour that needs it stays inert.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::Selectors;
use crate::nav::NavState;
use crate::scroll::SectionBounds;

pub struct Elements {
    pub root: Option<Element>,
    pub nav_toggle: Option<HtmlElement>,
    pub nav_menu: Option<HtmlElement>,
    pub header: Option<HtmlElement>,
    pub theme_toggle: Option<HtmlElement>,
    pub theme_icon: Option<Element>,
    pub anchor_links: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub reveal_targets: Vec<Element>,
}

impl Elements {
    pub fn resolve(document: &Document, selectors: &Selectors) -> Self {
        let theme_toggle = query_one::<HtmlElement>(document, &selectors.theme_toggle);
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|toggle| query_within(toggle, &selectors.theme_icon));
        let elements = Self {
            root: document.document_element(),
            nav_toggle: query_one(document, &selectors.nav_toggle),
            nav_menu: query_one(document, &selectors.nav_menu),
            header: query_one(document, &selectors.header),
            theme_toggle,
            theme_icon,
            anchor_links: query_all(document, &selectors.anchor_links),
            sections: query_all(document, &selectors.sections),
            reveal_targets: query_all(document, &selectors.reveal_targets),
        };
        log::debug!(
            "resolved {} anchor links, {} sections, {} reveal targets",
            elements.anchor_links.len(),
            elements.sections.len(),
            elements.reveal_targets.len()
        );
        elements
    }

    /// Menu state read from the menu's class list. Closed when there is no menu.
    pub fn nav_state(&self, active_class: &str) -> NavState {
        let open = self
            .nav_menu
            .as_ref()
            .is_some_and(|menu| menu.class_list().contains(active_class));
        NavState::new(open)
    }

    /// Rendered header height, 0 without a header.
    pub fn header_height(&self) -> f64 {
        self.header
            .as_ref()
            .map_or(0.0, |header| f64::from(header.offset_height()))
    }

    /// Current geometry of every section, in document order.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    /// Index of `target` in the observed set.
    pub fn reveal_index(&self, target: &Element) -> Option<usize> {
        self.reveal_targets.iter().position(|el| el == target)
    }
}

/// Offset of the element with this id, when it exists and is an HTML element.
pub fn offset_top_by_id(document: &Document, id: &str) -> Option<f64> {
    let element = cast::<HtmlElement>(document.get_element_by_id(id)?)?;
    Some(f64::from(element.offset_top()))
}

/// Downcast, treating a type mismatch as absence.
fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(Some(element)) => cast(element),
        Ok(None) => {
            log::debug!("no element for {selector:?}; behaviour disabled");
            None
        }
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(cast::<T>)
        .collect()
}
