//! DOM wiring for the behaviour layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`start`] runs when the WASM module loads. It waits for the document to
//! finish parsing, reads the configuration block (which may sit anywhere in
//! the body), and mounts a [`Controller`] that lives for the rest of the page.
//! The controller injects the style block, resolves every element once,
//! registers one listener per behaviour whose elements exist, and routes each
//! event through [`ControllerCore`], applying the returned actions via
//! [`page::Page`]. A behaviour that cannot be wired is logged and skipped; the
//! others still mount.

mod elements;
mod listener;
mod page;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::ControllerCore;
use crate::error::Result;
use crate::scroll;
use crate::theme;

use elements::Elements;
use listener::Listener;
use page::Page;
use storage::LocalStorage;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(mount_for_page);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            web_sys::console::warn_1(&format!("cannot wait for DOMContentLoaded: {err:?}").into());
        }
    } else {
        mount_for_page();
    }
}

fn mount_for_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = read_config(&document);
    match Controller::mount(&window, config) {
        Ok(controller) => controller.keep_alive(),
        Err(err) => log::warn!("controller not mounted: {err}"),
    }
}

/// Load configuration from the optional JSON block and start logging.
fn read_config(document: &Document) -> Config {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, parse_error) = Config::from_embedded(raw.as_deref());
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    config
}

/// Intersection observer plus the callback it invokes. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A mounted behaviour controller. Dropping it detaches every listener and
/// disconnects the observer.
pub struct Controller {
    page: Rc<Page>,
    listeners: Vec<Listener>,
    _observer: Option<RevealObserver>,
}

impl Controller {
    /// Inject styles, resolve the page elements, restore the theme, and
    /// register listeners. A behaviour whose listener or observer cannot be
    /// registered is logged and left out.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] when the window has no document.
    pub fn mount(window: &Window, config: Config) -> Result<Self> {
        let config = config.with_valid_reveal_options();
        let document = window
            .document()
            .ok_or_else(|| crate::Error::Dom("window has no document".into()))?;
        let elements = Elements::resolve(&document, &config.selectors);
        let storage = LocalStorage::open(window);
        let stored = theme::load_preference(&storage, &config.theme_storage_key);
        let core = ControllerCore::new(config.clone(), stored, elements.reveal_targets.len());

        let page = Rc::new(Page {
            window: window.clone(),
            document,
            elements,
            classes: config.classes.clone(),
            storage_key: config.theme_storage_key.clone(),
            storage: RefCell::new(storage),
            core: RefCell::new(core),
            injected_style: RefCell::new(None),
        });

        let startup = page.core.borrow().startup();
        page.apply(startup);

        let mut controller = Self { page, listeners: Vec::new(), _observer: None };
        skip_on_error("nav toggle", controller.bind_nav_toggle());
        skip_on_error("smooth scroll", controller.bind_anchor_links());
        skip_on_error("section highlight", controller.bind_section_highlight());
        skip_on_error("header auto-hide", controller.bind_header());
        skip_on_error("theme toggle", controller.bind_theme_toggle());
        skip_on_error("reveal on view", controller.observe_reveal_targets(&config));
        log::info!("mounted {} listeners", controller.listeners.len());
        Ok(controller)
    }

    /// Whether this instance appended the style block.
    #[must_use]
    pub fn injected_styles(&self) -> bool {
        self.page.injected_style.borrow().is_some()
    }

    /// Keep the listeners registered for the lifetime of the page.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }

    fn bind_nav_toggle(&mut self) -> Result<()> {
        let (Some(toggle), Some(_)) = (&self.page.elements.nav_toggle, &self.page.elements.nav_menu) else {
            return Ok(());
        };
        let page = Rc::clone(&self.page);
        self.listeners.push(Listener::attach(toggle, "click", move |_| {
            let actions = page.core.borrow().on_nav_toggle(page.nav_state());
            page.apply(actions);
        })?);
        Ok(())
    }

    fn bind_anchor_links(&mut self) -> Result<()> {
        for link in &self.page.elements.anchor_links {
            let page = Rc::clone(&self.page);
            let href_source = link.clone();
            self.listeners.push(Listener::attach(link, "click", move |event| {
                event.prevent_default();
                let href = href_source.get_attribute("href").unwrap_or_default();
                let target_top = scroll::anchor_id(&href).and_then(|id| page.target_offset(id));
                let actions =
                    page.core
                        .borrow()
                        .on_anchor_click(target_top, page.elements.header_height(), page.nav_state());
                page.apply(actions);
            })?);
        }
        Ok(())
    }

    fn bind_section_highlight(&mut self) -> Result<()> {
        if self.page.elements.sections.is_empty() || self.page.elements.anchor_links.is_empty() {
            return Ok(());
        }
        let page = Rc::clone(&self.page);
        self.listeners.push(Listener::attach(&self.page.window, "scroll", move |_| {
            let bounds = page.elements.section_bounds();
            let actions = page.core.borrow_mut().on_scroll_sections(page.scroll_top(), &bounds);
            page.apply(actions);
        })?);
        Ok(())
    }

    fn bind_header(&mut self) -> Result<()> {
        if self.page.elements.header.is_none() {
            return Ok(());
        }
        let page = Rc::clone(&self.page);
        self.listeners.push(Listener::attach(&self.page.window, "scroll", move |_| {
            let actions = page.core.borrow_mut().on_scroll_header(page.scroll_top());
            page.apply(actions);
        })?);
        Ok(())
    }

    fn bind_theme_toggle(&mut self) -> Result<()> {
        let Some(toggle) = &self.page.elements.theme_toggle else {
            return Ok(());
        };
        let page = Rc::clone(&self.page);
        self.listeners.push(Listener::attach(toggle, "click", move |_| {
            let actions = page.core.borrow_mut().on_theme_toggle();
            page.apply(actions);
        })?);
        Ok(())
    }

    fn observe_reveal_targets(&mut self, config: &Config) -> Result<()> {
        if self.page.elements.reveal_targets.is_empty() {
            return Ok(());
        }
        let page = Rc::clone(&self.page);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(index) = page.elements.reveal_index(&entry.target()) else {
                        continue;
                    };
                    let actions = page.core.borrow_mut().on_intersection(index, entry.is_intersecting());
                    page.apply(actions);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &self.page.elements.reveal_targets {
            observer.observe(target);
        }
        self._observer = Some(RevealObserver { observer, _callback: callback });
        Ok(())
    }
}

fn skip_on_error(behaviour: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{behaviour} disabled: {err}");
    }
}
