//! Runtime configuration.
//!
//! DESIGN
//! ======
//! Every field has a default matching the site's markup, so an absent or
//! partial JSON block still yields a working configuration. Pages that use
//! different class names can override individual selectors without restating
//! the rest.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::{Error, Result};

/// CSS selectors used to resolve the page elements once at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub header: String,
    pub theme_toggle: String,
    /// Icon element looked up inside the theme toggle.
    pub theme_icon: String,
    pub anchor_links: String,
    pub sections: String,
    pub reveal_targets: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".nav-toggle".into(),
            nav_menu: ".nav-menu".into(),
            header: ".header".into(),
            theme_toggle: "#theme-toggle".into(),
            theme_icon: "i".into(),
            anchor_links: ".nav-link[href^=\"#\"]".into(),
            sections: "section[id]".into(),
            reveal_targets: ".research-card, .education-item, .contact-item, .publication-card".into(),
        }
    }
}

/// Presentation classes toggled by the behaviours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub active: String,
    pub reveal: String,
    pub dark: String,
    pub light: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            active: consts::ACTIVE_CLASS.into(),
            reveal: consts::REVEAL_CLASS.into(),
            dark: consts::DARK_CLASS.into(),
            light: consts::LIGHT_CLASS.into(),
        }
    }
}

/// Top-level configuration for a controller instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub scroll_lookahead_px: f64,
    pub header_hide_after_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub theme_storage_key: String,
    pub inject_styles: bool,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            scroll_lookahead_px: consts::SCROLL_LOOKAHEAD_PX,
            header_hide_after_px: consts::HEADER_HIDE_AFTER_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.into(),
            theme_storage_key: consts::THEME_STORAGE_KEY.into(),
            inject_styles: true,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Parse a JSON configuration block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] when the input is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.with_valid_reveal_options())
    }

    /// Resolve the optional embedded JSON block. An absent block yields the
    /// defaults; a malformed one yields the defaults plus the parse error for
    /// the caller to log once logging is up.
    #[must_use]
    pub fn from_embedded(raw: Option<&str>) -> (Self, Option<Error>) {
        match raw.map(Self::from_json) {
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
            None => (Self::default(), None),
        }
    }

    /// Replace observer options the browser would reject with their defaults,
    /// so a bad value costs nothing more than the default reveal timing.
    #[must_use]
    pub fn with_valid_reveal_options(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            log::warn!("revealThreshold {} outside [0, 1]; using default", self.reveal_threshold);
            self.reveal_threshold = consts::REVEAL_THRESHOLD;
        }
        if !is_valid_root_margin(&self.reveal_root_margin) {
            log::warn!("revealRootMargin {:?} is not a valid margin; using default", self.reveal_root_margin);
            self.reveal_root_margin = consts::REVEAL_ROOT_MARGIN.into();
        }
        self
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// `rootMargin` syntax: one to four lengths, each `0`, `<n>px` or `<n>%`.
#[must_use]
pub fn is_valid_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    if parts.is_empty() || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|part| {
        if *part == "0" {
            return true;
        }
        let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
        number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite))
    })
}
