//! Theme preference and the light/dark state machine.
//!
//! DESIGN
//! ======
//! Three states are reachable: `Dark`, `LightExplicit`, and `SystemDefault`.
//! Only the first two are ever persisted. `SystemDefault` applies no class at
//! all, so the stylesheet's `prefers-color-scheme` rules decide. The explicit
//! light marker exists so a stored `"light"` still wins on a system that
//! prefers dark.
//!
//! Storage goes through [`PreferenceStore`] so the state machine can be
//! exercised without a browser. Reads are best-effort: any failure is treated
//! as "no preference".

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A theme explicitly chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(Error::UnknownTheme(other.to_owned())),
        }
    }
}

/// Icon shown on the theme toggle. It advertises the theme the toggle
/// switches *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
}

impl Glyph {
    /// Icon-font class for an `<i>` element inside the toggle.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Sun => "fa-sun",
            Self::Moon => "fa-moon",
        }
    }

    /// The opposite glyph, whose class is removed when this one is shown.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Sun => Self::Moon,
            Self::Moon => Self::Sun,
        }
    }

    /// Text fallback when the toggle has no icon element.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "\u{2600}",
            Self::Moon => "\u{263E}",
        }
    }
}

/// Current presentation of the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeState {
    Dark,
    LightExplicit,
    #[default]
    SystemDefault,
}

impl ThemeState {
    /// Startup state for a stored preference (or none).
    #[must_use]
    pub fn from_preference(preference: Option<ThemePreference>) -> Self {
        match preference {
            Some(ThemePreference::Dark) => Self::Dark,
            Some(ThemePreference::Light) => Self::LightExplicit,
            None => Self::SystemDefault,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Whether the explicit light marker is on the root.
    #[must_use]
    pub fn is_light_forced(self) -> bool {
        self == Self::LightExplicit
    }

    /// Next state when the toggle is activated, with the value to persist.
    #[must_use]
    pub fn toggled(self) -> (Self, ThemePreference) {
        if self.is_dark() {
            (Self::LightExplicit, ThemePreference::Light)
        } else {
            (Self::Dark, ThemePreference::Dark)
        }
    }

    #[must_use]
    pub fn glyph(self) -> Glyph {
        if self.is_dark() { Glyph::Sun } else { Glyph::Moon }
    }
}

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the stored preference. Unreadable storage and unknown values both
/// count as "no preference".
#[must_use]
pub fn load_preference(store: &impl PreferenceStore, key: &str) -> Option<ThemePreference> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("theme preference unavailable, using system default: {err}");
            return None;
        }
    };
    match raw.parse() {
        Ok(preference) => Some(preference),
        Err(err) => {
            log::warn!("ignoring stored theme: {err}");
            None
        }
    }
}

/// Persist the preference under `key`.
///
/// # Errors
///
/// Propagates the store's error; callers log it and keep the new
/// presentation.
pub fn save_preference(store: &mut impl PreferenceStore, key: &str, preference: ThemePreference) -> Result<()> {
    store.set(key, preference.as_str())
}
