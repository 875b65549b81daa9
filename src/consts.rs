//! Default constants for the behaviour layer.

// ── Scrolling ───────────────────────────────────────────────────

/// Lookahead added to the scroll offset before matching sections.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// The header only hides once the page is scrolled past this offset.
pub const HEADER_HIDE_AFTER_PX: f64 = 100.0;

/// Header transform while visible.
pub const HEADER_SHOWN_TRANSFORM: &str = "translateY(0)";

/// Header transform while hidden above the viewport.
pub const HEADER_HIDDEN_TRANSFORM: &str = "translateY(-100%)";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; elements must be 50px inside the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Classes and attributes ──────────────────────────────────────

/// State class for the open menu, the open toggle, and the active link.
pub const ACTIVE_CLASS: &str = "active";

/// Class added to an element once it has been revealed.
pub const REVEAL_CLASS: &str = "animate-in";

/// Dark presentation class on the document root.
pub const DARK_CLASS: &str = "dark-mode";

/// Explicit light marker on the document root; overrides a dark system scheme.
pub const LIGHT_CLASS: &str = "light-mode";

/// Accessibility attribute mirrored from the menu state.
pub const ARIA_EXPANDED: &str = "aria-expanded";

// ── Storage ─────────────────────────────────────────────────────

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Injection ───────────────────────────────────────────────────

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "folio-injected-styles";

/// Id of the optional JSON configuration `<script>` element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
