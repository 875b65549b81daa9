//! Presentation rules injected at startup.
//!
//! Covers the open mobile menu, the hamburger-to-X transform, the active link
//! underline, the header slide transition, the reveal animation, and the
//! 768px breakpoint that hides the menu until it is opened.
//! Loaded from `src/assets/site.css` at compile time.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

pub const SITE_CSS: &str = include_str!("assets/site.css");
