//! Browser behaviour layer for a static academic website.
//!
//! This crate is compiled to WebAssembly and attached to an already-rendered
//! page. It owns the small amount of interactive behaviour the page needs:
//! the mobile menu toggle, smooth in-page scrolling, active-link highlighting,
//! the hide-on-scroll header, the persisted light/dark theme, and one-shot
//! reveal animations. All decisions are made by the browser-independent
//! [`controller::ControllerCore`]; the `browser` feature adds the `web-sys`
//! layer that resolves elements, registers listeners and applies the
//! resulting [`controller::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable [`controller::ControllerCore`] and the [`controller::Action`] it emits |
//! | [`nav`] | Mobile menu open/closed state |
//! | [`scroll`] | Anchor targets, active-section matching, header auto-hide |
//! | [`theme`] | Theme preference, theme state machine, preference storage seam |
//! | [`reveal`] | One-shot reveal tracking for observed elements |
//! | [`styles`] | Injected presentation rules |
//! | [`config`] | Runtime configuration (selectors, offsets, class names) |
//! | [`consts`] | Default numeric and string constants |
//! | [`error`] | Crate error type |
//! | `browser` | DOM wiring (only with the `browser` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod styles;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::Config;
pub use error::{Error, Result};
