//! # Portfolio Behavior
//!
//! Client-side behavior for a static personal portfolio page, compiled to
//! WebAssembly. One module is loaded per page; on start it attaches six
//! independent behaviors to the document:
//!
//! ```text
//! #year               ← current year, written once
//! .theme-toggle       → light/dark theme, persisted in localStorage
//! .nav-toggle         → opens/closes #nav-menu, mirrors aria-expanded
//! a[href^="#"]        → smooth scroll to the fragment target
//! .bar[data-level]    → fills to its level once it scrolls into view
//! #contactForm        → validates, then opens a mailto: link
//! ```
//!
//! None of the behaviors know about each other. They share only the document
//! and the storage.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme resolution (storage → system hint → fallback) and the `ThemeController` |
//! | [`nav`] | Mobile menu open/close rules |
//! | [`scroll`] | Fragment-link interception and the smooth/jump scroll capability |
//! | [`skills`] | Skill-bar level parsing, one-shot fill, reveal capability |
//! | [`contact`] | Form validation and `mailto:` construction |
//! | [`config`] | TOML behavior config: defaults, merging, validation |
//! | [`platform`] | Fallible storage and media-query access traits |
//! | `demo` | Maud-rendered demo page carrying the full DOM contract (`cli` feature) |
//! | [`logging`] | `tracing` subscribers for the console and the CLI |
//! | `web` | `web-sys` bindings and the wasm entry point (wasm32 only) |
//!
//! # Design Decisions
//!
//! ## Logic Behind Traits, DOM at the Edge
//!
//! Every behavior is written against a small trait (`ThemeSurface`,
//! `NavSurface`, `SkillBar`, `Scroller`, `PreferenceStore`, ...). The `web`
//! module implements them for `web-sys` types; the tests implement them with
//! recording fakes. The rules of each behavior are therefore exercised
//! natively with `cargo test`, no browser needed. The `web` bindings have
//! their own tests that run in a headless browser through
//! `wasm-pack test --headless --chrome --no-default-features`.
//!
//! ## Native Tools Behind a Feature
//!
//! The CLI and the demo renderer pull in `clap`, `maud` and `serde_json`.
//! They sit behind the default `cli` feature; the wasm module is built with
//! `wasm-pack build --target web --no-default-features` and links none of it.
//!
//! ## Failures Are Absorbed
//!
//! Nothing on a portfolio page is worth breaking the page for. Storage and
//! `matchMedia` access return `Result`s with documented fallbacks, missing
//! elements turn their feature off, and missing browser capabilities select a
//! fallback implementation at startup. Failures are logged through `tracing`
//! and never propagate past the initializer that hit them.
//!
//! ## Configurable Strings
//!
//! The stock page is French. The validation message, mail labels, subject
//! template, recipient and storage key all live in [`config::BehaviorConfig`]
//! and can be overridden with an inline TOML block on the page.

pub mod config;
pub mod contact;
#[cfg(feature = "cli")]
pub mod demo;
pub mod logging;
pub mod nav;
pub mod platform;
pub mod scroll;
pub mod skills;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
