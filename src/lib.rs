//! # Effect Wave
//!
//! The bilingual (Arabic/English) site of the Effect Wave marketing and media
//! production agency: a hash-routed single page with two visual themes, a
//! twinkling starfield behind every page, animated page transitions, and a
//! filterable media gallery with a lightbox.
//!
//! The same library builds twice:
//!
//! ```text
//! native    effect-wave build   →  dist/   (every page prerendered, both locales)
//! wasm32    web::start          →  boots on the prerendered markup and takes over
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared vocabulary: theme, locale, route, palette |
//! | [`router`] | Hash parsing and the path map; unknown paths become `NotFound` |
//! | [`store`] | Presentation state, its reducer and subscriber list, the app controller |
//! | [`transition`] | Exit-then-enter state machine keyed by `(theme, route)` |
//! | [`head`] | Per-page document metadata with exact teardown |
//! | [`starfield`] | Star population, frame pacing, visibility and resize handling |
//! | [`gallery`] | Media catalog, category filter and lightbox navigation |
//! | [`switcher`] | Theme switcher indicator and its attention nudge |
//! | [`contact`] | Contact form validation and the `mailto:` hand-off |
//! | [`content`] | Every visible string, per page, locale and theme |
//! | [`render`] | Maud renderers for the shell, the pages and the full document |
//! | [`config`] | Layered `config.toml` loading and validation |
//! | [`generate`] | Static prerender of every route in both locales |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Deterministic Core
//!
//! Nothing below [`render`] touches a browser. Time enters as `now_ms`
//! arguments, randomness as a [`rand::Rng`], and the environment through
//! small traits ([`store::Viewport`], [`head::DocumentHead`],
//! [`starfield::StarSurface`]). The wasm host implements them over
//! `web-sys`; tests implement them in memory. A missing environment is never
//! an error: the metadata manager without a head does nothing, and the
//! starfield without a canvas does not mount.
//!
//! ## Markup From One Place
//!
//! Pages are rendered with [Maud](https://maud.lambda.xyz/) as pure functions
//! of a state snapshot. The prerender and the browser call the same
//! functions, so what a crawler sees is what the runtime would draw for the
//! initial state. The browser swaps whole regions instead of diffing.
//!
//! ## Content as Tables
//!
//! Copy lives in `const`/`static` tables of [`types::Localized`] pairs, keyed
//! by theme where the two themes differ. [`content::audit`] walks every table
//! so `effect-wave check` can prove that no page is missing a string in
//! either locale.

pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod generate;
pub mod head;
pub mod output;
pub mod render;
pub mod router;
pub mod starfield;
pub mod store;
pub mod switcher;
pub mod transition;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;
