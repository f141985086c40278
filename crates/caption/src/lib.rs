//! # caption
//!
//! Tag-based caption rendering for game screenshot overlays.
//!
//! A caption template is plain text with angle-bracket tags:
//!
//! ```text
//! <Vessel> over <Body><N><Date(d MMMM yyy)>, <Altitude>
//! ```
//!
//! Rendering tokenizes the template, then expands every tag from a read-only
//! [`Snapshot`] of the game state, a [`CalendarConfig`] and the user's
//! [`OverlayConfig`]. Unknown tags are written back unchanged and a tag whose
//! handler fails becomes `Error expanding <Tag>`; rendering itself never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use caption::{CalendarConfig, OverlayConfig, Renderer, Snapshot, Vessel};
//!
//! let overlay = OverlayConfig::new("<Vessel> on <Body> (<UNKNOWN>)");
//! let renderer = Renderer::new(CalendarConfig::default(), overlay);
//!
//! let snapshot = Snapshot::at(0.0).with_vessel(Vessel {
//!     name: "Kestrel".into(),
//!     body: "Mun".into(),
//!     ..Vessel::default()
//! });
//!
//! assert_eq!(renderer.render(&snapshot), "Kestrel on Mun (<UNKNOWN>)");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `context` | Snapshot types and the per-render context |
//! | `config` | Overlay settings and YAML/JSON loading |
//! | `registry` | Tag handlers and the registry |
//! | `expander` | Token expansion |
//! | `renderer` | `render` and `Renderer` |
//! | `tags` | Built-in tags |
//!
//! The tokenizer and calendar live in the `caption-tokenizer` and
//! `caption-calendar` crates and are re-exported here.

mod config;
mod context;
mod error;
mod expander;
mod registry;
mod renderer;
mod tags;
pub mod util;

pub use config::{load_file, Format, OverlayConfig, DEFAULT_DATE_FORMAT};
pub use context::{CrewMember, CrewRole, Orbit, RenderContext, Situation, Snapshot, Vessel};
pub use error::{ConfigError, TagError};
pub use expander::{expand, expand_into, Scope};
pub use registry::{default_registry, TagHandler, TagRegistry, TagRegistryBuilder, CUSTOM_TAG};
pub use renderer::{render, Renderer};

pub use caption_calendar::{CalendarConfig, CalendarError, CalendarUnits, TimeParts};
pub use caption_tokenizer::{tokenize, Token};
