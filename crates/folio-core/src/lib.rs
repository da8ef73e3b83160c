//! Folio core library — UI-agnostic profile card and gallery logic.
//!
//! `folio-core` holds the state machines behind the two Folio widgets. It
//! does no terminal I/O, so every transition is testable headlessly.
//!
//! # Modules
//!
//! - [`profile`] — Tab selection, indicator geometry and profile text.
//! - [`gallery`] — Bounded image list, carousel focus, chooser overlay, upload handles.
//! - [`catalog`] — Public image manifest loading.
//! - [`fs`] — Image-only directory listing for the upload browser.
//! - [`config`] — TOML settings, key bindings and theme.
//! - [`action`] / [`event`] — Bindable actions and UI → widget commands.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod gallery;
pub mod profile;

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use catalog::{load_catalog, DefaultFetcher, ManifestFetcher, ManifestSource};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use gallery::{Direction, GalleryWidget, ImageRef, MAX_IMAGES};
pub use profile::{ElementBounds, IndicatorGeometry, ProfileCard, ProfileContent, Tab};
