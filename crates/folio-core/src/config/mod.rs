//! Configuration management for Folio.
//!
//! Settings ([`settings::Config`]), key bindings ([`keymap::Keymap`]) and
//! colours ([`theme::Theme`]) are TOML files loaded at startup. Every file
//! is optional.

pub mod keymap;
pub mod settings;
pub mod theme;
