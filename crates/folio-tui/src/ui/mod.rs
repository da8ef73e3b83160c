//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod chooser;
pub mod gallery;
pub mod popup;
pub mod profile_card;
pub mod statusbar;
