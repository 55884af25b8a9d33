//! Termline TUI — ratatui adapter for the termline console model.
//!
//! This crate owns everything toolkit-specific: translating crossterm key
//! events into the console's key vocabulary, theming, and drawing the
//! console into a frame. The core model never sees any of these types.
//!
//! # Modules
//!
//! - [`keys`] — crossterm `KeyEvent` translation
//! - [`theme`] — serializable color themes
//! - [`widget`] — the console view widget

pub mod keys;
pub mod theme;
pub mod widget;

pub use keys::translate;
pub use theme::{Color, Theme};
pub use widget::ConsoleView;
