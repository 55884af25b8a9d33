//! Theme configuration for the console widget.
//!
//! Defines color schemes that control how history lines, the prompt, and
//! widget chrome are colored. Themes are serializable so they can be loaded
//! from configuration files.

use ratatui::style::Color as TuiColor;
use serde::{Deserialize, Serialize};

use termline_core::buffer::ColorTag;


/// A named color that can be converted to a ratatui color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    Gray,
    DarkGray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    Rgb(u8, u8, u8),
}


impl Color {
    /// The ratatui color this name maps to.
    pub fn to_tui(&self) -> TuiColor {
        match self {
            Color::Default => TuiColor::Reset,
            Color::Red => TuiColor::Red,
            Color::Green => TuiColor::Green,
            Color::Yellow => TuiColor::Yellow,
            Color::Blue => TuiColor::Blue,
            Color::Cyan => TuiColor::Cyan,
            Color::Magenta => TuiColor::Magenta,
            Color::White => TuiColor::White,
            Color::Gray => TuiColor::Gray,
            Color::DarkGray => TuiColor::DarkGray,
            Color::BrightRed => TuiColor::LightRed,
            Color::BrightGreen => TuiColor::LightGreen,
            Color::BrightYellow => TuiColor::LightYellow,
            Color::BrightBlue => TuiColor::LightBlue,
            Color::Rgb(r, g, b) => TuiColor::Rgb(*r, *g, *b),
        }
    }
}


/// A complete color theme for the console widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub text: Color,
    pub prompt: Color,
    pub debug: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
}


impl Theme {
    /// Dark terminal theme — the default.
    pub fn default_dark() -> Self {
        Theme {
            name: "dark".to_string(),
            text: Color::White,
            prompt: Color::BrightGreen,
            debug: Color::DarkGray,
            info: Color::Cyan,
            warning: Color::BrightYellow,
            error: Color::BrightRed,
            border: Color::Blue,
        }
    }

    /// Light terminal theme.
    pub fn default_light() -> Self {
        Theme {
            name: "light".to_string(),
            text: Color::Default,
            prompt: Color::Green,
            debug: Color::Gray,
            info: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::Default,
        }
    }

    /// Minimal theme — no bright colors, only basic ANSI.
    pub fn minimal() -> Self {
        Theme {
            name: "minimal".to_string(),
            text: Color::Default,
            prompt: Color::Default,
            debug: Color::Default,
            info: Color::Default,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::Default,
        }
    }

    /// Load a theme from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The color a text run with the given tag is drawn in.
    pub fn color_for(&self, tag: ColorTag) -> TuiColor {
        match tag {
            ColorTag::Default => self.text.to_tui(),
            ColorTag::Debug => self.debug.to_tui(),
            ColorTag::Info => self.info.to_tui(),
            ColorTag::Warning => self.warning.to_tui(),
            ColorTag::Error => self.error.to_tui(),
        }
    }
}


impl Default for Theme {
    fn default() -> Self {
        Theme::default_dark()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_to_tui_basic() {
        assert_eq!(Color::Red.to_tui(), TuiColor::Red);
        assert_eq!(Color::Default.to_tui(), TuiColor::Reset);
        assert_eq!(Color::BrightGreen.to_tui(), TuiColor::LightGreen);
    }

    #[test]
    fn color_to_tui_rgb() {
        assert_eq!(Color::Rgb(10, 20, 30).to_tui(), TuiColor::Rgb(10, 20, 30));
    }

    #[test]
    fn theme_dark_defaults() {
        let t = Theme::default_dark();
        assert_eq!(t.name, "dark");
        assert_eq!(t.prompt, Color::BrightGreen);
        assert_eq!(t.error, Color::BrightRed);
    }

    #[test]
    fn theme_default_is_dark() {
        assert_eq!(Theme::default().name, "dark");
    }

    #[test]
    fn theme_light_and_minimal() {
        assert_eq!(Theme::default_light().name, "light");
        assert_eq!(Theme::minimal().prompt, Color::Default);
    }

    #[test]
    fn color_for_maps_every_tag() {
        let t = Theme::default_dark();
        assert_eq!(t.color_for(ColorTag::Default), TuiColor::White);
        assert_eq!(t.color_for(ColorTag::Debug), TuiColor::DarkGray);
        assert_eq!(t.color_for(ColorTag::Info), TuiColor::Cyan);
        assert_eq!(t.color_for(ColorTag::Warning), TuiColor::LightYellow);
        assert_eq!(t.color_for(ColorTag::Error), TuiColor::LightRed);
    }

    #[test]
    fn theme_serialization_round_trip() {
        let theme = Theme::default_light();
        let json = serde_json::to_string(&theme).unwrap();
        let back = Theme::from_json(&json).unwrap();
        assert_eq!(back.name, "light");
        assert_eq!(back.info, Color::Blue);
    }

    #[test]
    fn color_simple_serialization() {
        let json = serde_json::to_string(&Color::BrightYellow).unwrap();
        assert!(json.contains("bright_yellow"));
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::BrightYellow);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Theme::from_json("{not json").is_err());
    }
}
