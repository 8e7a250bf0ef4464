//! Theme management for the application.
//!
//! The shell only knows two modes. Everything the header needs to paint
//! itself is derived from a [`ThemeMode`] here, so the rendering code never
//! branches on raw strings.

use eframe::egui::{self, Color32};
use std::fmt;

pub const BLUE: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);
pub const BLUE_HOVER: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);
pub const DEEP_BLUE: Color32 = Color32::from_rgb(0x0D, 0x47, 0xA1);
pub const DEEP_BLUE_HOVER: Color32 = Color32::from_rgb(0x0B, 0x3C, 0x8C);
pub const ON_PRIMARY: Color32 = Color32::WHITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interprets a stored preference value. Anything other than the two
    /// known spellings yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub visuals: egui::Visuals,
    pub app_bar: Color32,
    pub button: Color32,
    pub button_hover: Color32,
}

pub fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        visuals: egui::Visuals::dark(),
        app_bar: DEEP_BLUE,
        button: BLUE,
        button_hover: BLUE_HOVER,
    }
}

pub fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        visuals: egui::Visuals::light(),
        app_bar: BLUE,
        button: DEEP_BLUE,
        button_hover: DEEP_BLUE_HOVER,
    }
}

pub fn theme_for(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light_theme(),
        ThemeMode::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_values() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn header_colors_swap_between_modes() {
        let light = light_theme();
        let dark = dark_theme();
        assert_eq!(light.app_bar, dark.button);
        assert_eq!(dark.app_bar, light.button);
        assert_eq!(dark.app_bar, Color32::from_rgb(0x0D, 0x47, 0xA1));
        assert_eq!(dark.button_hover, Color32::from_rgb(0x19, 0x76, 0xD2));
        assert_eq!(light.button_hover, Color32::from_rgb(0x0B, 0x3C, 0x8C));
        assert!(dark.visuals.dark_mode);
        assert!(!light.visuals.dark_mode);
    }
}
