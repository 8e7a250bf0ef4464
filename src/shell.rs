//! The shell session: owns the theme mode and keeps it in sync with the
//! preference store.

use crate::layout::{self, LayoutDecision};
use crate::preferences::PreferenceStore;
use crate::theme::{self, Theme, ThemeMode};
use eframe::egui::Color32;

pub const THEME_KEY: &str = "theme";
pub const APP_TITLE: &str = "Your Task Manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "☀",
            ToggleIcon::Moon => "🌙",
        }
    }
}

/// Everything the header and body need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub mode: ThemeMode,
    pub header_background: Color32,
    pub button_background: Color32,
    pub button_hover: Color32,
    pub icon: ToggleIcon,
    /// What the button does, shown as a tooltip when the label is hidden.
    pub action: &'static str,
    pub label: Option<&'static str>,
    pub layout: LayoutDecision,
}

/// Pure view computation from the current mode and viewport width.
pub fn render(mode: ThemeMode, viewport_width: f32) -> ShellView {
    let theme = theme::theme_for(mode);
    let layout = layout::decide(viewport_width);

    // The button offers the opposite mode.
    let (icon, label) = match mode {
        ThemeMode::Dark => (ToggleIcon::Sun, "Switch to Light Mode"),
        ThemeMode::Light => (ToggleIcon::Moon, "Switch to Dark Mode"),
    };

    ShellView {
        mode,
        header_background: theme.app_bar,
        button_background: theme.button,
        button_hover: theme.button_hover,
        icon,
        action: label,
        label: layout.show_button_label.then_some(label),
        layout,
    }
}

pub struct ShellSession<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
    last_persist_error: Option<String>,
}

impl<S: PreferenceStore> ShellSession<S> {
    pub fn new(store: S) -> Self {
        let mut session = Self {
            store,
            mode: ThemeMode::default(),
            last_persist_error: None,
        };
        session.initialize();
        session
    }

    /// Reloads the mode from the store. Never writes.
    pub fn initialize(&mut self) -> ThemeMode {
        self.mode = match self.store.get(THEME_KEY) {
            Some(value) => ThemeMode::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown theme preference {:?}, using light", value);
                ThemeMode::Light
            }),
            None => ThemeMode::Light,
        };
        tracing::debug!("Theme initialized to {}", self.mode);
        self.mode
    }

    /// Flips the mode and writes it through to the store. A failed write
    /// is logged and remembered; the new mode stays in effect either way.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        match self.store.set(THEME_KEY, self.mode.as_str()) {
            Ok(()) => {
                tracing::info!("Theme switched to {}", self.mode);
                self.last_persist_error = None;
            }
            Err(e) => {
                tracing::warn!("Theme switched to {} but could not be saved: {}", self.mode, e);
                self.last_persist_error = Some(e.to_string());
            }
        }
        self.mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        theme::theme_for(self.mode)
    }

    pub fn render(&self, viewport_width: f32) -> ShellView {
        render(self.mode, viewport_width)
    }

    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
