//! # taskshell
//!
//! A small task-manager window: a header bar with a persisted light/dark
//! toggle, an onboarding guide and an in-memory task list.

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod preferences;
pub mod shell;
pub mod tasks;
pub mod theme;
pub mod ui;
