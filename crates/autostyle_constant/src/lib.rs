//! Shared constants for autostyle: app metadata, default paths, theme defaults.

pub mod app;
pub mod theme;
