//! UI layer for the directory: app shell, cards and chips, and the light/dark theme.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{DesktopGuiApp, APP_TITLE};
