//! Light/dark presentation theme. Independent of catalog filtering.

use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::ThemeMode;

pub const SETTINGS_STORAGE_KEY: &str = "blogdir.settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDesktopSettings {
    pub theme: ThemeMode,
}

impl Default for PersistedDesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
        }
    }
}

impl PersistedDesktopSettings {
    pub fn from_json(text: &str) -> Option<Self> {
        match serde_json::from_str(text) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable persisted settings");
                None
            }
        }
    }
}

/// An explicitly configured theme wins over the persisted one.
pub fn initial_theme(
    persisted: Option<&PersistedDesktopSettings>,
    configured: Option<ThemeMode>,
) -> ThemeMode {
    configured
        .or_else(|| persisted.map(|settings| settings.theme))
        .unwrap_or(PersistedDesktopSettings::default().theme)
}

#[derive(Debug, Clone, Copy)]
pub struct DirectoryPalette {
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub ink: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_header_fill: egui::Color32,
    pub freq_badge_fill: egui::Color32,
    pub muted_text: egui::Color32,
    pub faint_stroke: egui::Color32,
}

pub fn palette_for(mode: ThemeMode) -> DirectoryPalette {
    match mode {
        ThemeMode::Light => DirectoryPalette {
            accent: egui::Color32::from_rgb(255, 90, 54),
            accent_text: egui::Color32::WHITE,
            ink: egui::Color32::BLACK,
            card_fill: egui::Color32::WHITE,
            card_header_fill: egui::Color32::from_rgb(240, 240, 235),
            freq_badge_fill: egui::Color32::from_rgb(253, 224, 71),
            muted_text: egui::Color32::from_rgb(100, 100, 110),
            faint_stroke: egui::Color32::from_black_alpha(40),
        },
        ThemeMode::Dark => DirectoryPalette {
            accent: egui::Color32::from_rgb(255, 110, 78),
            accent_text: egui::Color32::BLACK,
            ink: egui::Color32::WHITE,
            card_fill: egui::Color32::from_rgb(18, 18, 20),
            card_header_fill: egui::Color32::from_rgb(34, 34, 38),
            freq_badge_fill: egui::Color32::from_rgb(113, 63, 18),
            muted_text: egui::Color32::from_rgb(160, 160, 170),
            faint_stroke: egui::Color32::from_white_alpha(40),
        },
    }
}

pub fn visuals_for_theme(mode: ThemeMode) -> egui::Visuals {
    let palette = palette_for(mode);
    let mut visuals = match mode {
        ThemeMode::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(250, 250, 247);
            v.window_fill = palette.card_fill;
            v.extreme_bg_color = egui::Color32::WHITE;
            v
        }
        ThemeMode::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(10, 10, 12);
            v.window_fill = palette.card_fill;
            v.extreme_bg_color = egui::Color32::from_rgb(24, 24, 28);
            v
        }
    };

    // Square corners and solid ink outlines throughout.
    let square = egui::CornerRadius::ZERO;
    visuals.window_corner_radius = square;
    visuals.menu_corner_radius = square;
    visuals.widgets.noninteractive.corner_radius = square;
    visuals.widgets.inactive.corner_radius = square;
    visuals.widgets.hovered.corner_radius = square;
    visuals.widgets.active.corner_radius = square;
    visuals.widgets.open.corner_radius = square;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.5, palette.ink);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(2.0, palette.ink);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, palette.ink);

    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent_text);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_theme_overrides_persisted() {
        let persisted = PersistedDesktopSettings {
            theme: ThemeMode::Dark,
        };
        assert_eq!(
            initial_theme(Some(&persisted), Some(ThemeMode::Light)),
            ThemeMode::Light
        );
        assert_eq!(initial_theme(Some(&persisted), None), ThemeMode::Dark);
        assert_eq!(initial_theme(None, None), ThemeMode::Light);
    }

    #[test]
    fn persisted_settings_tolerate_missing_fields_and_garbage() {
        assert_eq!(
            PersistedDesktopSettings::from_json("{}"),
            Some(PersistedDesktopSettings::default())
        );
        assert_eq!(
            PersistedDesktopSettings::from_json(r#"{"theme":"dark"}"#).map(|s| s.theme),
            Some(ThemeMode::Dark)
        );
        assert!(PersistedDesktopSettings::from_json("not json").is_none());
    }

    #[test]
    fn visuals_follow_mode() {
        assert!(!visuals_for_theme(ThemeMode::Light).dark_mode);
        assert!(visuals_for_theme(ThemeMode::Dark).dark_mode);
    }
}
