//! Profile cards and tag chips.

use eframe::egui;
use shared::domain::Profile;
use url::Url;

use crate::ui::theme::DirectoryPalette;

pub const CARD_MIN_WIDTH: f32 = 300.0;
pub const MAX_CARD_COLUMNS: usize = 3;

const MISSING_LANG: &str = "N/A";
const MISSING_FREQ: &str = "Unknown";
const MISSING_BACKGROUND: &str = "No background info provided.";

/// Display-ready view of one [`Profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCardModel {
    pub name: String,
    pub website: Option<Url>,
    pub feed: Option<Url>,
    pub lang_badge: String,
    pub freq_badge: String,
    pub background: String,
    pub focus: String,
    pub tags: Vec<String>,
}

impl ProfileCardModel {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            website: external_link(&profile.url),
            feed: external_link(&profile.feed),
            lang_badge: or_fallback(&profile.lang, MISSING_LANG),
            freq_badge: or_fallback(&profile.freq, MISSING_FREQ),
            background: or_fallback(&profile.background, MISSING_BACKGROUND),
            focus: profile.focus.clone(),
            tags: profile
                .trimmed_tags()
                .map(|tag| format!("#{tag}"))
                .collect(),
        }
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// `None` for blank values; unparseable values are logged and suppressed too.
pub fn external_link(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(url = raw, error = %err, "suppressing unparseable link");
            None
        }
    }
}

/// Columns that fit `available_width`, between one and [`MAX_CARD_COLUMNS`].
pub fn card_columns(available_width: f32) -> usize {
    ((available_width / CARD_MIN_WIDTH).floor() as usize).clamp(1, MAX_CARD_COLUMNS)
}

pub fn tag_chip(
    ui: &mut egui::Ui,
    tag: &str,
    selected: bool,
    palette: DirectoryPalette,
) -> egui::Response {
    let (text, fill) = if selected {
        (
            egui::RichText::new(tag).color(palette.accent_text).strong(),
            palette.accent,
        )
    } else {
        (
            egui::RichText::new(tag).color(palette.ink),
            egui::Color32::TRANSPARENT,
        )
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, palette.ink))
            .corner_radius(egui::CornerRadius::ZERO),
    )
}

fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, palette: DirectoryPalette) {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, palette.ink))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(palette.ink));
        });
}

pub fn show_profile_card(ui: &mut egui::Ui, card: &ProfileCardModel, palette: DirectoryPalette) {
    egui::Frame::new()
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(2.0, palette.ink))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            egui::Frame::new()
                .fill(palette.card_header_fill)
                .inner_margin(egui::Margin::symmetric(14, 12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&card.name).heading().strong(),
                            )
                            .wrap(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if let Some(feed) = &card.feed {
                                ui.add(
                                    egui::Hyperlink::from_label_and_url("RSS", feed.as_str())
                                        .open_in_new_tab(true),
                                )
                                .on_hover_text("RSS Feed");
                            }
                            if let Some(website) = &card.website {
                                ui.add(
                                    egui::Hyperlink::from_label_and_url("Website", website.as_str())
                                        .open_in_new_tab(true),
                                )
                                .on_hover_text("Visit Website");
                            }
                        });
                    });
                    ui.horizontal(|ui| {
                        badge(ui, &card.lang_badge, palette.card_fill, palette);
                        badge(ui, &card.freq_badge, palette.freq_badge_fill, palette);
                    });
                });

            ui.painter().hline(
                ui.min_rect().x_range(),
                ui.min_rect().bottom(),
                egui::Stroke::new(2.0, palette.ink),
            );

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("BACKGROUND")
                            .small()
                            .strong()
                            .color(palette.muted_text),
                    );
                    ui.label(&card.background).on_hover_text(&card.background);
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("FOCUS")
                            .small()
                            .strong()
                            .color(palette.muted_text),
                    );
                    ui.label(egui::RichText::new(&card.focus).strong());
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in &card.tags {
                            ui.label(egui::RichText::new(tag).monospace().small());
                        }
                    });
                });
        });
}
