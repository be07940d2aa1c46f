use catalog::ViewController;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use shared::domain::ThemeMode;

use crate::controller::events::UiAction;
use crate::controller::orchestration::{
    dispatch_ui_action, drain_ui_actions, ACTION_QUEUE_CAPACITY,
};
use crate::ui::theme::{
    initial_theme, palette_for, visuals_for_theme, DirectoryPalette, PersistedDesktopSettings,
    SETTINGS_STORAGE_KEY,
};
use crate::ui::widgets::{card_columns, show_profile_card, tag_chip, ProfileCardModel};

pub const APP_TITLE: &str = "BlogDir";
const SUBMIT_URL: &str = "https://github.com/anygen";
const SIDEBAR_WIDTH: f32 = 260.0;

pub struct DesktopGuiApp {
    view: ViewController,
    /// Display models for `view.visible_result()`, rebuilt only when actions are applied.
    cards: Vec<ProfileCardModel>,
    action_tx: Sender<UiAction>,
    action_rx: Receiver<UiAction>,

    theme: ThemeMode,
    applied_theme: Option<ThemeMode>,

    status: String,
    scroll_to_top: bool,
}

impl DesktopGuiApp {
    pub fn new(
        view: ViewController,
        persisted_settings: Option<PersistedDesktopSettings>,
        configured_theme: Option<ThemeMode>,
    ) -> Self {
        let (action_tx, action_rx) = bounded(ACTION_QUEUE_CAPACITY);
        let theme = initial_theme(persisted_settings.as_ref(), configured_theme);
        tracing::info!(
            profiles = view.total_len(),
            tags = view.tag_universe().len(),
            theme = ?theme,
            "directory ready"
        );
        let cards = card_models(&view);
        Self {
            view,
            cards,
            action_tx,
            action_rx,
            theme,
            applied_theme: None,
            status: String::new(),
            scroll_to_top: false,
        }
    }

    fn dispatch(&mut self, action: UiAction) {
        if action.changes_filters() {
            self.scroll_to_top = true;
        }
        self.status.clear();
        dispatch_ui_action(&self.action_tx, action, &mut self.status);
    }

    fn apply_pending_actions(&mut self) -> bool {
        let applied = drain_ui_actions(&self.action_rx, &mut self.view, &mut self.theme);
        if applied == 0 {
            return false;
        }
        self.cards = card_models(&self.view);
        true
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        self.applied_theme = Some(self.theme);
    }

    fn palette(&self) -> DirectoryPalette {
        palette_for(self.theme)
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::TopBottomPanel::top("directory_header")
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .stroke(egui::Stroke::new(4.0, palette.ink))
                    .inner_margin(egui::Margin::symmetric(16, 14)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("BLOG").size(30.0).strong());
                    ui.label(
                        egui::RichText::new("DIR")
                            .size(30.0)
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(egui::RichText::new("_").size(30.0).strong());
                    ui.label(
                        egui::RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                            .small()
                            .monospace(),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Hyperlink::from_label_and_url("Submit", SUBMIT_URL)
                                .open_in_new_tab(true),
                        );
                        let toggle_label = match self.theme {
                            ThemeMode::Dark => "☀",
                            ThemeMode::Light => "🌙",
                        };
                        if ui
                            .button(toggle_label)
                            .on_hover_text("Toggle light/dark mode")
                            .clicked()
                        {
                            self.dispatch(UiAction::ToggleTheme);
                        }
                    });
                });
            });
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::SidePanel::left("directory_filters")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .stroke(egui::Stroke::new(2.0, palette.faint_stroke))
                    .inner_margin(egui::Margin::symmetric(14, 16)),
            )
            .show(ctx, |ui| {
                self.show_search_box(ui);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("TOPICS").strong().size(16.0));
                    if !self.view.selected_tags().is_empty() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.link(egui::RichText::new("Reset").small()).clicked() {
                                self.dispatch(UiAction::ClearTags);
                            }
                        });
                    }
                });
                ui.add_space(6.0);

                egui::TopBottomPanel::bottom("directory_summary")
                    .resizable(false)
                    .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(0, 8)))
                    .show_inside(ui, |ui| {
                        ui.label(
                            egui::RichText::new(self.view.summary())
                                .small()
                                .monospace()
                                .color(palette.muted_text),
                        );
                        if !self.status.is_empty() {
                            ui.label(egui::RichText::new(&self.status).small().weak());
                        }
                    });

                egui::ScrollArea::vertical()
                    .id_salt("topics_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut clicked = None;
                        ui.horizontal_wrapped(|ui| {
                            for tag in self.view.tag_universe() {
                                let selected = self.view.is_tag_selected(tag);
                                if tag_chip(ui, tag, selected, palette).clicked() {
                                    clicked = Some(tag.clone());
                                }
                            }
                        });
                        if let Some(tag) = clicked {
                            self.dispatch(UiAction::ToggleTag(tag));
                        }
                    });
            });
    }

    fn show_search_box(&mut self, ui: &mut egui::Ui) {
        let mut query = self.view.search().to_owned();
        ui.horizontal(|ui| {
            let clear_width = if query.is_empty() { 0.0 } else { 28.0 };
            let response = ui.add_sized(
                [ui.available_width() - clear_width, 32.0],
                egui::TextEdit::singleline(&mut query)
                    .id_salt("directory_search")
                    .hint_text("Search authors, topics..."),
            );
            if response.changed() {
                self.dispatch(UiAction::SetSearch(query.clone()));
            }
            if !query.is_empty() && ui.small_button("✕").on_hover_text("Clear search").clicked()
            {
                self.dispatch(UiAction::SetSearch(String::new()));
            }
        });
    }

    fn show_results(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(20, 20)),
            )
            .show(ctx, |ui| {
                if self.view.filtered_len() == 0 {
                    self.show_empty_state(ui, palette);
                    return;
                }

                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("results_scroll")
                    .auto_shrink([false, false]);
                if std::mem::take(&mut self.scroll_to_top) {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }

                let mut load_more = false;
                scroll.show(ui, |ui| {
                    let columns = card_columns(ui.available_width());
                    for row in self.cards.chunks(columns) {
                        ui.columns(columns, |cols| {
                            for (col, card) in cols.iter_mut().zip(row) {
                                show_profile_card(col, card, palette);
                            }
                        });
                        ui.add_space(16.0);
                    }

                    if self.view.has_more() {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            let button = egui::Button::new(
                                egui::RichText::new("LOAD MORE records_").strong(),
                            )
                            .min_size(egui::vec2(200.0, 40.0))
                            .stroke(egui::Stroke::new(2.0, palette.ink));
                            if ui.add(button).clicked() {
                                load_more = true;
                            }
                        });
                        ui.add_space(24.0);
                    }
                });

                if load_more {
                    self.dispatch(UiAction::LoadMore);
                }
            });
    }

    fn show_empty_state(&mut self, ui: &mut egui::Ui, palette: DirectoryPalette) {
        egui::Frame::new()
            .stroke(egui::Stroke::new(2.0, palette.faint_stroke))
            .inner_margin(egui::Margin::symmetric(24, 40))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("∅").size(36.0));
                    ui.label(egui::RichText::new("No Results Found").strong().size(20.0));
                    ui.label(
                        egui::RichText::new("Try adjusting your filters or search query.")
                            .color(palette.muted_text),
                    );
                    ui.add_space(12.0);
                    if ui.button("Clear Filters").clicked() {
                        self.dispatch(UiAction::ClearFilters);
                    }
                });
            });
    }
}

fn card_models(view: &ViewController) -> Vec<ProfileCardModel> {
    view.visible_result()
        .into_iter()
        .map(ProfileCardModel::from_profile)
        .collect()
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_sidebar(ctx);
        self.show_results(ctx);

        if self.apply_pending_actions() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDesktopSettings { theme: self.theme };
        match serde_json::to_string(&settings) {
            Ok(serialized) => storage.set_string(SETTINGS_STORAGE_KEY, serialized),
            Err(err) => tracing::warn!(error = %err, "failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{load_catalog, DEFAULT_PAGE_SIZE};

    fn app() -> DesktopGuiApp {
        let view = ViewController::new(load_catalog().expect("bundled catalog"));
        DesktopGuiApp::new(view, None, Some(ThemeMode::Light))
    }

    #[test]
    fn card_models_are_reused_across_frames_without_actions() {
        let mut app = app();
        assert_eq!(app.cards.len(), DEFAULT_PAGE_SIZE.get());
        let built = app.cards.as_ptr();

        for _ in 0..3 {
            assert!(!app.apply_pending_actions());
        }
        assert_eq!(app.cards.as_ptr(), built);
    }

    #[test]
    fn card_models_follow_applied_actions() {
        let mut app = app();

        app.dispatch(UiAction::LoadMore);
        assert!(app.apply_pending_actions());
        assert_eq!(app.cards, card_models(&app.view));
        assert_eq!(app.cards.len(), app.view.visible_result().len());
        assert!(app.cards.len() > DEFAULT_PAGE_SIZE.get());

        app.dispatch(UiAction::SetSearch("ada".to_string()));
        assert!(app.apply_pending_actions());
        let names: Vec<&str> = app.cards.iter().map(|card| card.name.as_str()).collect();
        let expected: Vec<&str> = app
            .view
            .visible_result()
            .into_iter()
            .map(|profile| profile.name.as_str())
            .collect();
        assert_eq!(names, expected);
        assert!(app.scroll_to_top);
    }
}
