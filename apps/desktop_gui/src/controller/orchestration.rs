//! Queues UI actions raised while a frame is laid out and applies them afterwards.

use catalog::ViewController;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::ThemeMode;

use crate::controller::events::UiAction;

pub const ACTION_QUEUE_CAPACITY: usize = 64;

pub fn dispatch_ui_action(action_tx: &Sender<UiAction>, action: UiAction, status: &mut String) {
    let action_name = action.name();

    match action_tx.try_send(action) {
        Ok(()) => tracing::debug!(action = action_name, "queued ui action"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action = action_name, "ui action queue full; dropping action");
            *status = "Too many pending actions; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(action = action_name, "ui action queue disconnected");
            *status = "Action queue disconnected; restart the app".to_string();
        }
    }
}

pub fn apply_ui_action(view: &mut ViewController, theme: &mut ThemeMode, action: UiAction) {
    match action {
        UiAction::SetSearch(query) => view.set_search(query),
        UiAction::ToggleTag(tag) => view.toggle_tag(&tag),
        UiAction::ClearTags => view.clear_tags(),
        UiAction::ClearFilters => view.clear_filters(),
        UiAction::LoadMore => view.load_more(),
        UiAction::ToggleTheme => {
            *theme = theme.toggled();
            tracing::debug!(theme = ?theme, "theme toggled");
        }
    }
}

/// Applies every queued action in arrival order. Returns how many were applied.
pub fn drain_ui_actions(
    action_rx: &Receiver<UiAction>,
    view: &mut ViewController,
    theme: &mut ThemeMode,
) -> usize {
    let mut applied = 0;
    while let Ok(action) = action_rx.try_recv() {
        apply_ui_action(view, theme, action);
        applied += 1;
    }
    applied
}
