//! User actions raised by the directory UI.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetSearch(String),
    ToggleTag(String),
    ClearTags,
    ClearFilters,
    LoadMore,
    ToggleTheme,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SetSearch(_) => "set_search",
            UiAction::ToggleTag(_) => "toggle_tag",
            UiAction::ClearTags => "clear_tags",
            UiAction::ClearFilters => "clear_filters",
            UiAction::LoadMore => "load_more",
            UiAction::ToggleTheme => "toggle_theme",
        }
    }

    /// Actions that change the search text or tag selection.
    pub fn changes_filters(&self) -> bool {
        matches!(
            self,
            UiAction::SetSearch(_)
                | UiAction::ToggleTag(_)
                | UiAction::ClearTags
                | UiAction::ClearFilters
        )
    }
}
