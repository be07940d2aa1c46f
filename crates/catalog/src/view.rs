//! Filter and pagination state over a [`Catalog`].
//!
//! The controller owns one state record `{search, selected_tags, visible_count}`
//! and the indices of the profiles matching the current filters. Every mutator
//! recomputes the filtered indices and resets pagination to the first page, except
//! [`ViewController::load_more`] which only grows the visible window.

use std::{collections::BTreeSet, num::NonZeroUsize};

use shared::domain::Profile;

use crate::Catalog;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Search text and selected tags as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.selected_tags.is_empty()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.matches_with_needle(profile, &self.search.to_lowercase())
    }

    /// Same as [`FilterState::matches`] with the search text lower-cased up front.
    pub fn matches_with_needle(&self, profile: &Profile, needle: &str) -> bool {
        matches_search(profile, needle) && matches_tags(profile, &self.selected_tags)
    }
}

/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_search(profile: &Profile, needle: &str) -> bool {
    needle.is_empty()
        || profile.name.to_lowercase().contains(needle)
        || profile.background.to_lowercase().contains(needle)
        || profile.focus.to_lowercase().contains(needle)
}

/// Trimmed, case-sensitive comparison against the profile's tags.
pub fn matches_tags(profile: &Profile, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.iter().any(|tag| profile.has_tag(tag))
}

#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Catalog,
    filter: FilterState,
    page_size: NonZeroUsize,
    visible_count: usize,
    filtered: Vec<usize>,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: Catalog, page_size: NonZeroUsize) -> Self {
        let mut controller = Self {
            catalog,
            filter: FilterState::default(),
            page_size,
            visible_count: page_size.get(),
            filtered: Vec::new(),
        };
        controller.refilter();
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tag_universe(&self) -> &[String] {
        self.catalog.tags()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.filter.search
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.filter.selected_tags
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.filter.selected_tags.contains(tag)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Replaces the search text verbatim.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
        tracing::debug!(search = %self.filter.search, "search updated");
        self.on_filter_changed();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let selected = if self.filter.selected_tags.remove(tag) {
            false
        } else {
            self.filter.selected_tags.insert(tag.to_owned());
            true
        };
        tracing::debug!(tag, selected, "tag toggled");
        self.on_filter_changed();
    }

    /// Deselects every tag but keeps the search text.
    pub fn clear_tags(&mut self) {
        self.filter.selected_tags.clear();
        tracing::debug!("tag selection cleared");
        self.on_filter_changed();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        tracing::debug!("filters cleared");
        self.on_filter_changed();
    }

    pub fn load_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size.get());
        tracing::debug!(visible_count = self.visible_count, "loaded next page");
    }

    pub fn filtered_result(&self) -> Vec<&Profile> {
        self.filtered
            .iter()
            .map(|&index| &self.catalog.profiles()[index])
            .collect()
    }

    pub fn visible_result(&self) -> Vec<&Profile> {
        self.filtered
            .iter()
            .take(self.visible_count)
            .map(|&index| &self.catalog.profiles()[index])
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.filtered.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Displaying {} of {} sources",
            self.filtered_len(),
            self.total_len()
        )
    }

    fn on_filter_changed(&mut self) {
        self.visible_count = self.page_size.get();
        self.refilter();
    }

    fn refilter(&mut self) {
        let needle = self.filter.search.to_lowercase();
        let filter = &self.filter;
        self.filtered = self
            .catalog
            .profiles()
            .iter()
            .enumerate()
            .filter(|(_, profile)| filter.matches_with_needle(profile, &needle))
            .map(|(index, _)| index)
            .collect();
        tracing::trace!(matches = self.filtered.len(), "recomputed filtered result");
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
