//! Catalog store for the profile directory and the filter/pagination view over it.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use shared::{
    domain::{Profile, ProfileId},
    error::CatalogError,
};

pub mod view;

pub use view::{ViewController, DEFAULT_PAGE_SIZE};

const BUNDLED_CATALOG: &str = include_str!("../data/bloggers.json");

/// Immutable, ordered list of profiles plus its tag universe.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<Profile>,
    tags: Vec<String>,
}

impl Catalog {
    /// Loads the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Parses a JSON array of profiles.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<Profile> = serde_json::from_str(raw)?;
        Self::from_profiles(profiles)
    }

    /// Reads and parses a catalog file, e.g. a `--catalog` override.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            profiles = catalog.len(),
            "loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Fails with [`CatalogError::DuplicateId`] if two profiles share an id.
    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(&profile.id) {
                return Err(CatalogError::DuplicateId(profile.id.clone()));
            }
        }

        let tags = tag_universe(&profiles);
        tracing::debug!(
            profiles = profiles.len(),
            tags = tags.len(),
            "built catalog"
        );
        Ok(Self { profiles, tags })
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Sorted, deduplicated, trimmed tags across every profile.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Loads the bundled catalog.
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    let catalog = Catalog::bundled()?;
    tracing::info!(profiles = catalog.len(), "loaded bundled catalog");
    Ok(catalog)
}

pub fn tag_universe(profiles: &[Profile]) -> Vec<String> {
    profiles
        .iter()
        .flat_map(|profile| profile.trimmed_tags())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
