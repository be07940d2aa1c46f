use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ProfileId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate profile id `{0}` in catalog")]
    DuplicateId(ProfileId),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
