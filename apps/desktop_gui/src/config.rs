use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::Context;
use catalog::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use shared::domain::ThemeMode;

pub const CONFIG_FILE_NAME: &str = "blogdir.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub page_size: NonZeroUsize,
    pub catalog_path: Option<PathBuf>,
    pub theme: Option<ThemeMode>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog_path: None,
            theme: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    page_size: Option<usize>,
    catalog: Option<PathBuf>,
    theme: Option<String>,
}

/// Builds the startup config from defaults, then the config file, then `BLOGDIR_*`
/// environment variables.
pub fn load_startup_config(explicit_path: Option<&Path>) -> anyhow::Result<StartupConfig> {
    load_startup_config_with_env(explicit_path, read_non_empty_env_var)
}

/// [`load_startup_config`] with the environment lookup supplied by the caller.
pub fn load_startup_config_with_env(
    explicit_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<StartupConfig> {
    let mut config = StartupConfig::default();

    if let Some(path) = explicit_path {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        apply_file_config(&mut config, &raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
    } else if let Some(path) = default_config_path() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        apply_file_config(&mut config, &raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config file");
    }

    apply_env_overrides(&mut config, lookup)?;
    Ok(config)
}

/// `./blogdir.toml` first, then the per-user config directory.
fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|base| base.join("blogdir").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn apply_file_config(config: &mut StartupConfig, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileConfig = toml::from_str(raw)?;
    if let Some(size) = file_cfg.page_size {
        config.page_size = parse_page_size(size)?;
    }
    if let Some(path) = file_cfg.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(theme) = file_cfg.theme {
        config.theme = Some(parse_theme(&theme)?);
    }
    Ok(())
}

fn apply_env_overrides(
    config: &mut StartupConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("BLOGDIR_PAGE_SIZE") {
        let size = v
            .trim()
            .parse::<usize>()
            .with_context(|| format!("BLOGDIR_PAGE_SIZE must be a positive integer, got `{v}`"))?;
        config.page_size = parse_page_size(size)?;
    }
    if let Some(v) = lookup("BLOGDIR_CATALOG") {
        config.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("BLOGDIR_THEME") {
        config.theme = Some(parse_theme(&v)?);
    }
    Ok(())
}

pub fn parse_page_size(size: usize) -> anyhow::Result<NonZeroUsize> {
    NonZeroUsize::new(size).context("page size must be greater than zero")
}

pub fn parse_theme(value: &str) -> anyhow::Result<ThemeMode> {
    ThemeMode::parse(value.trim())
        .with_context(|| format!("unknown theme `{value}` (expected `light` or `dark`)"))
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            tracing::warn!(var = name, "environment variable set but empty; ignoring");
            None
        }
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
