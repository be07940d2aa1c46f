use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use catalog::{load_catalog, Catalog, ViewController};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{load_startup_config, parse_page_size, parse_theme, StartupConfig};
use crate::ui::theme::{PersistedDesktopSettings, SETTINGS_STORAGE_KEY};
use crate::ui::{DesktopGuiApp, APP_TITLE};

#[derive(Parser, Debug)]
#[command(name = "blogdir", about = "Browse the bundled blog directory")]
struct Args {
    /// Config file; defaults to ./blogdir.toml or the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Catalog JSON file to browse instead of the bundled dataset.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<usize>,
    /// `light` or `dark`.
    #[arg(long)]
    theme: Option<String>,
}

fn resolve_startup(args: &Args) -> anyhow::Result<StartupConfig> {
    let startup = load_startup_config(args.config.as_deref())?;
    apply_cli_overrides(startup, args)
}

/// Command-line flags win over the config file and environment.
fn apply_cli_overrides(mut startup: StartupConfig, args: &Args) -> anyhow::Result<StartupConfig> {
    if let Some(path) = &args.catalog {
        startup.catalog_path = Some(path.clone());
    }
    if let Some(size) = args.page_size {
        startup.page_size = parse_page_size(size)?;
    }
    if let Some(theme) = &args.theme {
        startup.theme = Some(parse_theme(theme)?);
    }
    Ok(startup)
}

fn open_catalog(startup: &StartupConfig) -> anyhow::Result<Catalog> {
    match &startup.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => load_catalog().context("failed to load bundled catalog"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let startup = resolve_startup(&args)?;
    let catalog = open_catalog(&startup)?;
    let view = ViewController::with_page_size(catalog, startup.page_size);
    let configured_theme = startup.theme;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedDesktopSettings::from_json(&text))
            });
            Ok(Box::new(DesktopGuiApp::new(
                view,
                persisted_settings,
                configured_theme,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_startup_config_with_env;

    #[test]
    fn cli_flags_override_config() {
        let args = Args::parse_from([
            "blogdir",
            "--page-size",
            "5",
            "--theme",
            "dark",
            "--catalog",
            "extra.json",
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join("blogdir.toml");
        std::fs::write(&config_path, "page_size = 9\ntheme = \"light\"\n").expect("write config");
        let args = Args {
            config: Some(config_path),
            ..args
        };

        let from_config =
            load_startup_config_with_env(args.config.as_deref(), |_: &str| None).expect("config");
        assert_eq!(from_config.page_size.get(), 9);
        let startup = apply_cli_overrides(from_config, &args).expect("startup");
        assert_eq!(startup.page_size.get(), 5);
        assert_eq!(startup.theme, Some(shared::domain::ThemeMode::Dark));
        assert_eq!(startup.catalog_path, Some(PathBuf::from("extra.json")));
    }

    #[test]
    fn zero_page_size_flag_is_rejected() {
        let args = Args::parse_from(["blogdir", "--page-size", "0"]);
        assert!(apply_cli_overrides(StartupConfig::default(), &args).is_err());
    }

    #[test]
    fn bundled_catalog_opens_by_default() {
        let catalog = open_catalog(&StartupConfig::default()).expect("catalog");
        assert!(!catalog.is_empty());
    }
}
