use std::{
    io::{self, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use catalog::{load_catalog, Catalog, ViewController, DEFAULT_PAGE_SIZE};
use clap::{Parser, Subcommand};
use shared::domain::{Profile, ProfileId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blogdir-tools", about = "Query the blog directory from the terminal")]
struct Cli {
    /// Catalog JSON file to use instead of the bundled dataset.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every tag in the catalog.
    Tags,
    /// Filter the catalog and print the visible page(s).
    Query {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Number of pages to reveal.
        #[arg(long, default_value_t = 1)]
        pages: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE.get())]
        page_size: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print one profile as JSON.
    Show { id: String },
}

fn open_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => load_catalog().context("failed to load bundled catalog"),
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let catalog = open_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Command::Tags => {
            for tag in catalog.tags() {
                writeln!(out, "{tag}")?;
            }
        }
        Command::Query {
            search,
            tags,
            pages,
            page_size,
            json,
        } => {
            let page_size =
                NonZeroUsize::new(page_size).context("--page-size must be greater than zero")?;
            let mut view = ViewController::with_page_size(catalog, page_size);
            view.set_search(search);
            for tag in &tags {
                if !view.is_tag_selected(tag) {
                    view.toggle_tag(tag);
                }
            }
            for _ in 1..pages {
                view.load_more();
            }
            tracing::debug!(
                search = %view.search(),
                tags = ?view.selected_tags(),
                pages,
                visible = view.visible_count(),
                matches = view.filtered_len(),
                "applied query filters"
            );

            if json {
                serde_json::to_writer_pretty(&mut *out, &view.visible_result())?;
                writeln!(out)?;
            } else if view.filtered_len() == 0 {
                writeln!(out, "No results found. Try adjusting your filters or search query.")?;
            } else {
                for profile in view.visible_result() {
                    writeln!(out, "{}", profile_line(profile))?;
                }
                if view.has_more() {
                    writeln!(out, "... more results available (use --pages)")?;
                }
            }
            writeln!(io::stderr(), "{}", view.summary())?;
        }
        Command::Show { id } => {
            let id = ProfileId::new(id);
            tracing::debug!(%id, "looking up profile");
            let Some(profile) = catalog.get(&id) else {
                bail!("no profile with id `{id}`");
            };
            serde_json::to_writer_pretty(&mut *out, profile)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn profile_line(profile: &Profile) -> String {
    let tags: Vec<&str> = profile.trimmed_tags().collect();
    format!("{}\t{}\t[{}]", profile.id, profile.name, tags.join(", "))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}
