use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_core::{CatalogController, Intent, SortColumn};
use clap::Parser;
use shared::domain::{CategoryId, UserId};
use storage::{load_settings, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod table;

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "List products with their category and owner")]
struct Args {
    /// Only show products owned by this user id.
    #[arg(long)]
    owner: Option<i64>,
    /// Case-insensitive substring of the product name.
    #[arg(long)]
    search: Option<String>,
    /// Toggle a category id; repeat to select several.
    #[arg(long = "category")]
    categories: Vec<i64>,
    /// Toggle sorting on `name` or `category`; repeat to cycle asc, desc, off.
    #[arg(long = "sort")]
    sorts: Vec<SortColumn>,
    /// Directory with users.json, categories.json and products.json.
    #[arg(long)]
    fixtures: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

impl Args {
    fn intents(&self) -> Vec<Intent> {
        let mut intents = Vec::new();
        if let Some(owner) = self.owner {
            intents.push(Intent::SelectOwner(Some(UserId(owner))));
        }
        if let Some(search) = &self.search {
            intents.push(Intent::SetSearchQuery(search.clone()));
        }
        intents.extend(
            self.categories
                .iter()
                .map(|id| Intent::ToggleCategory(CategoryId(*id))),
        );
        intents.extend(self.sorts.iter().map(|column| Intent::ToggleSort(*column)));
        intents
    }
}

/// Applies the flag intents and returns how many rows remain visible.
fn apply_flags(controller: &mut CatalogController, args: &Args) -> usize {
    let intents = args.intents();
    let intent_count = intents.len();
    let visible = controller.dispatch_all(intents);
    info!(intents = intent_count, visible, "applied command line filters");
    visible
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(dir) = &args.fixtures {
        settings.fixtures_dir = Some(dir.clone());
    }
    init_tracing(&settings.log_filter);

    let storage = Storage::open(&settings).context("failed to load catalog fixtures")?;
    let mut controller = CatalogController::from_storage(&storage);
    apply_flags(&mut controller, &args);

    if args.json {
        let rows: Vec<_> = controller.visible_rows().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("failed to encode rows")?
        );
    } else {
        print!("{}", table::render(&controller));
    }

    Ok(())
}
