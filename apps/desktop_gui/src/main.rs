use std::path::PathBuf;

mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use storage::load_settings;
use tracing_subscriber::EnvFilter;

use crate::ui::{app::APP_TITLE, load_catalog, CatalogApp};

#[derive(Parser, Debug)]
struct Args {
    /// Directory with users.json, categories.json and products.json.
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(dir) = args.fixtures {
        settings.fixtures_dir = Some(dir);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (controller, startup_error) = load_catalog(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::new(controller, startup_error)))),
    )
}
