use catalog_core::{CatalogController, Intent};
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use storage::{Settings, Storage};

use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::{dispatch_ui_event, drain_ui_events};
use crate::ui::{panels, theme};

pub const APP_TITLE: &str = "Product Categories";
const UI_EVENT_QUEUE_CAPACITY: usize = 256;

/// Loads the fixtures for the window. A failed load still yields an (empty)
/// catalog so the window can show what went wrong.
pub fn load_catalog(settings: &Settings) -> (CatalogController, Option<UiError>) {
    match Storage::open(settings) {
        Ok(storage) => (CatalogController::from_storage(&storage), None),
        Err(err) => {
            tracing::error!(%err, "failed to load catalog fixtures");
            (
                CatalogController::from_storage(&Storage::default()),
                Some(UiError::from_store_error(&err)),
            )
        }
    }
}

pub struct CatalogApp {
    controller: CatalogController,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    search_draft: String,
    status_banner: Option<UiError>,
}

impl CatalogApp {
    pub fn new(controller: CatalogController, startup_error: Option<UiError>) -> Self {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        let search_draft = controller.state().search_query().to_string();
        Self {
            controller,
            ui_tx,
            ui_rx,
            search_draft,
            status_banner: startup_error,
        }
    }

    fn emit(&mut self, event: UiEvent) {
        dispatch_ui_event(&self.ui_tx, event, &mut self.status_banner);
    }

    fn process_ui_events(&mut self) {
        let processed =
            drain_ui_events(&self.ui_rx, &mut self.controller, &mut self.status_banner);
        if processed == 0 {
            return;
        }

        // ClearSearch and ResetAll rewrite the query behind the text field.
        let query = self.controller.state().search_query();
        if self.search_draft != query {
            self.search_draft = query.to_string();
        }
    }
}

fn show_status_banner(ui: &mut egui::Ui, banner: Option<&UiError>) -> bool {
    let Some(banner) = banner else {
        return false;
    };

    let mut dismissed = false;
    egui::Frame::NONE
        .fill(theme::BANNER_FILL)
        .stroke(egui::Stroke::new(1.0, theme::BANNER_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                let text = format!(
                    "{} ({}): {}",
                    banner.label(),
                    banner.context().label(),
                    banner.message()
                );
                ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut intents: Vec<Intent> = Vec::new();
        let mut dismissed = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.add_space(8.0);

            dismissed = show_status_banner(ui, self.status_banner.as_ref());

            ui.group(|ui| {
                ui.label(egui::RichText::new("Filters").strong().size(16.0));
                panels::show_owner_tabs(ui, &self.controller, &mut intents);
                ui.separator();
                panels::show_search(ui, &mut self.search_draft, &mut intents);
                ui.separator();
                panels::show_category_buttons(ui, &self.controller, &mut intents);
                ui.separator();
                panels::show_reset(ui, &self.controller, &mut intents);
            });

            ui.add_space(12.0);
            panels::show_product_table(ui, &self.controller, &mut intents);
        });

        if dismissed {
            self.emit(UiEvent::DismissBanner);
        }
        let queued = dismissed || !intents.is_empty();
        for intent in intents {
            self.emit(UiEvent::Intent(intent));
        }
        if queued {
            ctx.request_repaint();
        }
    }
}
