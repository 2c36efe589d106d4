//! Filter panel and product table. Widgets never touch the view state; they
//! push intents for the app to queue.

use catalog_core::{
    presentation::{category_label, owner_tab_label, owner_tone, sort_indicator, EMPTY_MESSAGE},
    CatalogController, Intent, SortColumn,
};
use eframe::egui;

use crate::ui::theme;

pub fn show_owner_tabs(
    ui: &mut egui::Ui,
    controller: &CatalogController,
    intents: &mut Vec<Intent>,
) {
    let selected = controller.state().selected_owner();

    ui.horizontal_wrapped(|ui| {
        let all = egui::Button::new(egui::RichText::new("All").strong())
            .selected(selected.is_none());
        if ui.add(all).clicked() {
            intents.push(Intent::SelectOwner(None));
        }

        for user in controller.users() {
            let label = egui::RichText::new(owner_tab_label(user)).strong();
            if ui
                .add(egui::Button::new(label).selected(selected == Some(user.id)))
                .clicked()
            {
                intents.push(Intent::SelectOwner(Some(user.id)));
            }
        }
    });
}

pub fn show_search(ui: &mut egui::Ui, search_draft: &mut String, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        ui.label("🔍");
        let edit = egui::TextEdit::singleline(search_draft)
            .id_salt("catalog_search")
            .hint_text("Search")
            .desired_width(320.0);
        if ui.add(edit).changed() {
            intents.push(Intent::SetSearchQuery(search_draft.clone()));
        }

        if !search_draft.is_empty() && ui.small_button("✕").clicked() {
            intents.push(Intent::ClearSearch);
        }
    });
}

pub fn show_category_buttons(
    ui: &mut egui::Ui,
    controller: &CatalogController,
    intents: &mut Vec<Intent>,
) {
    let state = controller.state();

    ui.horizontal_wrapped(|ui| {
        let all = egui::Button::new(egui::RichText::new("All").color(theme::SUCCESS))
            .selected(state.selected_categories().is_empty());
        if ui.add(all).clicked() {
            intents.push(Intent::ClearCategories);
        }
        ui.add_space(24.0);

        for category in controller.categories() {
            let label = format!("{} {}", category.icon, category.title);
            let selected = state.is_category_selected(category.id);
            if ui.add(egui::Button::new(label).selected(selected)).clicked() {
                intents.push(Intent::ToggleCategory(category.id));
            }
        }
    });
}

pub fn show_reset(ui: &mut egui::Ui, controller: &CatalogController, intents: &mut Vec<Intent>) {
    let button = egui::Button::new(egui::RichText::new("Reset all filters").color(theme::LINK))
        .min_size(egui::vec2(ui.available_width(), 28.0));
    if ui
        .add_enabled(!controller.state().is_default(), button)
        .clicked()
    {
        intents.push(Intent::ResetAll);
    }
}

pub fn show_product_table(
    ui: &mut egui::Ui,
    controller: &CatalogController,
    intents: &mut Vec<Intent>,
) {
    if controller.visible_count() == 0 {
        ui.label(EMPTY_MESSAGE);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("product_table")
            .striped(true)
            .num_columns(4)
            .spacing(egui::vec2(24.0, 6.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("ID").strong());
                sortable_header(ui, controller, "Product", SortColumn::Name, intents);
                sortable_header(ui, controller, "Category", SortColumn::CategoryTitle, intents);
                ui.label(egui::RichText::new("User").strong());
                ui.end_row();

                for row in controller.visible_rows() {
                    ui.label(egui::RichText::new(row.id.to_string()).strong());
                    ui.label(row.name.as_str());
                    ui.label(row.category.as_ref().map(category_label).unwrap_or_default());
                    match &row.owner {
                        Some(owner) => {
                            let color = theme::owner_color(owner_tone(owner.sex));
                            ui.label(egui::RichText::new(&owner.name).color(color));
                        }
                        None => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });
    });
}

fn sortable_header(
    ui: &mut egui::Ui,
    controller: &CatalogController,
    title: &str,
    column: SortColumn,
    intents: &mut Vec<Intent>,
) {
    let glyph = sort_indicator(controller.state(), column).glyph();
    let text = egui::RichText::new(format!("{title} {glyph}")).strong();
    if ui.add(egui::Button::new(text).frame(false)).clicked() {
        intents.push(Intent::ToggleSort(column));
    }
}
