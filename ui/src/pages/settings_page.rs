//! Settings page: console preferences that take effect immediately.

use depot_business::{ProductsState, SettingsState, ViewMode};
use egui::Ui;

use crate::state::State;

pub fn settings_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;

    ui.heading("Settings");
    ui.weak("Preferences for this console. Reset on restart.");
    ui.add_space(12.0);

    let mut settings = *ctx.state::<SettingsState>();
    let mut default_view_changed = false;

    ui.checkbox(&mut settings.compact_tables, "Compact table rows");
    ui.checkbox(&mut settings.show_archived, "Show archived products");

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("Default products view:");
        egui::ComboBox::from_id_salt("default_view")
            .selected_text(match settings.default_view {
                ViewMode::Grid => "Grid",
                ViewMode::Table => "Table",
            })
            .show_ui(ui, |ui| {
                if ui
                    .selectable_value(&mut settings.default_view, ViewMode::Grid, "Grid")
                    .clicked()
                {
                    default_view_changed = true;
                }
                if ui
                    .selectable_value(&mut settings.default_view, ViewMode::Table, "Table")
                    .clicked()
                {
                    default_view_changed = true;
                }
            });
    });

    if settings != *ctx.state::<SettingsState>() {
        *ctx.state_mut::<SettingsState>() = settings;
    }
    if default_view_changed {
        ctx.state_mut::<ProductsState>().view_mode = settings.default_view;
    }
}
