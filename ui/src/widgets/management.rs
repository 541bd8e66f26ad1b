//! Generic list+create management template.
//!
//! Composes the stats row, search box, data table and the create dialog for
//! any entity type. The page owns the workflow: it derives [`CreateDialog`]
//! from the route query parameter and the create compute, injects the form
//! body as a closure, and maps the returned events onto route changes and
//! command dispatches. The template itself never touches the `StateCtx`.

use depot_business::{Column, StatCard, TableQuery};
use egui::{RichText, Ui, Window};

use crate::utils::colors::COLOR_RED;
use crate::widgets::{DataTable, stats_card, stats_skeleton, table_skeleton};

const SKELETON_COL_WIDTHS: [f32; 5] = [0.15, 0.25, 0.20, 0.25, 0.15];
const SKELETON_ROWS: usize = 5;

pub struct ManagementConfig<'a, R> {
    pub title: &'a str,
    pub description: &'a str,
    pub search_placeholder: &'a str,
    pub add_button_label: &'a str,
    pub dialog_title: &'a str,
    pub dialog_description: &'a str,
    pub columns: &'a [Column<R>],
    pub currency: &'a str,
    pub compact: bool,
}

pub struct ManagementData<'a, R> {
    /// `None` degrades to an empty collection.
    pub rows: Option<&'a [R]>,
    pub is_loading: bool,
    /// Fetch failure banner; the table still renders (empty).
    pub fetch_error: Option<&'a str>,
    pub stats: &'a [StatCard],
}

/// Create-workflow phase, derived by the page from the `action=create`
/// query parameter and the create compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDialog<'a> {
    Closed,
    /// Form visible, ready for input.
    Open,
    /// Mutation in flight: spinner, no dismissal, no second submit.
    Submitting,
    /// Mutation failed: form visible again with the error, ready for retry.
    Failed(&'a str),
}

pub struct ManagementResponse<'r, R> {
    pub add_clicked: bool,
    pub submit_clicked: bool,
    pub cancel_clicked: bool,
    pub row_clicked: Option<&'r R>,
}

impl<R> ManagementResponse<'_, R> {
    fn none() -> Self {
        Self {
            add_clicked: false,
            submit_clicked: false,
            cancel_clicked: false,
            row_clicked: None,
        }
    }
}

pub fn management_page<'r, R>(
    ui: &mut Ui,
    config: &ManagementConfig<'_, R>,
    data: &ManagementData<'r, R>,
    query: &mut TableQuery,
    dialog: CreateDialog<'_>,
    form_body: &mut dyn FnMut(&mut Ui),
) -> ManagementResponse<'r, R> {
    let mut response = ManagementResponse::none();

    ui.heading(config.title);
    ui.weak(config.description);
    ui.add_space(12.0);

    // Stats row; skeletons while the collection loads.
    ui.horizontal_wrapped(|ui| {
        if data.is_loading {
            for _ in 0..data.stats.len().max(1) {
                stats_skeleton(ui);
            }
        } else {
            for stat in data.stats {
                stats_card(ui, stat);
            }
        }
    });
    ui.add_space(12.0);

    if let Some(error) = data.fetch_error {
        ui.colored_label(COLOR_RED, format!("Error: {error}"));
        ui.add_space(8.0);
    }

    // Search + Add row; the table's own search box stays off.
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut query.search)
                .hint_text(config.search_placeholder)
                .desired_width(300.0),
        );
        if ui.button(format!("➕ {}", config.add_button_label)).clicked() {
            response.add_clicked = true;
        }
    });
    ui.add_space(6.0);

    if data.is_loading {
        table_skeleton(ui, SKELETON_ROWS, &SKELETON_COL_WIDTHS);
    } else {
        let rows = data.rows.unwrap_or(&[]);
        let table = DataTable::new(config.title, config.columns, config.currency)
            .compact(config.compact)
            .show_search(false);
        response.row_clicked = table.show(ui, rows, query).clicked;
    }

    if dialog != CreateDialog::Closed {
        let (submit, cancel) = create_dialog(ui, config, dialog, form_body);
        response.submit_clicked = submit;
        response.cancel_clicked = cancel;
    }

    response
}

/// Returns `(submit_clicked, cancel_clicked)`.
fn create_dialog<R>(
    ui: &mut Ui,
    config: &ManagementConfig<'_, R>,
    dialog: CreateDialog<'_>,
    form_body: &mut dyn FnMut(&mut Ui),
) -> (bool, bool) {
    let mut submit = false;
    let mut cancel = false;

    // The close button is withheld mid-flight; only success or an explicit
    // cancel closes the dialog.
    let submitting = dialog == CreateDialog::Submitting;
    let mut open = true;

    let mut window = Window::new(config.dialog_title)
        .collapsible(false)
        .resizable(false);
    if !submitting {
        window = window.open(&mut open);
    }

    window.show(ui.ctx(), |ui| {
        ui.weak(config.dialog_description);
        ui.add_space(8.0);

        if let CreateDialog::Failed(error) = dialog {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
            ui.add_space(8.0);
        }

        if submitting {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Submitting...");
            });
            return;
        }

        form_body(ui);

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("Create").strong())
                .clicked()
            {
                submit = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    });

    if !open {
        cancel = true;
    }

    (submit, cancel)
}
